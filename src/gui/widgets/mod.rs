use iced::{
    Color, Element, Theme,
    widget::{center, container, mouse_area, opaque, stack},
};
use iced_widget::container::bordered_box;

/// Float `content` over a dimmed `base`. Clicking the backdrop emits
/// `on_dismiss`; interactions inside the content stay with the content.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_dismiss: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_dismiss)
        )
    ]
    .into()
}

/// Chrome for a dialog card: fixed width, padded, bordered box drawn on the
/// theme's base background so it stands out against the dimmed backdrop.
pub fn dialog<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content.into())
        .width(360)
        .padding(24)
        .style(|theme: &Theme| bordered_box(theme).background(theme.palette().background))
        .into()
}
