use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{column, container, text},
};
use time::{UtcOffset, format_description::well_known::Rfc3339};

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    state::ExamSession,
};

/// Destination view for a verified session. Question delivery and the real
/// credential check happen on the course side; this screen only shows what
/// was handed off.
#[derive(Debug, Clone)]
pub struct FinalQuestionsScreen {
    session: ExamSession,
    started_label: String,
}

impl FinalQuestionsScreen {
    pub fn new(session: ExamSession) -> Self {
        let started_at = UtcOffset::current_local_offset()
            .map(|offset| session.started_at.to_offset(offset))
            .unwrap_or(session.started_at);
        let started_label = started_at.format(&Rfc3339).unwrap_or_default();
        Self {
            session,
            started_label,
        }
    }
}

impl Screen for FinalQuestionsScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let content = column![
            text("Final Questions").size(32),
            text(format!("Verified as {}", self.session.netid)),
            text(format!("Session code: {}", self.session.code)),
            text(format!("Session started {}", self.started_label)).size(12),
            text("Your questions appear here once course staff release them."),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        _message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        Task::none()
    }
}
