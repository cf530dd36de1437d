use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, focus_next, horizontal_space, row, text, text_input},
};

use crate::{
    gate::VerificationGate,
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets,
    },
    route::Route,
};

/// Landing screen. Hosts the verification gate and owns its state; the
/// dialog overlays the landing content while the gate is visible.
#[derive(Debug, Clone, Default)]
pub struct HomeScreen {
    gate: VerificationGate,
    // The inputs display the raw drafts; the gate stores the trimmed values.
    netid_draft: String,
    code_draft: String,
}

#[derive(Debug, Clone)]
pub enum HomeMessage {
    ShowGate,
    DismissGate,
    NetidChanged(String),
    CodeChanged(String),
    ConfirmGate,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    /// The gate confirmed; navigate to the destination it composed.
    Verified(Route),
}

impl Screen for HomeScreen {
    type Message = HomeMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let content = column![
            text("Examgate").size(32),
            text("Final exam questions for verified students"),
            button("Verify to continue")
                .on_press(ScreenMessage::ScreenMessage(HomeMessage::ShowGate)),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        let base = container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill);

        if !self.gate.is_visible() {
            return base.into();
        }

        let dialog = widgets::dialog(
            column![
                text("Verification").size(24),
                text("Please verify your netid and access code to see your exam questions"),
                text_input("netid", &self.netid_draft)
                    .on_input(|value| {
                        ScreenMessage::ScreenMessage(HomeMessage::NetidChanged(value))
                    })
                    .on_submit(ScreenMessage::ScreenMessage(HomeMessage::ConfirmGate))
                    .padding(10),
                text_input("code", &self.code_draft)
                    .on_input(|value| ScreenMessage::ScreenMessage(HomeMessage::CodeChanged(value)))
                    .on_submit(ScreenMessage::ScreenMessage(HomeMessage::ConfirmGate))
                    .padding(10),
                row![
                    horizontal_space(),
                    button("Verify")
                        .on_press(ScreenMessage::ScreenMessage(HomeMessage::ConfirmGate)),
                ],
            ]
            .spacing(12),
        );

        widgets::modal(
            base,
            dialog,
            ScreenMessage::ScreenMessage(HomeMessage::DismissGate),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            HomeMessage::ShowGate => {
                self.gate.open();
                focus_next()
            }
            HomeMessage::DismissGate => {
                self.gate.dismiss();
                Task::none()
            }
            HomeMessage::NetidChanged(value) => {
                if self.gate.is_visible() {
                    self.gate.set_netid(&value);
                    self.netid_draft = value;
                }
                Task::none()
            }
            HomeMessage::CodeChanged(value) => {
                if self.gate.is_visible() {
                    self.gate.set_code(&value);
                    self.code_draft = value;
                }
                Task::none()
            }
            HomeMessage::ConfirmGate => match self.gate.confirm() {
                Some(route) => {
                    Task::done(ScreenMessage::ParentMessage(ParentMessage::Verified(route)))
                }
                None => Task::none(),
            },
        }
    }
}

impl HomeScreen {
    /// Gate state, read by the app-level keyboard subscription and tests.
    pub fn gate(&self) -> &VerificationGate {
        &self.gate
    }

    /// Whether the verification dialog is currently shown.
    pub fn is_gate_open(&self) -> bool {
        self.gate.is_visible()
    }

    /// Raw netid text as the input displays it (the stored value is trimmed).
    pub fn netid_draft(&self) -> &str {
        &self.netid_draft
    }

    /// Raw access code text as the input displays it.
    pub fn code_draft(&self) -> &str {
        &self.code_draft
    }
}
