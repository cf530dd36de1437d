pub mod final_questions;
pub mod home;

use iced::{Element, Task};
use tracing::info;

use crate::{
    gui::{AppState, Message, state::ExamSession},
    route::Route,
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Home(home::HomeScreen),
    FinalQuestions(final_questions::FinalQuestionsScreen),
}

impl ScreenData {
    /// Resolve a route to the screen that renders it, updating the shared
    /// session record on the way. Every navigation goes through here, both
    /// in-app hand-offs and command line deep links.
    pub fn resolve(route: Route, state: &mut AppState) -> ScreenData {
        info!(path = %route, "navigating");
        match route {
            Route::Home => {
                state.session = None;
                ScreenData::Home(home::HomeScreen::default())
            }
            Route::FinalQuestions { code, netid } => {
                let session = ExamSession::begin(netid, code);
                state.session = Some(session.clone());
                ScreenData::FinalQuestions(final_questions::FinalQuestionsScreen::new(session))
            }
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Home(screen) => screen.view().map(Message::Home),
            ScreenData::FinalQuestions(screen) => screen.view().map(Message::FinalQuestions),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::Navigate(route)) => {
                *x = ScreenData::resolve(route, state);
                Task::none()
            }
            (ScreenData::Home(page), Message::Home(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Home)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    home::ParentMessage::Verified(route) => {
                        // The gate has confirmed; hand the route to the router.
                        Task::done(ScreenMessage::ScreenMessage(Message::Navigate(route)))
                    }
                },
            },
            (ScreenData::FinalQuestions(page), Message::FinalQuestions(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::FinalQuestions)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(never) => match never {},
            },
            _ => Task::none(),
        }
    }
}
