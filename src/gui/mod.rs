mod app;
mod message;
pub mod screens;
mod state;
mod widgets;

pub use app::ExamGateApp;
pub use message::Message;
pub use state::{AppState, ExamSession};

use crate::route::Route;

/// Launch the desktop client at the given initial route.
pub fn run(initial: Route) -> iced::Result {
    iced::application(ExamGateApp::title, ExamGateApp::update, ExamGateApp::view)
        .theme(ExamGateApp::theme)
        .subscription(ExamGateApp::subscription)
        .window(iced::window::Settings {
            size: iced::Size::new(760.0, 560.0),
            ..iced::window::Settings::default()
        })
        .run_with(move || ExamGateApp::new(initial))
}
