use iced::{
    Element, Event, Subscription, Task, Theme, event, keyboard, keyboard::key, widget, window,
};

use super::screens::{Screen, ScreenData, ScreenMessage, home::HomeMessage};
use super::{AppState, Message};
use crate::route::Route;

pub struct ExamGateApp {
    state: AppState,
    screen: ScreenData,
}

impl ExamGateApp {
    pub fn new(initial: Route) -> (Self, Task<Message>) {
        let mut state = AppState::default();
        let screen = ScreenData::resolve(initial, &mut state);
        (Self { state, screen }, Task::none())
    }

    pub fn title(&self) -> String {
        match &self.state.session {
            Some(session) => format!("Examgate - {}", session.netid),
            None => "Examgate".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FocusNext => widget::focus_next(),
            Message::FocusPrevious => widget::focus_previous(),
            message => self
                .screen
                .update(message, &mut self.state)
                .map(|message| match message {
                    ScreenMessage::ScreenMessage(message) => message,
                    ScreenMessage::ParentMessage(never) => match never {},
                }),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(|message| match message {
            ScreenMessage::ScreenMessage(message) => message,
            ScreenMessage::ParentMessage(never) => match never {},
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Keyboard handling is only live while the verification dialog is on
    /// screen: Escape dismisses it, Tab and Shift-Tab cycle input focus.
    pub fn subscription(&self) -> Subscription<Message> {
        match &self.screen {
            ScreenData::Home(home) if home.is_gate_open() => {
                event::listen_with(Self::handle_gate_event)
            }
            _ => Subscription::none(),
        }
    }

    /// Map a runtime event to a gate action. A focused text input captures
    /// Escape to clear its own focus, so dismissal acts on captured presses
    /// too; Tab only cycles focus when no widget claimed the press.
    pub fn handle_gate_event(
        event: Event,
        status: event::Status,
        _window: window::Id,
    ) -> Option<Message> {
        let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
            return None;
        };
        match key {
            keyboard::Key::Named(key::Named::Escape) => Some(Message::Home(
                ScreenMessage::ScreenMessage(HomeMessage::DismissGate),
            )),
            keyboard::Key::Named(key::Named::Tab)
                if status == event::Status::Ignored && modifiers.shift() =>
            {
                Some(Message::FocusPrevious)
            }
            keyboard::Key::Named(key::Named::Tab) if status == event::Status::Ignored => {
                Some(Message::FocusNext)
            }
            _ => None,
        }
    }
}
