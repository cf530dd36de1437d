#![cfg(feature = "gui")]

//! Integration tests for screen routing and the verification flow as the
//! home screen drives it.
//!
//! Tests cover:
//! - Route resolution updating the shared session record
//! - The router arm swapping screens on a navigation request
//! - The gate flow message by message (show, type, dismiss, confirm)
//! - Raw draft display vs trimmed storage for the dialog inputs
//! - The keyboard mapping while the dialog is open (Escape, Tab)

mod common;

use common::*;

use iced::keyboard::{self, key};
use iced::{Event, event, window};

use examgate::gui::screens::home::{HomeMessage, HomeScreen};
use examgate::gui::screens::{Screen, ScreenData, ScreenMessage};
use examgate::gui::{AppState, ExamGateApp, Message};

#[test]
fn test_resolve_final_questions_records_session() {
    let mut state = AppState::default();

    let screen = ScreenData::resolve(
        Route::FinalQuestions {
            code: TEST_CODE.to_string(),
            netid: TEST_NETID.to_string(),
        },
        &mut state,
    );

    assert!(matches!(screen, ScreenData::FinalQuestions(_)));
    let session = state.session.expect("session should be recorded");
    assert_eq!(session.netid, TEST_NETID);
    assert_eq!(session.code, TEST_CODE);
}

#[test]
fn test_resolve_home_clears_session() {
    let mut state = AppState::default();
    let _ = ScreenData::resolve(
        Route::FinalQuestions {
            code: TEST_CODE.to_string(),
            netid: TEST_NETID.to_string(),
        },
        &mut state,
    );
    assert!(state.session.is_some());

    let screen = ScreenData::resolve(Route::Home, &mut state);

    assert!(matches!(screen, ScreenData::Home(_)));
    assert!(state.session.is_none());
}

#[test]
fn test_navigate_message_swaps_screen() {
    let mut state = AppState::default();
    let mut screen = ScreenData::resolve(Route::Home, &mut state);

    let route = Route::FinalQuestions {
        code: TEST_CODE.to_string(),
        netid: TEST_NETID.to_string(),
    };
    let _ = screen.update(Message::Navigate(route), &mut state);

    assert!(matches!(screen, ScreenData::FinalQuestions(_)));
    assert_eq!(
        state.session.as_ref().map(|s| s.netid.as_str()),
        Some(TEST_NETID)
    );
}

#[test]
fn test_gate_flow_through_home_screen() {
    let mut state = AppState::default();
    let mut home = HomeScreen::default();
    assert_eq!(home.is_gate_open(), false);

    // 1. Show the dialog
    let _ = home.update(HomeMessage::ShowGate, &mut state);
    assert!(home.is_gate_open());

    // 2. Type into both fields (inputs arrive padded)
    let _ = home.update(HomeMessage::NetidChanged("  alice  ".to_string()), &mut state);
    let _ = home.update(HomeMessage::CodeChanged(format!(" {TEST_CODE} ")), &mut state);
    assert_eq!(home.gate().netid(), TEST_NETID);
    assert_eq!(home.gate().code(), TEST_CODE);

    // The inputs keep showing the text as typed
    assert_eq!(home.netid_draft(), "  alice  ");
    assert_eq!(home.code_draft(), " abc123 ");

    // 3. Confirm: the gate is done and the dialog is gone
    let _ = home.update(HomeMessage::ConfirmGate, &mut state);
    assert!(home.gate().is_confirmed());
    assert_eq!(home.is_gate_open(), false);
}

#[test]
fn test_typing_preserves_interior_whitespace() {
    let mut state = AppState::default();
    let mut home = HomeScreen::default();
    let _ = home.update(HomeMessage::ShowGate, &mut state);

    // Each change event carries the text the input displays plus the typed
    // character; a trimmed echo would collapse "mary " back to "mary" and
    // lose the space
    for ch in "mary jane".chars() {
        let payload = format!("{}{}", home.netid_draft(), ch);
        let _ = home.update(HomeMessage::NetidChanged(payload), &mut state);
    }

    assert_eq!(home.netid_draft(), "mary jane");
    assert_eq!(home.gate().netid(), "mary jane");
}

#[test]
fn test_dismiss_keeps_draft_values() {
    let mut state = AppState::default();
    let mut home = HomeScreen::default();

    let _ = home.update(HomeMessage::ShowGate, &mut state);
    let _ = home.update(HomeMessage::NetidChanged(TEST_NETID.to_string()), &mut state);
    let _ = home.update(HomeMessage::DismissGate, &mut state);

    assert_eq!(home.is_gate_open(), false);
    assert_eq!(home.gate().is_confirmed(), false);
    assert_eq!(home.gate().netid(), TEST_NETID);
    assert_eq!(home.netid_draft(), TEST_NETID);

    // Reopening shows the retained draft
    let _ = home.update(HomeMessage::ShowGate, &mut state);
    assert!(home.is_gate_open());
    assert_eq!(home.gate().netid(), TEST_NETID);
    assert_eq!(home.netid_draft(), TEST_NETID);
}

#[test]
fn test_confirm_without_dialog_is_inert() {
    let mut state = AppState::default();
    let mut home = HomeScreen::default();

    let _ = home.update(HomeMessage::ConfirmGate, &mut state);

    assert_eq!(home.gate().is_confirmed(), false);
    assert_eq!(home.is_gate_open(), false);
}

fn key_press(named: key::Named, modifiers: keyboard::Modifiers) -> Event {
    Event::Keyboard(keyboard::Event::KeyPressed {
        key: keyboard::Key::Named(named),
        modified_key: keyboard::Key::Named(named),
        physical_key: key::Physical::Unidentified(key::NativeCode::Unidentified),
        location: keyboard::Location::Standard,
        modifiers,
        text: None,
    })
}

#[test]
fn test_escape_dismisses_even_when_an_input_claims_the_key() {
    // A focused text input captures Escape to clear its own focus; the
    // dialog must still dismiss on that same press
    let message = ExamGateApp::handle_gate_event(
        key_press(key::Named::Escape, keyboard::Modifiers::default()),
        event::Status::Captured,
        window::Id::unique(),
    );
    assert!(matches!(
        message,
        Some(Message::Home(ScreenMessage::ScreenMessage(
            HomeMessage::DismissGate
        )))
    ));

    // Unclaimed Escape dismisses as well
    let message = ExamGateApp::handle_gate_event(
        key_press(key::Named::Escape, keyboard::Modifiers::default()),
        event::Status::Ignored,
        window::Id::unique(),
    );
    assert!(matches!(
        message,
        Some(Message::Home(ScreenMessage::ScreenMessage(
            HomeMessage::DismissGate
        )))
    ));
}

#[test]
fn test_tab_cycles_focus_only_when_unclaimed() {
    let message = ExamGateApp::handle_gate_event(
        key_press(key::Named::Tab, keyboard::Modifiers::default()),
        event::Status::Ignored,
        window::Id::unique(),
    );
    assert!(matches!(message, Some(Message::FocusNext)));

    let message = ExamGateApp::handle_gate_event(
        key_press(key::Named::Tab, keyboard::Modifiers::SHIFT),
        event::Status::Ignored,
        window::Id::unique(),
    );
    assert!(matches!(message, Some(Message::FocusPrevious)));

    // A widget that claimed Tab keeps it
    let message = ExamGateApp::handle_gate_event(
        key_press(key::Named::Tab, keyboard::Modifiers::default()),
        event::Status::Captured,
        window::Id::unique(),
    );
    assert!(message.is_none());
}

#[test]
fn test_other_events_map_to_nothing() {
    let message = ExamGateApp::handle_gate_event(
        key_press(key::Named::Enter, keyboard::Modifiers::default()),
        event::Status::Ignored,
        window::Id::unique(),
    );
    assert!(message.is_none());

    let message = ExamGateApp::handle_gate_event(
        Event::Keyboard(keyboard::Event::ModifiersChanged(
            keyboard::Modifiers::default(),
        )),
        event::Status::Ignored,
        window::Id::unique(),
    );
    assert!(message.is_none());
}
