use crate::gui::screens::{
    ScreenMessage, final_questions::FinalQuestionsScreen, home::HomeScreen,
};
use crate::route::Route;

#[derive(Debug, Clone)]
pub enum Message {
    Home(ScreenMessage<HomeScreen>),
    FinalQuestions(ScreenMessage<FinalQuestionsScreen>),
    /// Request a screen change. The single door through which every
    /// navigation goes, including the gate's confirmed hand-off.
    Navigate(Route),
    /// Move keyboard focus between the dialog's inputs.
    FocusNext,
    FocusPrevious,
}
