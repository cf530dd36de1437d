use time::OffsetDateTime;

/// A verified exam session: the identifiers the gate captured and when the
/// hand-off happened. Checking them is the course service's job; this is
/// only the client-side record of the navigation.
#[derive(Debug, Clone)]
pub struct ExamSession {
    pub netid: String,
    pub code: String,
    pub started_at: OffsetDateTime,
}

impl ExamSession {
    /// Record the start of a verified session.
    pub fn begin(netid: String, code: String) -> Self {
        Self {
            netid,
            code,
            started_at: OffsetDateTime::now_utc(),
        }
    }
}

/// State shared by every screen.
#[derive(Debug)]
pub struct AppState {
    pub session: Option<ExamSession>,
}

impl Default for AppState {
    fn default() -> Self {
        Self { session: None }
    }
}
