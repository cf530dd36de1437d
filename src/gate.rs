use tracing::debug;

use crate::route::Route;

/// Lifecycle of the verification dialog.
///
/// The gate only ever moves forward to `Confirmed`; dismissal bounces
/// between `Hidden` and `Visible` without touching captured values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatePhase {
    /// Dialog is not on screen.
    #[default]
    Hidden,
    /// Dialog is on screen collecting input.
    Visible,
    /// Confirm action fired; navigation has been requested. Terminal.
    Confirmed,
}

/// State behind the verification dialog: a netid, an access code, and where
/// the dialog is in its lifecycle.
///
/// Values are stored trimmed (leading/trailing whitespace stripped on
/// capture). There is no validation beyond that: empty strings are legal and
/// are forwarded to the destination as-is.
#[derive(Debug, Clone, Default)]
pub struct VerificationGate {
    netid: String,
    code: String,
    phase: GatePhase,
}

impl VerificationGate {
    /// Create a hidden gate with empty fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the dialog. Does nothing once the gate has been confirmed.
    pub fn open(&mut self) {
        if self.phase == GatePhase::Hidden {
            debug!("verification gate opened");
            self.phase = GatePhase::Visible;
        }
    }

    /// Hide the dialog without confirming. Captured values are retained and
    /// reappear if the gate is opened again.
    pub fn dismiss(&mut self) {
        if self.phase == GatePhase::Visible {
            debug!("verification gate dismissed");
            self.phase = GatePhase::Hidden;
        }
    }

    /// Capture the netid field. The value is trimmed before storage.
    /// Ignored unless the dialog is visible.
    pub fn set_netid(&mut self, raw: &str) {
        if self.phase == GatePhase::Visible {
            self.netid = raw.trim().to_owned();
        }
    }

    /// Capture the access code field. The value is trimmed before storage.
    /// Ignored unless the dialog is visible.
    pub fn set_code(&mut self, raw: &str) {
        if self.phase == GatePhase::Visible {
            self.code = raw.trim().to_owned();
        }
    }

    /// Fire the confirm action: move to `Confirmed` and hand back the
    /// destination route. Returns `None` if the dialog is not visible or was
    /// already confirmed (the transition is one-way).
    pub fn confirm(&mut self) -> Option<Route> {
        if self.phase != GatePhase::Visible {
            return None;
        }
        self.phase = GatePhase::Confirmed;
        let route = Route::FinalQuestions {
            code: self.code.clone(),
            netid: self.netid.clone(),
        };
        debug!(path = %route, "verification gate confirmed");
        Some(route)
    }

    /// Whether the dialog should currently be rendered.
    pub fn is_visible(&self) -> bool {
        self.phase == GatePhase::Visible
    }

    /// Whether the confirm action has fired.
    pub fn is_confirmed(&self) -> bool {
        self.phase == GatePhase::Confirmed
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Captured netid (trimmed form of the most recent input).
    pub fn netid(&self) -> &str {
        &self.netid
    }

    /// Captured access code (trimmed form of the most recent input).
    pub fn code(&self) -> &str {
        &self.code
    }
}
