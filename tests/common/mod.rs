mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from examgate for tests
pub use examgate::{GatePhase, Route, VerificationGate};
