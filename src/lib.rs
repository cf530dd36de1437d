pub mod gate;
pub mod route;

pub use gate::{GatePhase, VerificationGate};
pub use route::Route;

#[cfg(feature = "gui")]
pub mod gui;
