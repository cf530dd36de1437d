use examgate::VerificationGate;

/// Netid used across tests.
pub const TEST_NETID: &str = "alice";
/// Access code used across tests.
pub const TEST_CODE: &str = "abc123";

/// Creates a gate that has been opened: dialog visible, fields empty.
pub fn open_gate() -> VerificationGate {
    let mut gate = VerificationGate::new();
    gate.open();
    gate
}

/// Creates a visible gate with both fields already captured.
pub fn filled_gate(netid: &str, code: &str) -> VerificationGate {
    let mut gate = open_gate();
    gate.set_netid(netid);
    gate.set_code(code);
    gate
}
