//! Host-facing variable names for per-state inputs and outputs.
//!
//! Components register one set of variables per state. The host framework
//! wires them by name, so every component uses the same `<kind>:<state>`
//! scheme.

/// Name of the sub-step output input for a state.
#[must_use]
pub fn y(state: &str) -> String {
    format!("y:{state}")
}

/// Name of the carried-over starting-state input for a state.
#[must_use]
pub fn starting_state(state: &str) -> String {
    format!("starting_state:{state}")
}

/// Name of the assembled state-history output for a state.
#[must_use]
pub fn state(state: &str) -> String {
    format!("state:{state}")
}

/// Name of the reduced starting-value output for a state.
#[must_use]
pub fn starting(state: &str) -> String {
    format!("starting:{state}")
}
