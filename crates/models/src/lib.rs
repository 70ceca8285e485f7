//! Vectorized launch-vehicle ascent model.
//!
//! A 2-D point-mass ascent evaluated at many trajectory nodes at once:
//!
//! - [`CentralBody`] — the gravitational body, fixing surface gravity and
//!   the atmosphere constants
//! - [`LogAtmosphere`] — exponential density falloff with altitude
//! - [`LaunchVehicle2dEom`] — per-node equations of motion with thrust,
//!   drag, and mass flow
//! - [`LaunchVehicleOde`] — wires the atmosphere into the equations of
//!   motion and returns per-node state rates

mod atmosphere;
mod central_body;
mod eom;
mod ode;

pub use atmosphere::LogAtmosphere;
pub use central_body::{CentralBody, UnrecognizedCentralBody};
pub use eom::{EomInputs, LaunchVehicle2dEom, StateRates, G0};
pub use ode::{LaunchVehicleOde, OdeConfigError, OdeInputs};
