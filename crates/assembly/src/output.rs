//! Assembles per-window state histories from time-integration sub-step
//! outputs.
//!
//! # Windowing
//!
//! A window covers `num_my_times` local time points, each evaluated through
//! `num_step_vars` internal sub-stages. When a multi-step method is seeded
//! by a previous window, `num_starting_times > 1` values are carried over
//! and blended into the front of the assembled history; the window's full
//! length is then `num_times = num_starting_times + num_my_times - 1`.
//!
//! At the overlap point the freshly computed sub-stage-0 value always wins
//! over the carried-over value for the same logical time.
//!
//! A window can itself act as a starting-value generator for the next
//! window. In that case a fixed coefficients tensor is supplied at
//! configuration time and the reduced starting values are a linear
//! combination of the sub-step outputs.
//!
//! # Partials
//!
//! Every input/output relationship here is linear with coefficients fixed at
//! configuration time, so each state's partial derivatives are declared once
//! as constant [`SparseMap`](splice_core::SparseMap)s and never change
//! between evaluations.

mod assembler;
mod config;
mod partials;


pub use assembler::{OutputAssembler, StateInputs, StateOutputs};
pub use config::{Config, ConfigError};
pub use partials::Partials;
