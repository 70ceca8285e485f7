//! Core types for windowed time-integration output assembly.
//!
//! This crate defines the shared vocabulary that assembly components and
//! models build on:
//!
//! - [`StateVar`] — a named, shaped, optionally unit-labeled state variable
//! - [`SparseMap`] — a constant sparse linear map between flattened arrays,
//!   stored as (row, col, value) triples
//! - [`names`] — the host-facing naming scheme for per-state variables

mod sparse;
mod state;

pub mod names;

pub use sparse::SparseMap;
pub use state::{StateVar, StateVarError};
