//! Assembly components for a multi-window, multi-stage time-integration
//! scheme.
//!
//! An integration scheme evaluates each local time window through a set of
//! internal sub-stages. The components here turn those raw sub-step outputs
//! into the arrays the rest of the problem consumes:
//!
//! - [`output`] — assembles the per-window state history and, when the
//!   window bootstraps a multi-step method, the reduced starting values for
//!   the next window, along with constant sparse partials for gradient-based
//!   solvers.

pub mod output;
