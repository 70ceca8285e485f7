use splice_core::{SparseMap, StateVar};

use super::Config;

/// Constant sparse partials declared for one state.
///
/// Row and column indices address row-major flattenings of the arrays named
/// by the [`names`](splice_core::names) scheme. Values are fixed at
/// configuration time and identical for every evaluation.
#[derive(Debug, Clone)]
pub struct Partials {
    /// d(`state:<name>`) / d(`y:<name>`).
    pub d_state_wrt_y: SparseMap,

    /// d(`state:<name>`) / d(`starting_state:<name>`); present iff a
    /// carried-over starting array is blended in.
    pub d_state_wrt_starting_state: Option<SparseMap>,

    /// d(`starting:<name>`) / d(`y:<name>`); present iff this window emits
    /// starting values.
    pub d_starting_wrt_y: Option<SparseMap>,
}

impl Partials {
    pub(crate) fn build(config: &Config, state: &StateVar) -> Self {
        let n = state.size();
        let num_my_times = config.num_my_times();
        let num_starting_times = config.num_starting_times();
        let num_step_vars = config.num_step_vars();
        let num_times = config.num_times();

        let y_len = num_my_times * num_step_vars * n;
        let state_len = num_times * n;

        // Each trailing output element takes the matching sub-stage-0 input
        // element with unit weight.
        let mut d_state_wrt_y = SparseMap::with_capacity(state_len, y_len, num_my_times * n);
        for j in 0..num_my_times {
            for s in 0..n {
                let row = (num_starting_times - 1 + j) * n + s;
                let col = j * num_step_vars * n + s;
                d_state_wrt_y.push(row, col, 1.0);
            }
        }

        // Each leading output element takes the starting-state element at the
        // same time index; the starting array's last entry never feeds the
        // output.
        let d_state_wrt_starting_state = config.has_starting_method().then(|| {
            let starting_state_len = num_starting_times * n;
            let nnz = (num_starting_times - 1) * n;
            let mut map = SparseMap::with_capacity(state_len, starting_state_len, nnz);
            for t in 0..num_starting_times - 1 {
                for s in 0..n {
                    map.push(t * n + s, t * n + s, 1.0);
                }
            }
            map
        });

        // The coefficient at (i, j, k) is replicated across every shape
        // element; shape dimensions are never mixed.
        let d_starting_wrt_y = config.starting_coeffs().map(|coeffs| {
            let num_starting = coeffs.dim().0;
            let nnz = num_starting * num_my_times * num_step_vars * n;
            let mut map = SparseMap::with_capacity(num_starting * n, y_len, nnz);
            for i in 0..num_starting {
                for j in 0..num_my_times {
                    for k in 0..num_step_vars {
                        let val = coeffs[[i, j, k]];
                        for s in 0..n {
                            map.push(i * n + s, (j * num_step_vars + k) * n + s, val);
                        }
                    }
                }
            }
            map
        });

        Self {
            d_state_wrt_y,
            d_state_wrt_starting_state,
            d_starting_wrt_y,
        }
    }
}
