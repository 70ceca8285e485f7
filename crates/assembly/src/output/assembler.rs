use ndarray::{ArrayD, ArrayViewD, Axis, IxDyn};

use super::{Config, Partials};

/// Per-evaluation inputs for one state.
#[derive(Debug, Clone)]
pub struct StateInputs<'a> {
    /// Sub-step outputs, shape `(num_my_times, num_step_vars) + shape`.
    pub y: ArrayViewD<'a, f64>,

    /// Values carried over from the previous window, shape
    /// `(num_starting_times,) + shape`. Required iff the config blends a
    /// starting array in.
    pub starting_state: Option<ArrayViewD<'a, f64>>,
}

/// Assembled outputs for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct StateOutputs {
    /// Full state history for the window, shape `(num_times,) + shape`.
    pub state: ArrayD<f64>,

    /// Starting values for the next window, shape `(num_starting,) + shape`;
    /// present iff the config supplies starting coefficients.
    pub starting: Option<ArrayD<f64>>,
}

/// Assembles per-window state histories and starting values from
/// time-integration sub-step outputs.
///
/// Construction precomputes every state's constant sparse partials from the
/// config alone. Evaluation is pure: it reads the given arrays, writes fresh
/// output arrays, and keeps no state between calls, so distinct states may
/// be assembled concurrently once the assembler is built.
#[derive(Debug, Clone)]
pub struct OutputAssembler {
    config: Config,
    partials: Vec<Partials>,
}

impl OutputAssembler {
    /// Builds an assembler and precomputes the sparse partial structure for
    /// every configured state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let partials = config
            .states()
            .iter()
            .map(|state| Partials::build(&config, state))
            .collect();

        Self { config, partials }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the registration index of a state, if configured.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.config.states().iter().position(|s| s.name() == name)
    }

    /// Returns the constant partials for the state at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn partials(&self, index: usize) -> &Partials {
        &self.partials[index]
    }

    /// Assembles one state's outputs for this window.
    ///
    /// The trailing `num_my_times` entries of the history come from the
    /// sub-stage-0 slice of `y` in time order. When a starting array is
    /// blended in, its first `num_starting_times - 1` entries fill the front
    /// of the history; the overlap entry always takes the fresh `y[0, 0]`
    /// value. When starting coefficients are configured, the starting output
    /// is their contraction against `y` over time and stage, broadcast over
    /// the shape dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range, if array extents disagree with the
    /// configured counts and shape, or if `starting_state` presence disagrees
    /// with the config.
    #[must_use]
    pub fn assemble(&self, index: usize, inputs: &StateInputs<'_>) -> StateOutputs {
        let shape = self.config.states()[index].shape();
        let num_my_times = self.config.num_my_times();
        let num_starting_times = self.config.num_starting_times();
        let num_step_vars = self.config.num_step_vars();

        assert_eq!(
            inputs.starting_state.is_some(),
            self.config.has_starting_method(),
            "starting_state presence must match the configured starting method",
        );

        let mut state_shape = Vec::with_capacity(1 + shape.len());
        state_shape.push(self.config.num_times());
        state_shape.extend_from_slice(shape);
        let mut state = ArrayD::<f64>::zeros(IxDyn(&state_shape));

        for j in 0..num_my_times {
            let y_j = inputs.y.index_axis(Axis(0), j);
            let stage0 = y_j.index_axis(Axis(0), 0);
            state
                .index_axis_mut(Axis(0), num_starting_times - 1 + j)
                .assign(&stage0);
        }

        if let Some(starting_state) = &inputs.starting_state {
            for t in 0..num_starting_times - 1 {
                state
                    .index_axis_mut(Axis(0), t)
                    .assign(&starting_state.index_axis(Axis(0), t));
            }
        }

        let starting = self.config.starting_coeffs().map(|coeffs| {
            let num_starting = coeffs.dim().0;

            let mut starting_shape = Vec::with_capacity(1 + shape.len());
            starting_shape.push(num_starting);
            starting_shape.extend_from_slice(shape);
            let mut starting = ArrayD::<f64>::zeros(IxDyn(&starting_shape));

            for i in 0..num_starting {
                let mut row = starting.index_axis_mut(Axis(0), i);
                for j in 0..num_my_times {
                    let y_j = inputs.y.index_axis(Axis(0), j);
                    for k in 0..num_step_vars {
                        row.scaled_add(coeffs[[i, j, k]], &y_j.index_axis(Axis(0), k));
                    }
                }
            }
            starting
        });

        StateOutputs { state, starting }
    }

    /// Assembles every configured state, in registration order.
    ///
    /// # Panics
    ///
    /// Panics if `inputs` length differs from the configured state count, or
    /// as [`assemble`](Self::assemble) does for any single state.
    #[must_use]
    pub fn assemble_all(&self, inputs: &[StateInputs<'_>]) -> Vec<StateOutputs> {
        assert_eq!(
            inputs.len(),
            self.config.states().len(),
            "one input set per configured state",
        );
        inputs
            .iter()
            .enumerate()
            .map(|(index, state_inputs)| self.assemble(index, state_inputs))
            .collect()
    }
}
