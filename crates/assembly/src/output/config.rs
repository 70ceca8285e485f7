use ndarray::Array3;
use splice_core::StateVar;
use thiserror::Error;

/// Configuration for the output assembler.
///
/// Fixed once at construction; the registered schema and the sparse partial
/// structures derive entirely from these counts and shapes, never from array
/// contents.
#[derive(Debug, Clone)]
pub struct Config {
    states: Vec<StateVar>,
    num_my_times: usize,
    num_starting_times: usize,
    num_step_vars: usize,
    starting_coeffs: Option<Array3<f64>>,
}

/// Errors that can occur when validating an output assembler config.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("at least one state must be configured")]
    NoStates,

    #[error("duplicate state name `{0}`")]
    DuplicateState(String),

    #[error("num_my_times must be at least 1")]
    MyTimes,

    #[error("num_starting_times must be at least 1")]
    StartingTimes,

    #[error("num_step_vars must be at least 1")]
    StepVars,

    #[error("starting coefficients must have at least one starting value")]
    EmptyCoeffs,

    #[error(
        "starting coefficients have (time, stage) extents ({found_times}, {found_stages}); \
         expected ({expected_times}, {expected_stages})"
    )]
    CoeffExtents {
        found_times: usize,
        found_stages: usize,
        expected_times: usize,
        expected_stages: usize,
    },
}

impl Config {
    /// Creates a validated config.
    ///
    /// The coefficients tensor, when present, marks this window as a
    /// starting-value generator and must have shape
    /// `(num_starting, num_my_times, num_step_vars)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the state list is empty or contains duplicate
    /// names, if any count is zero, or if the coefficients tensor extents
    /// are inconsistent with the counts.
    pub fn new(
        states: Vec<StateVar>,
        num_my_times: usize,
        num_starting_times: usize,
        num_step_vars: usize,
        starting_coeffs: Option<Array3<f64>>,
    ) -> Result<Self, ConfigError> {
        if states.is_empty() {
            return Err(ConfigError::NoStates);
        }
        for (i, state) in states.iter().enumerate() {
            if states[..i].iter().any(|s| s.name() == state.name()) {
                return Err(ConfigError::DuplicateState(state.name().to_owned()));
            }
        }
        if num_my_times < 1 {
            return Err(ConfigError::MyTimes);
        }
        if num_starting_times < 1 {
            return Err(ConfigError::StartingTimes);
        }
        if num_step_vars < 1 {
            return Err(ConfigError::StepVars);
        }
        if let Some(coeffs) = &starting_coeffs {
            let (num_starting, times, stages) = coeffs.dim();
            if num_starting == 0 {
                return Err(ConfigError::EmptyCoeffs);
            }
            if times != num_my_times || stages != num_step_vars {
                return Err(ConfigError::CoeffExtents {
                    found_times: times,
                    found_stages: stages,
                    expected_times: num_my_times,
                    expected_stages: num_step_vars,
                });
            }
        }

        Ok(Self {
            states,
            num_my_times,
            num_starting_times,
            num_step_vars,
            starting_coeffs,
        })
    }

    /// Returns the configured state descriptors, in registration order.
    #[must_use]
    pub fn states(&self) -> &[StateVar] {
        &self.states
    }

    /// Returns the number of local time points in this window.
    #[must_use]
    pub fn num_my_times(&self) -> usize {
        self.num_my_times
    }

    /// Returns the number of times carried over from the previous window.
    #[must_use]
    pub fn num_starting_times(&self) -> usize {
        self.num_starting_times
    }

    /// Returns the number of internal integration sub-stages.
    #[must_use]
    pub fn num_step_vars(&self) -> usize {
        self.num_step_vars
    }

    /// Returns the starting-value coefficients tensor, if configured.
    #[must_use]
    pub fn starting_coeffs(&self) -> Option<&Array3<f64>> {
        self.starting_coeffs.as_ref()
    }

    /// Returns the full length of the assembled history.
    #[must_use]
    pub fn num_times(&self) -> usize {
        self.num_starting_times + self.num_my_times - 1
    }

    /// Returns whether a nontrivial carried-over starting array is blended in.
    #[must_use]
    pub fn has_starting_method(&self) -> bool {
        self.num_starting_times > 1
    }

    /// Returns whether this window emits starting values for the next window.
    #[must_use]
    pub fn is_starting_method(&self) -> bool {
        self.starting_coeffs.is_some()
    }

    /// Returns the number of starting values this window emits, if any.
    #[must_use]
    pub fn num_starting(&self) -> Option<usize> {
        self.starting_coeffs.as_ref().map(|c| c.dim().0)
    }
}
