use ndarray::ArrayView1;
use thiserror::Error;

use crate::{
    eom::{EomInputs, StateRates},
    CentralBody, LaunchVehicle2dEom, LogAtmosphere, UnrecognizedCentralBody,
};

/// Errors that can occur when configuring the ascent model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OdeConfigError {
    #[error("num_nodes must be at least 1")]
    NoNodes,

    #[error(transparent)]
    CentralBody(#[from] UnrecognizedCentralBody),
}

/// Per-node inputs to the ascent model.
///
/// All views must have length `num_nodes`.
#[derive(Debug, Clone, Copy)]
pub struct OdeInputs<'a> {
    /// Altitude, m.
    pub y: ArrayView1<'a, f64>,
    /// Horizontal velocity, m/s.
    pub vx: ArrayView1<'a, f64>,
    /// Vertical velocity, m/s.
    pub vy: ArrayView1<'a, f64>,
    /// Vehicle mass, kg.
    pub m: ArrayView1<'a, f64>,
    /// Thrust magnitude, N.
    pub thrust: ArrayView1<'a, f64>,
    /// Thrust pitch angle from horizontal, rad.
    pub theta: ArrayView1<'a, f64>,
    /// Specific impulse, s.
    pub isp: ArrayView1<'a, f64>,
}

/// The 2-D launch-vehicle ascent model.
///
/// Wires the altitude-dependent atmosphere into the equations of motion for
/// a fixed number of trajectory nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchVehicleOde {
    num_nodes: usize,
    atmosphere: LogAtmosphere,
    eom: LaunchVehicle2dEom,
}

impl LaunchVehicleOde {
    /// Creates the ascent model.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_nodes` is zero.
    pub fn new(num_nodes: usize, body: CentralBody) -> Result<Self, OdeConfigError> {
        if num_nodes == 0 {
            return Err(OdeConfigError::NoNodes);
        }

        Ok(Self {
            num_nodes,
            atmosphere: LogAtmosphere::for_body(body),
            eom: LaunchVehicle2dEom::for_body(body),
        })
    }

    /// Creates the ascent model from a central-body name.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_nodes` is zero or the name is outside the
    /// allowed set.
    pub fn from_body_name(num_nodes: usize, body: &str) -> Result<Self, OdeConfigError> {
        Self::new(num_nodes, body.parse()?)
    }

    /// Returns the configured node count.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Evaluates the state rates at every node.
    ///
    /// # Panics
    ///
    /// Panics if any input view's length differs from the configured node
    /// count.
    #[must_use]
    pub fn rates(&self, inputs: &OdeInputs<'_>) -> StateRates {
        assert_eq!(inputs.y.len(), self.num_nodes, "node count mismatch");

        let rho = self.atmosphere.density_profile(inputs.y);

        self.eom.rates(&EomInputs {
            vx: inputs.vx.reborrow(),
            vy: inputs.vy.reborrow(),
            m: inputs.m.reborrow(),
            rho: rho.view(),
            thrust: inputs.thrust.reborrow(),
            theta: inputs.theta.reborrow(),
            isp: inputs.isp.reborrow(),
        })
    }
}
