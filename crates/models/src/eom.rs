use ndarray::{Array1, ArrayView1};

use crate::CentralBody;

/// Standard gravity used in the Isp mass-flow relation, m/s².
pub const G0: f64 = 9.80665;

/// Drag coefficient of the vehicle.
const CD: f64 = 0.5;

/// Vehicle reference area, m².
const REF_AREA: f64 = 7.069;

/// Per-node inputs to the equations of motion.
///
/// All views must have the same node count.
#[derive(Debug, Clone, Copy)]
pub struct EomInputs<'a> {
    /// Horizontal velocity, m/s.
    pub vx: ArrayView1<'a, f64>,
    /// Vertical velocity, m/s.
    pub vy: ArrayView1<'a, f64>,
    /// Vehicle mass, kg.
    pub m: ArrayView1<'a, f64>,
    /// Atmospheric density at the node, kg/m³.
    pub rho: ArrayView1<'a, f64>,
    /// Thrust magnitude, N.
    pub thrust: ArrayView1<'a, f64>,
    /// Thrust pitch angle from horizontal, rad.
    pub theta: ArrayView1<'a, f64>,
    /// Specific impulse, s.
    pub isp: ArrayView1<'a, f64>,
}

/// Per-node state rates produced by the equations of motion.
#[derive(Debug, Clone, PartialEq)]
pub struct StateRates {
    pub xdot: Array1<f64>,
    pub ydot: Array1<f64>,
    pub vxdot: Array1<f64>,
    pub vydot: Array1<f64>,
    pub mdot: Array1<f64>,
}

/// 2-D point-mass launch-vehicle equations of motion.
///
/// Drag acts opposite the velocity vector with magnitude
/// `0.5 * CD * rho * A * v^2`; at zero speed the drag direction is taken as
/// zero rather than dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchVehicle2dEom {
    g: f64,
}

impl LaunchVehicle2dEom {
    /// Creates the equations of motion with an explicit surface gravity.
    #[must_use]
    pub fn new(g: f64) -> Self {
        Self { g }
    }

    /// Creates the equations of motion for a central body.
    #[must_use]
    pub fn for_body(body: CentralBody) -> Self {
        Self::new(body.surface_gravity())
    }

    /// Evaluates the state rates at every node.
    ///
    /// # Panics
    ///
    /// Panics if the input views have mismatched lengths.
    #[must_use]
    pub fn rates(&self, inputs: &EomInputs<'_>) -> StateRates {
        let num_nodes = inputs.vx.len();
        assert!(
            [
                inputs.vy.len(),
                inputs.m.len(),
                inputs.rho.len(),
                inputs.thrust.len(),
                inputs.theta.len(),
                inputs.isp.len(),
            ]
            .iter()
            .all(|&len| len == num_nodes),
            "input node counts must agree",
        );

        let mut rates = StateRates {
            xdot: Array1::zeros(num_nodes),
            ydot: Array1::zeros(num_nodes),
            vxdot: Array1::zeros(num_nodes),
            vydot: Array1::zeros(num_nodes),
            mdot: Array1::zeros(num_nodes),
        };

        for node in 0..num_nodes {
            let vx = inputs.vx[node];
            let vy = inputs.vy[node];
            let m = inputs.m[node];
            let thrust = inputs.thrust[node];
            let theta = inputs.theta[node];

            let v = vx.hypot(vy);
            let drag = 0.5 * CD * inputs.rho[node] * REF_AREA * v * v;
            // Unit velocity direction; zero at rest.
            let (dir_x, dir_y) = if v > 0.0 { (vx / v, vy / v) } else { (0.0, 0.0) };

            rates.xdot[node] = vx;
            rates.ydot[node] = vy;
            rates.vxdot[node] = (thrust * theta.cos() - drag * dir_x) / m;
            rates.vydot[node] = (thrust * theta.sin() - drag * dir_y) / m - self.g;
            rates.mdot[node] = -thrust / (G0 * inputs.isp[node]);
        }

        rates
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    fn single_node(
        vx: f64,
        vy: f64,
        m: f64,
        rho: f64,
        thrust: f64,
        theta: f64,
        isp: f64,
    ) -> StateRates {
        let vx = array![vx];
        let vy = array![vy];
        let m = array![m];
        let rho = array![rho];
        let thrust = array![thrust];
        let theta = array![theta];
        let isp = array![isp];

        LaunchVehicle2dEom::for_body(CentralBody::Earth).rates(&EomInputs {
            vx: vx.view(),
            vy: vy.view(),
            m: m.view(),
            rho: rho.view(),
            thrust: thrust.view(),
            theta: theta.view(),
            isp: isp.view(),
        })
    }

    #[test]
    fn vertical_thrust_at_rest() {
        // At rest there is no drag: vydot = T/m - g.
        let rates = single_node(
            0.0,
            0.0,
            1.0e4,
            1.225,
            2.0e5,
            std::f64::consts::FRAC_PI_2,
            300.0,
        );

        assert_relative_eq!(rates.xdot[0], 0.0);
        assert_relative_eq!(rates.ydot[0], 0.0);
        assert_relative_eq!(rates.vxdot[0], 0.0, epsilon = 1e-10);
        assert_relative_eq!(rates.vydot[0], 2.0e5 / 1.0e4 - 9.80665, epsilon = 1e-10);
        assert!(rates.vydot[0].is_finite());
    }

    #[test]
    fn drag_opposes_horizontal_motion() {
        // Unpowered horizontal flight: vxdot = -D/m, vydot = -g.
        let rates = single_node(100.0, 0.0, 1.0e3, 1.225, 0.0, 0.0, 300.0);

        let drag = 0.5 * 0.5 * 1.225 * 7.069 * 100.0 * 100.0;
        assert_relative_eq!(rates.vxdot[0], -drag / 1.0e3);
        assert_relative_eq!(rates.vydot[0], -9.80665);
    }

    #[test]
    fn mass_flow_follows_isp() {
        let rates = single_node(0.0, 0.0, 1.0e4, 0.0, 1.0e5, 0.0, 250.0);
        assert_relative_eq!(rates.mdot[0], -1.0e5 / (G0 * 250.0));
    }

    #[test]
    fn position_rates_are_velocities() {
        let rates = single_node(35.0, -12.0, 1.0e3, 0.0, 0.0, 0.0, 300.0);
        assert_relative_eq!(rates.xdot[0], 35.0);
        assert_relative_eq!(rates.ydot[0], -12.0);
    }
}
