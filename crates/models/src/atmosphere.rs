use ndarray::{Array1, ArrayView1};

use crate::CentralBody;

/// Exponential atmosphere: `rho(y) = rho_ref * exp(-y / h_scale)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogAtmosphere {
    rho_ref: f64,
    h_scale: f64,
}

impl LogAtmosphere {
    /// Creates an atmosphere from explicit constants.
    #[must_use]
    pub fn new(rho_ref: f64, h_scale: f64) -> Self {
        Self { rho_ref, h_scale }
    }

    /// Creates the atmosphere for a central body.
    #[must_use]
    pub fn for_body(body: CentralBody) -> Self {
        Self::new(body.rho_ref(), body.h_scale())
    }

    /// Density at a single altitude, kg/m³.
    #[must_use]
    pub fn density(&self, y: f64) -> f64 {
        self.rho_ref * (-y / self.h_scale).exp()
    }

    /// Density at each node altitude.
    #[must_use]
    pub fn density_profile(&self, y: ArrayView1<'_, f64>) -> Array1<f64> {
        y.mapv(|alt| self.density(alt))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn sea_level_density_is_reference() {
        let atmos = LogAtmosphere::for_body(CentralBody::Earth);
        assert_relative_eq!(atmos.density(0.0), 1.225);
    }

    #[test]
    fn density_falls_off_by_scale_height() {
        let atmos = LogAtmosphere::new(1.225, 8.44e3);
        assert_relative_eq!(atmos.density(8.44e3), 1.225 / std::f64::consts::E);
    }

    #[test]
    fn profile_matches_pointwise_density() {
        let atmos = LogAtmosphere::for_body(CentralBody::Earth);
        let y = array![0.0, 1.0e3, 1.0e4];
        let rho = atmos.density_profile(y.view());

        for (alt, value) in y.iter().zip(rho.iter()) {
            assert_relative_eq!(*value, atmos.density(*alt));
        }
    }

    #[test]
    fn lunar_density_is_zero_everywhere() {
        let atmos = LogAtmosphere::for_body(CentralBody::Moon);
        assert_eq!(atmos.density(0.0), 0.0);
        assert_eq!(atmos.density(1.0e5), 0.0);
    }
}
