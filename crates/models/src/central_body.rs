use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The central gravitational body for an ascent trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CentralBody {
    Earth,
    Moon,
}

/// Error returned when parsing a central-body name outside the allowed set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized central body `{0}`; expected one of: earth, moon")]
pub struct UnrecognizedCentralBody(pub String);

impl CentralBody {
    /// Surface gravitational acceleration, m/s².
    #[must_use]
    pub fn surface_gravity(self) -> f64 {
        match self {
            Self::Earth => 9.80665,
            Self::Moon => 1.61544,
        }
    }

    /// Reference atmospheric density at zero altitude, kg/m³.
    #[must_use]
    pub fn rho_ref(self) -> f64 {
        match self {
            Self::Earth => 1.225,
            Self::Moon => 0.0,
        }
    }

    /// Atmospheric density scale height, m.
    ///
    /// The Moon carries a unit scale height alongside zero reference
    /// density, so its density is identically zero without dividing by zero.
    #[must_use]
    pub fn h_scale(self) -> f64 {
        match self {
            Self::Earth => 8.44e3,
            Self::Moon => 1.0,
        }
    }

    /// The body's lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Earth => "earth",
            Self::Moon => "moon",
        }
    }
}

impl fmt::Display for CentralBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CentralBody {
    type Err = UnrecognizedCentralBody;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "earth" => Ok(Self::Earth),
            "moon" => Ok(Self::Moon),
            other => Err(UnrecognizedCentralBody(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for body in [CentralBody::Earth, CentralBody::Moon] {
            assert_eq!(body.name().parse::<CentralBody>().unwrap(), body);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "mars".parse::<CentralBody>().unwrap_err();
        assert_eq!(err, UnrecognizedCentralBody("mars".into()));
    }

    #[test]
    fn moon_has_no_atmosphere() {
        assert_eq!(CentralBody::Moon.rho_ref(), 0.0);
        assert!(CentralBody::Moon.h_scale() > 0.0);
    }
}
