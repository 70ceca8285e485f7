use thiserror::Error;

/// Describes one state variable tracked by the integration scheme.
///
/// A descriptor fixes the variable's name, its physical shape (the trailing
/// dimensions of every array carrying this state), and an optional unit
/// label. Descriptors are immutable once built; the set of descriptors
/// handed to a component defines its whole input/output schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateVar {
    name: String,
    shape: Vec<usize>,
    units: Option<String>,
}

/// Errors that can occur when building a state descriptor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateVarError {
    #[error("state `{name}` has a zero-sized dimension in shape {shape:?}")]
    ZeroDim { name: String, shape: Vec<usize> },
}

impl StateVar {
    /// Creates a descriptor with a validated shape.
    ///
    /// An empty shape is a scalar (size 1).
    ///
    /// # Errors
    ///
    /// Returns an error if any shape dimension is zero.
    pub fn new(name: impl Into<String>, shape: Vec<usize>) -> Result<Self, StateVarError> {
        let name = name.into();
        if shape.contains(&0) {
            return Err(StateVarError::ZeroDim { name, shape });
        }

        Ok(Self {
            name,
            shape,
            units: None,
        })
    }

    /// Attaches a unit label to the descriptor.
    #[must_use]
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Returns the state name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the physical shape.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the unit label, if any.
    #[must_use]
    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    /// Returns the number of elements in one instance of this state.
    #[must_use]
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_product_of_shape() {
        let var = StateVar::new("h", vec![2, 3]).unwrap();
        assert_eq!(var.size(), 6);
        assert_eq!(var.shape(), &[2, 3]);
    }

    #[test]
    fn empty_shape_is_scalar() {
        let var = StateVar::new("m", vec![]).unwrap();
        assert_eq!(var.size(), 1);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let err = StateVar::new("h", vec![1, 0]).unwrap_err();
        assert_eq!(
            err,
            StateVarError::ZeroDim {
                name: "h".into(),
                shape: vec![1, 0],
            }
        );
    }

    #[test]
    fn units_are_optional() {
        let bare = StateVar::new("x", vec![1]).unwrap();
        assert_eq!(bare.units(), None);

        let labeled = StateVar::new("x", vec![1]).unwrap().with_units("m");
        assert_eq!(labeled.units(), Some("m"));
    }
}
