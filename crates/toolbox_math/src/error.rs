//! Errors raised by the face geometry functions

use std::fmt;

/// Error for shape parameters outside the valid domain
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A parameter is non-finite or outside its allowed range
    InvalidParameter {
        /// Name of the offending parameter (`size`, `depth`, `sides`, ...)
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidParameter { name, value } => {
                write!(f, "Invalid shape parameter {}: {}", name, value)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Require a finite, strictly positive length
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::InvalidParameter { name, value })
    }
}

/// Require at least three sides
pub(crate) fn side_count(sides: u32) -> Result<u32, GeometryError> {
    if sides >= 3 {
        Ok(sides)
    } else {
        Err(GeometryError::InvalidParameter {
            name: "sides",
            value: f64::from(sides),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(positive("size", 10.0), Ok(10.0));
        assert!(positive("size", 0.0).is_err());
        assert!(positive("size", -1.0).is_err());
        assert!(positive("depth", f64::INFINITY).is_err());
        assert!(positive("depth", f64::NAN).is_err());
    }

    #[test]
    fn test_side_count() {
        assert_eq!(side_count(3), Ok(3));
        assert_eq!(
            side_count(2),
            Err(GeometryError::InvalidParameter { name: "sides", value: 2.0 })
        );
    }

    #[test]
    fn test_display() {
        let err = GeometryError::InvalidParameter { name: "size", value: -4.0 };
        assert_eq!(err.to_string(), "Invalid shape parameter size: -4");
    }
}
