use rand::Rng;

use super::fixed_parameters;
use crate::config::ConfigNode;
use crate::error::{ConfigurationError, Result};
use crate::math::watt_spectrum;

/// Watt fission spectrum with shape parameters `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Watt {
    a: f64,
    b: f64,
}

impl Watt {
    /// `a` must be positive and `b` non-negative.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !(a > 0.0 && a.is_finite()) {
            return Err(ConfigurationError::InvalidParameter {
                distribution: "watt",
                name: "a",
                value: a,
            });
        }
        if !(b >= 0.0 && b.is_finite()) {
            return Err(ConfigurationError::InvalidParameter {
                distribution: "watt",
                name: "b",
                value: b,
            });
        }
        Ok(Self { a, b })
    }

    pub fn from_node<N: ConfigNode>(node: &N) -> Result<Self> {
        let params = node.array("parameters")?;
        let [a, b] = fixed_parameters::<2>("watt", &params)?;
        Self::new(a, b)
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        watt_spectrum(self.a, self.b, rng)
    }
}
