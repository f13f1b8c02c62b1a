use rand::Rng;

use super::fixed_parameters;
use crate::config::ConfigNode;
use crate::error::{ConfigurationError, Result};

/// Continuous uniform distribution on [a, b).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    a: f64,
    b: f64,
}

impl Uniform {
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if a.is_nan() || b.is_nan() || a > b {
            return Err(ConfigurationError::InvalidBounds { low: a, high: b });
        }
        Ok(Self { a, b })
    }

    pub fn from_node<N: ConfigNode>(node: &N) -> Result<Self> {
        let params = node.array("parameters")?;
        let [a, b] = fixed_parameters::<2>("uniform", &params)?;
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
        self.a + rng.gen::<f64>() * (self.b - self.a)
    }
}
