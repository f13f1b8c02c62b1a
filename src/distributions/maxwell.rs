use rand::Rng;

use super::fixed_parameters;
use crate::config::ConfigNode;
use crate::error::{ConfigurationError, Result};
use crate::math::maxwell_spectrum;

/// Maxwellian spectrum with nuclear temperature `theta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Maxwell {
    theta: f64,
}

impl Maxwell {
    pub fn new(theta: f64) -> Result<Self> {
        if !(theta > 0.0 && theta.is_finite()) {
            return Err(ConfigurationError::InvalidParameter {
                distribution: "maxwell",
                name: "theta",
                value: theta,
            });
        }
        Ok(Self { theta })
    }

    pub fn from_node<N: ConfigNode>(node: &N) -> Result<Self> {
        let params = node.array("parameters")?;
        let [theta] = fixed_parameters::<1>("maxwell", &params)?;
        Self::new(theta)
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        maxwell_spectrum(self.theta, rng)
    }
}
