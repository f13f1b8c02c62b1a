use rand::Rng;

use super::split_parameters;
use crate::config::ConfigNode;
use crate::error::{ConfigurationError, Result};

/// Finite set of outcomes `x` with probabilities `p`, normalized to sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Discrete {
    x: Vec<f64>,
    p: Vec<f64>,
}

impl Discrete {
    /// Build from outcomes and (unnormalized) non-negative weights.
    pub fn new(x: Vec<f64>, p: Vec<f64>) -> Result<Self> {
        if x.len() != p.len() {
            return Err(ConfigurationError::LengthMismatch {
                distribution: "discrete",
                expected: x.len(),
                found: p.len(),
            });
        }
        if x.is_empty() {
            return Err(ConfigurationError::TooFewPoints {
                distribution: "discrete",
                min: 1,
                found: 0,
            });
        }
        if let Some((index, &value)) = p.iter().enumerate().find(|(_, &v)| v < 0.0) {
            return Err(ConfigurationError::NegativeProbability {
                distribution: "discrete",
                index,
                value,
            });
        }

        let mut dist = Self { x, p };
        dist.normalize()?;
        Ok(dist)
    }

    /// Point mass at `x`
    pub fn delta(x: f64) -> Self {
        Self {
            x: vec![x],
            p: vec![1.0],
        }
    }

    /// Read from the `parameters` field: outcomes first, then weights.
    pub fn from_node<N: ConfigNode>(node: &N) -> Result<Self> {
        let params = node.array("parameters")?;
        let (x, p) = split_parameters("discrete", params)?;
        Self::new(x, p)
    }

    fn normalize(&mut self) -> Result<()> {
        let norm: f64 = self.p.iter().sum();
        if !(norm > 0.0 && norm.is_finite()) {
            return Err(ConfigurationError::NonPositiveNormalization {
                distribution: "discrete",
                total: norm,
            });
        }
        for p_i in &mut self.p {
            *p_i /= norm;
        }
        Ok(())
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn p(&self) -> &[f64] {
        &self.p
    }

    /// Sample an outcome. A single-outcome distribution consumes no draw.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let n = self.x.len();
        if n == 1 {
            return self.x[0];
        }

        let xi: f64 = rng.gen();
        let mut c = 0.0;
        for (x_i, p_i) in self.x.iter().zip(&self.p) {
            c += p_i;
            if xi < c {
                return *x_i;
            }
        }
        // Rounding left the running sum just below xi
        self.x[n - 1]
    }
}
