use rand::Rng;

use crate::error::{ConfigurationError, Result};

/// Equiprobable bins: n boundary points split the domain into n-1 intervals
/// of equal probability, uniform within each interval.
///
/// There is no configuration-node constructor; tables of this kind come from
/// evaluated nuclear data rather than user input.
#[derive(Debug, Clone, PartialEq)]
pub struct Equiprobable {
    x: Vec<f64>,
}

impl Equiprobable {
    pub fn new(x: Vec<f64>) -> Result<Self> {
        if x.len() < 2 {
            return Err(ConfigurationError::TooFewPoints {
                distribution: "equiprobable",
                min: 2,
                found: x.len(),
            });
        }
        for i in 1..x.len() {
            if !(x[i] > x[i - 1]) {
                return Err(ConfigurationError::NonIncreasingGrid {
                    distribution: "equiprobable",
                    index: i,
                    previous: x[i - 1],
                    value: x[i],
                });
            }
        }
        Ok(Self { x })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let bins = self.x.len() - 1;

        let r: f64 = rng.gen();
        let scaled = bins as f64 * r;
        let i = (scaled.floor() as usize).min(bins - 1);

        let xl = self.x[i];
        let xr = self.x[i + 1];
        xl + (scaled - i as f64) * (xr - xl)
    }
}
