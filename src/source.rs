use rand::Rng;

use crate::config::ConfigNode;
use crate::distributions::{distribution_from_node, fixed_parameters, Discrete, Distribution};
use crate::error::Result;
use crate::stats::AngularDistribution;

/// D-T fusion neutron energy in eV
pub const DEFAULT_SOURCE_ENERGY: f64 = 14.06e6;

/// Phase-space point produced by a source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceSite {
    pub position: [f64; 3],
    pub direction: [f64; 3],
    pub energy: f64,
}

/// Point source owning its angular and energy distributions.
///
/// The source is the single owner of `energy`; sampling borrows it together
/// with the caller's stream.
#[derive(Debug, Clone, PartialEq)]
pub struct IndependentSource {
    pub space: [f64; 3],
    pub angle: AngularDistribution,
    pub energy: Distribution,
}

impl IndependentSource {
    /// Isotropic point source at the origin emitting 14.06 MeV neutrons
    pub fn new() -> Self {
        Self {
            space: [0.0, 0.0, 0.0],
            angle: AngularDistribution::Isotropic,
            energy: monoenergetic(DEFAULT_SOURCE_ENERGY),
        }
    }

    /// Read `space` (three reals), an `angle` child and an `energy` child.
    /// Each is optional and falls back to [`IndependentSource::new`].
    pub fn from_node<N: ConfigNode>(node: &N) -> Result<Self> {
        let mut source = Self::new();
        if node.has_field("space") {
            source.space = fixed_parameters::<3>("space", &node.array("space")?)?;
        }
        if let Some(angle) = node.child("angle") {
            source.angle = AngularDistribution::from_node(&angle)?;
        }
        if let Some(energy) = node.child("energy") {
            source.energy = distribution_from_node(&energy)?;
        }
        log::debug!(
            "source at {:?} with {} energy distribution",
            source.space,
            source.energy.kind()
        );
        Ok(source)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SourceSite {
        let direction = self.angle.sample(rng);
        let energy = self.energy.sample(rng);
        SourceSite {
            position: self.space,
            direction,
            energy,
        }
    }
}

impl Default for IndependentSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-outcome energy distribution; sampling it consumes no draws
fn monoenergetic(energy: f64) -> Distribution {
    Distribution::Discrete(Discrete::delta(energy))
}
