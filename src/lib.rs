//! Sampling of source energies and angles for Monte Carlo particle transport.
//!
//! Distributions are built once from configuration nodes, then sampled with an
//! explicit random stream:
//!
//! ```
//! use distributions_for_mc::{distribution_from_node, FastRng, JsonNode};
//!
//! let node: JsonNode = r#"{"type": "watt", "parameters": [0.988e6, 2.249e-6]}"#
//!     .parse()
//!     .unwrap();
//! let watt = distribution_from_node(&node).unwrap();
//!
//! let mut rng = FastRng::new(1);
//! let energy = watt.sample(&mut rng);
//! assert!(energy.is_finite());
//! ```

mod config;
pub mod distributions;
mod error;
mod fast_rng;
pub mod math;
pub mod source;
pub mod stats;

pub use config::{parse_reals, ConfigNode, JsonNode, TextNode};
pub use distributions::{
    distribution_from_node, Discrete, Distribution, Equiprobable, Interpolation, Maxwell, Tabular,
    Uniform, Watt,
};
pub use error::{ConfigurationError, Result};
pub use fast_rng::{FastRng, SequenceRng};
pub use source::{IndependentSource, SourceSite};
pub use stats::AngularDistribution;

#[cfg(feature = "pyo3")]
use pyo3::prelude::*;
#[cfg(feature = "pyo3")]
use pyo3::pymodule;

#[cfg(feature = "pyo3")]
mod python {
    pub mod distribution_python;
    pub use distribution_python::*;
}

#[cfg(feature = "pyo3")]
#[pymodule]
fn distributions_for_mc(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<python::PyDistribution>()?;
    Ok(())
}
