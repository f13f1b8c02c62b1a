use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::JsonNode;
use crate::distributions::{
    distribution_from_node, Discrete, Distribution, Equiprobable, Interpolation, Maxwell, Tabular,
    Uniform, Watt,
};
use crate::error::ConfigurationError;
use crate::fast_rng::FastRng;

fn to_py_err(err: ConfigurationError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

#[pyclass(name = "Distribution")]
#[derive(Clone)]
pub struct PyDistribution {
    pub inner: Distribution,
}

impl PyDistribution {
    fn wrap<D: Into<Distribution>>(result: Result<D, ConfigurationError>) -> PyResult<Self> {
        result
            .map(|d| PyDistribution { inner: d.into() })
            .map_err(to_py_err)
    }
}

#[pymethods]
impl PyDistribution {
    /// Build a distribution from a JSON object with `type` and `parameters`.
    ///
    /// Args:
    ///     text (str): JSON document, e.g. '{"type": "watt", "parameters": [0.988e6, 2.249e-6]}'.
    ///
    /// Returns:
    ///     Distribution: The constructed distribution.
    #[staticmethod]
    fn from_json(text: &str) -> PyResult<Self> {
        let node: JsonNode = text.parse().map_err(to_py_err)?;
        Self::wrap(distribution_from_node(&node))
    }

    #[staticmethod]
    fn discrete(x: Vec<f64>, p: Vec<f64>) -> PyResult<Self> {
        Self::wrap(Discrete::new(x, p))
    }

    #[staticmethod]
    fn uniform(a: f64, b: f64) -> PyResult<Self> {
        Self::wrap(Uniform::new(a, b))
    }

    #[staticmethod]
    fn maxwell(theta: f64) -> PyResult<Self> {
        Self::wrap(Maxwell::new(theta))
    }

    #[staticmethod]
    fn watt(a: f64, b: f64) -> PyResult<Self> {
        Self::wrap(Watt::new(a, b))
    }

    /// Tabulated density.
    ///
    /// Args:
    ///     x (List[float]): Strictly increasing grid.
    ///     p (List[float]): Non-negative density at each grid point.
    ///     interpolation (str): "histogram" (default) or "linear-linear".
    #[staticmethod]
    #[pyo3(signature = (x, p, interpolation = "histogram"))]
    fn tabular(x: Vec<f64>, p: Vec<f64>, interpolation: &str) -> PyResult<Self> {
        let interp: Interpolation = interpolation.parse().map_err(to_py_err)?;
        Self::wrap(Tabular::new(x, p, interp, None))
    }

    #[staticmethod]
    fn equiprobable(x: Vec<f64>) -> PyResult<Self> {
        Self::wrap(Equiprobable::new(x))
    }

    /// Draw one value.
    ///
    /// Args:
    ///     seed (Optional[int]): Seed of a fresh stream; thread-local entropy when omitted.
    #[pyo3(signature = (seed = None))]
    fn sample(&self, seed: Option<u64>) -> f64 {
        match seed {
            Some(s) => self.inner.sample(&mut FastRng::new(s)),
            None => self.inner.sample(&mut rand::thread_rng()),
        }
    }

    /// Draw `n` values from one stream.
    #[pyo3(signature = (n, seed = None))]
    fn sample_many(&self, n: usize, seed: Option<u64>) -> Vec<f64> {
        match seed {
            Some(s) => {
                let mut rng = FastRng::new(s);
                (0..n).map(|_| self.inner.sample(&mut rng)).collect()
            }
            None => {
                let mut rng = rand::thread_rng();
                (0..n).map(|_| self.inner.sample(&mut rng)).collect()
            }
        }
    }

    #[getter]
    fn kind(&self) -> &'static str {
        self.inner.kind()
    }

    fn __repr__(&self) -> String {
        format!("Distribution(type={:?})", self.inner.kind())
    }
}
