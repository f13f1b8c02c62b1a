// Tabulated probability density with histogram or linear-linear interpolation
//
// The density p is stored on a strictly increasing grid x together with its
// running integral c. Both are normalized once at construction so that
// c[0] = 0 and c[n-1] = 1; sampling inverts c within the selected bin.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::split_parameters;
use crate::config::ConfigNode;
use crate::error::{ConfigurationError, Result};

/// Interpolation rule for the density between table points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Piecewise-constant density, p[i] holds on [x[i], x[i+1])
    #[default]
    Histogram,
    /// Piecewise-linear density between (x[i], p[i]) and (x[i+1], p[i+1])
    LinearLinear,
}

impl FromStr for Interpolation {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "histogram" => Ok(Interpolation::Histogram),
            "linear-linear" => Ok(Interpolation::LinearLinear),
            other => Err(ConfigurationError::UnknownInterpolation(other.to_string())),
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpolation::Histogram => write!(f, "histogram"),
            Interpolation::LinearLinear => write!(f, "linear-linear"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tabular {
    x: Vec<f64>,
    p: Vec<f64>,
    c: Vec<f64>,
    interp: Interpolation,
}

impl Tabular {
    /// Build from a density table.
    ///
    /// When `c` is `None` the cumulative table is integrated from `p` with the
    /// chosen interpolation rule; otherwise the supplied table is used as is.
    /// Either way `p` and `c` are then divided by `c[n-1]`.
    pub fn new(
        x: Vec<f64>,
        p: Vec<f64>,
        interp: Interpolation,
        c: Option<Vec<f64>>,
    ) -> Result<Self> {
        let n = x.len();
        if p.len() != n {
            return Err(ConfigurationError::LengthMismatch {
                distribution: "tabular",
                expected: n,
                found: p.len(),
            });
        }
        if n < 2 {
            return Err(ConfigurationError::TooFewPoints {
                distribution: "tabular",
                min: 2,
                found: n,
            });
        }
        for i in 1..n {
            if !(x[i] > x[i - 1]) {
                return Err(ConfigurationError::NonIncreasingGrid {
                    distribution: "tabular",
                    index: i,
                    previous: x[i - 1],
                    value: x[i],
                });
            }
        }
        if let Some((index, &value)) = p.iter().enumerate().find(|(_, &v)| !(v >= 0.0)) {
            return Err(ConfigurationError::NegativeProbability {
                distribution: "tabular",
                index,
                value,
            });
        }

        let c = match c {
            Some(c) => {
                check_cumulative(&c, n)?;
                c
            }
            None => integrate(&x, &p, interp),
        };

        let mut dist = Self { x, p, c, interp };
        dist.normalize()?;
        log::debug!(
            "tabular distribution with {} points, {} interpolation",
            n,
            interp
        );
        Ok(dist)
    }

    /// Read `parameters` (grid first, then density) and the optional
    /// `interpolation` field, which defaults to histogram.
    pub fn from_node<N: ConfigNode>(node: &N) -> Result<Self> {
        let interp = if node.has_field("interpolation") {
            node.value("interpolation", true, true)?.parse()?
        } else {
            Interpolation::Histogram
        };

        let params = node.array("parameters")?;
        let (x, p) = split_parameters("tabular", params)?;
        Self::new(x, p, interp, None)
    }

    fn normalize(&mut self) -> Result<()> {
        let total = self.c[self.c.len() - 1];
        if !(total > 0.0 && total.is_finite()) {
            return Err(ConfigurationError::NonPositiveNormalization {
                distribution: "tabular",
                total,
            });
        }
        for (p_i, c_i) in self.p.iter_mut().zip(self.c.iter_mut()) {
            *p_i /= total;
            *c_i /= total;
        }
        Ok(())
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn p(&self) -> &[f64] {
        &self.p
    }

    pub fn c(&self) -> &[f64] {
        &self.c
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interp
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let c: f64 = rng.gen();

        // First bin whose upper cumulative value is not below c. The last
        // bin absorbs anything rounding pushes past c[n-1].
        let n = self.c.len();
        let i = self.c[1..]
            .partition_point(|&c_next| c_next < c)
            .min(n - 2);
        let c_i = self.c[i];
        let x_i = self.x[i];
        let p_i = self.p[i];

        match self.interp {
            Interpolation::Histogram => histogram_inverse(x_i, p_i, c - c_i),
            Interpolation::LinearLinear => {
                let x_i1 = self.x[i + 1];
                let p_i1 = self.p[i + 1];

                let m = (p_i1 - p_i) / (x_i1 - x_i);
                if m == 0.0 {
                    histogram_inverse(x_i, p_i, c - c_i)
                } else {
                    // max() absorbs a slightly negative radicand at bin edges
                    x_i + ((p_i * p_i + 2.0 * m * (c - c_i)).max(0.0).sqrt() - p_i) / m
                }
            }
        }
    }
}

#[inline]
fn histogram_inverse(x_i: f64, p_i: f64, dc: f64) -> f64 {
    if p_i > 0.0 {
        x_i + dc / p_i
    } else {
        x_i
    }
}

/// Running integral of the density under the given interpolation rule
fn integrate(x: &[f64], p: &[f64], interp: Interpolation) -> Vec<f64> {
    let mut c = Vec::with_capacity(x.len());
    c.push(0.0);
    for i in 1..x.len() {
        let dx = x[i] - x[i - 1];
        let area = match interp {
            Interpolation::Histogram => p[i - 1] * dx,
            Interpolation::LinearLinear => 0.5 * (p[i - 1] + p[i]) * dx,
        };
        c.push(c[i - 1] + area);
    }
    c
}

fn check_cumulative(c: &[f64], n: usize) -> Result<()> {
    if c.len() != n {
        return Err(ConfigurationError::LengthMismatch {
            distribution: "tabular",
            expected: n,
            found: c.len(),
        });
    }
    if c[0] != 0.0 {
        return Err(ConfigurationError::InvalidParameter {
            distribution: "tabular",
            name: "c[0]",
            value: c[0],
        });
    }
    for i in 1..n {
        if !(c[i] >= c[i - 1]) {
            return Err(ConfigurationError::NonMonotonicCdf {
                index: i,
                previous: c[i - 1],
                value: c[i],
            });
        }
    }
    Ok(())
}
