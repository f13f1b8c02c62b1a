use nalgebra::Vector3;
use rand::Rng;
use std::f64::consts::PI;

use crate::config::ConfigNode;
use crate::distributions::{distribution_from_node, fixed_parameters, Distribution, Uniform};
use crate::error::{ConfigurationError, Result};

/// Angular distribution of source directions
#[derive(Debug, Clone, PartialEq)]
pub enum AngularDistribution {
    Isotropic,
    Monodirectional {
        reference_uvw: [f64; 3],
    },
    /// Polar cosine `mu` and azimuth `phi` drawn from their own
    /// distributions, measured about `reference_uvw`
    PolarAzimuthal {
        reference_uvw: [f64; 3],
        mu: Distribution,
        phi: Distribution,
    },
}

fn normalized(u: f64, v: f64, w: f64) -> Result<[f64; 3]> {
    let mag = (u * u + v * v + w * w).sqrt();
    if !(mag > 0.0 && mag.is_finite()) {
        return Err(ConfigurationError::InvalidParameter {
            distribution: "angle",
            name: "reference_uvw",
            value: mag,
        });
    }
    Ok([u / mag, v / mag, w / mag])
}

impl AngularDistribution {
    /// Create a monodirectional distribution; the direction is normalized
    pub fn new_monodirectional(u: f64, v: f64, w: f64) -> Result<Self> {
        Ok(Self::Monodirectional {
            reference_uvw: normalized(u, v, w)?,
        })
    }

    pub fn new_isotropic() -> Self {
        Self::Isotropic
    }

    /// Create a polar-azimuthal distribution about a reference direction
    pub fn new_polar_azimuthal(reference_uvw: [f64; 3], mu: Distribution, phi: Distribution) -> Result<Self> {
        Ok(Self::PolarAzimuthal {
            reference_uvw: normalized(reference_uvw[0], reference_uvw[1], reference_uvw[2])?,
            mu,
            phi,
        })
    }

    /// Read an angle node: `type` is `isotropic`, `monodirectional` (with
    /// `reference_uvw`) or `mu-phi` (optional `mu`/`phi` child distributions,
    /// uniform on [-1, 1) and [0, 2π) when absent, and optional
    /// `reference_uvw`, +z when absent).
    pub fn from_node<N: ConfigNode>(node: &N) -> Result<Self> {
        if !node.has_field("type") {
            return Err(ConfigurationError::MissingType);
        }
        let kind = node.value("type", true, true)?;
        match kind.as_str() {
            "isotropic" => Ok(Self::Isotropic),
            "monodirectional" => {
                let [u, v, w] = fixed_parameters::<3>("monodirectional", &node.array("reference_uvw")?)?;
                Self::new_monodirectional(u, v, w)
            }
            "mu-phi" => {
                let reference_uvw = if node.has_field("reference_uvw") {
                    fixed_parameters::<3>("mu-phi", &node.array("reference_uvw")?)?
                } else {
                    [0.0, 0.0, 1.0]
                };
                let mu = match node.child("mu") {
                    Some(child) => distribution_from_node(&child)?,
                    None => Uniform::new(-1.0, 1.0)?.into(),
                };
                let phi = match node.child("phi") {
                    Some(child) => distribution_from_node(&child)?,
                    None => Uniform::new(0.0, 2.0 * PI)?.into(),
                };
                Self::new_polar_azimuthal(reference_uvw, mu, phi)
            }
            other => Err(ConfigurationError::UnknownType(other.to_string())),
        }
    }

    /// Sample a unit direction
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; 3] {
        match self {
            AngularDistribution::Isotropic => {
                let mu = 2.0 * rng.gen::<f64>() - 1.0;
                let phi = 2.0 * PI * rng.gen::<f64>();
                let sin_theta = (1.0 - mu * mu).max(0.0).sqrt();
                [sin_theta * phi.cos(), sin_theta * phi.sin(), mu]
            }
            AngularDistribution::Monodirectional { reference_uvw } => *reference_uvw,
            AngularDistribution::PolarAzimuthal {
                reference_uvw,
                mu,
                phi,
            } => {
                let mu = mu.sample(rng).clamp(-1.0, 1.0);
                if mu == 1.0 {
                    return *reference_uvw;
                }
                let phi = phi.sample(rng);
                let u = Vector3::from(*reference_uvw);
                rotate_direction(&u, mu, phi).into()
            }
        }
    }
}

/// Rotate `u` so the result has cosine `mu` with it and azimuth `phi` about it
fn rotate_direction(u: &Vector3<f64>, mu: f64, phi: f64) -> Vector3<f64> {
    let sin_theta = (1.0 - mu * mu).max(0.0).sqrt();

    let perp = if u.x.abs() < 0.99 {
        Vector3::new(1.0, 0.0, 0.0).cross(u).normalize()
    } else {
        Vector3::new(0.0, 1.0, 0.0).cross(u).normalize()
    };
    let ortho = u.cross(&perp);

    mu * u + sin_theta * phi.cos() * perp + sin_theta * phi.sin() * ortho
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JsonNode;
    use crate::distributions::Discrete;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn magnitude(d: [f64; 3]) -> f64 {
        (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
    }

    #[test]
    fn test_monodirectional_distribution() {
        let mut rng = StdRng::seed_from_u64(1);
        let mono = AngularDistribution::new_monodirectional(0.0, 0.0, 2.0).unwrap();
        assert_eq!(mono.sample(&mut rng), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_zero_direction_rejected() {
        assert!(matches!(
            AngularDistribution::new_monodirectional(0.0, 0.0, 0.0),
            Err(ConfigurationError::InvalidParameter { name: "reference_uvw", .. })
        ));
    }

    #[test]
    fn test_isotropic_distribution() {
        let mut rng = StdRng::seed_from_u64(42);
        let iso = AngularDistribution::new_isotropic();
        let mut mean_w = 0.0;
        let n = 20_000;
        for _ in 0..n {
            let d = iso.sample(&mut rng);
            assert!((magnitude(d) - 1.0).abs() < 1e-10);
            mean_w += d[2];
        }
        // <w> = 0, sigma = 1/sqrt(3n)
        assert!((mean_w / n as f64).abs() < 0.02);
    }

    #[test]
    fn test_polar_azimuthal_fixed_cosine() {
        let mut rng = StdRng::seed_from_u64(3);
        let reference = [1.0, 1.0, 0.0];
        let mu = Discrete::new(vec![0.5], vec![1.0]).unwrap().into();
        let phi = Uniform::new(0.0, 2.0 * PI).unwrap().into();
        let dist = AngularDistribution::new_polar_azimuthal(reference, mu, phi).unwrap();

        let r = 1.0 / 2f64.sqrt();
        for _ in 0..1000 {
            let d = dist.sample(&mut rng);
            assert!((magnitude(d) - 1.0).abs() < 1e-10);
            let cosine = d[0] * r + d[1] * r;
            assert!((cosine - 0.5).abs() < 1e-10);
        }
    }

    #[test]
    fn test_polar_azimuthal_forward_returns_reference() {
        let mut rng = StdRng::seed_from_u64(3);
        let mu = Discrete::new(vec![1.0], vec![1.0]).unwrap().into();
        let phi = Uniform::new(0.0, 2.0 * PI).unwrap().into();
        let dist = AngularDistribution::new_polar_azimuthal([0.0, 0.0, 1.0], mu, phi).unwrap();
        assert_eq!(dist.sample(&mut rng), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_from_node() {
        let node: JsonNode = r#"{"type": "Monodirectional", "reference_uvw": [0, 3, 4]}"#.parse().unwrap();
        assert_eq!(
            AngularDistribution::from_node(&node).unwrap(),
            AngularDistribution::Monodirectional {
                reference_uvw: [0.0, 0.6, 0.8]
            }
        );

        let node: JsonNode = r#"{"type": "isotropic"}"#.parse().unwrap();
        assert_eq!(AngularDistribution::from_node(&node).unwrap(), AngularDistribution::Isotropic);

        let node: JsonNode = r#"{
            "type": "mu-phi",
            "mu": {"type": "tabular", "interpolation": "linear-linear",
                   "parameters": [-1.0, 1.0, 0.0, 1.0]}
        }"#
        .parse()
        .unwrap();
        match AngularDistribution::from_node(&node).unwrap() {
            AngularDistribution::PolarAzimuthal { reference_uvw, mu, phi } => {
                assert_eq!(reference_uvw, [0.0, 0.0, 1.0]);
                assert_eq!(mu.kind(), "tabular");
                assert_eq!(phi.kind(), "uniform");
            }
            other => panic!("expected PolarAzimuthal, got {:?}", other),
        }

        let node: JsonNode = r#"{"type": "monodirectional", "reference_uvw": [0, 1]}"#.parse().unwrap();
        assert!(matches!(
            AngularDistribution::from_node(&node),
            Err(ConfigurationError::WrongParameterCount { expected: 3, .. })
        ));
    }

    #[test]
    fn test_send_sync_bounds() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<AngularDistribution>();
        assert_sync::<AngularDistribution>();
    }
}
