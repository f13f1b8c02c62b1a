//! Univariate distributions sampled for source energies and angles.
//!
//! Each family is its own type; [`Distribution`] closes over them so a source
//! definition can own any of them by value. The factory
//! [`distribution_from_node`] builds one from a configuration node by its
//! declared `type`.

mod discrete;
mod equiprobable;
mod maxwell;
mod tabular;
mod uniform;
mod watt;

pub use discrete::Discrete;
pub use equiprobable::Equiprobable;
pub use maxwell::Maxwell;
pub use tabular::{Interpolation, Tabular};
pub use uniform::Uniform;
pub use watt::Watt;

use rand::Rng;

use crate::config::ConfigNode;
use crate::error::{ConfigurationError, Result};

/// A univariate distribution that can be sampled with an external stream.
///
/// Values are immutable once built; `sample` borrows both the distribution
/// and the caller's random stream, so one instance can be shared across
/// threads that each own their stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    Discrete(Discrete),
    Uniform(Uniform),
    Maxwell(Maxwell),
    Watt(Watt),
    Tabular(Tabular),
    Equiprobable(Equiprobable),
}

impl Distribution {
    /// Draw one value.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Distribution::Discrete(d) => d.sample(rng),
            Distribution::Uniform(d) => d.sample(rng),
            Distribution::Maxwell(d) => d.sample(rng),
            Distribution::Watt(d) => d.sample(rng),
            Distribution::Tabular(d) => d.sample(rng),
            Distribution::Equiprobable(d) => d.sample(rng),
        }
    }

    /// Configuration name of the family
    pub fn kind(&self) -> &'static str {
        match self {
            Distribution::Discrete(_) => "discrete",
            Distribution::Uniform(_) => "uniform",
            Distribution::Maxwell(_) => "maxwell",
            Distribution::Watt(_) => "watt",
            Distribution::Tabular(_) => "tabular",
            Distribution::Equiprobable(_) => "equiprobable",
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Distribution {
                fn from(d: $variant) -> Self {
                    Distribution::$variant(d)
                }
            }
        )*
    };
}

impl_from_variant!(Discrete, Uniform, Maxwell, Watt, Tabular, Equiprobable);

/// Build a distribution from a node carrying `type` and `parameters`.
///
/// `type` is matched case-insensitively after trimming whitespace. The
/// equiprobable family has no textual form and is only built with
/// [`Equiprobable::new`].
pub fn distribution_from_node<N: ConfigNode>(node: &N) -> Result<Distribution> {
    let kind = match node.field_text("type") {
        Some(text) => text.trim().to_lowercase(),
        None => return Err(ConfigurationError::MissingType),
    };

    let dist: Distribution = match kind.as_str() {
        "uniform" => Uniform::from_node(node)?.into(),
        "maxwell" => Maxwell::from_node(node)?.into(),
        "watt" => Watt::from_node(node)?.into(),
        "discrete" => Discrete::from_node(node)?.into(),
        "tabular" => Tabular::from_node(node)?.into(),
        other => return Err(ConfigurationError::UnknownType(other.to_string())),
    };
    log::debug!("constructed {} distribution", dist.kind());
    Ok(dist)
}

/// Split a flat `x..., p...` parameter array into its two halves
pub(crate) fn split_parameters(
    distribution: &'static str,
    mut params: Vec<f64>,
) -> Result<(Vec<f64>, Vec<f64>)> {
    if params.len() % 2 != 0 {
        return Err(ConfigurationError::OddParameterCount {
            distribution,
            found: params.len(),
        });
    }
    let p = params.split_off(params.len() / 2);
    Ok((params, p))
}

/// Require exactly `N` parameters
pub(crate) fn fixed_parameters<const N: usize>(
    distribution: &'static str,
    params: &[f64],
) -> Result<[f64; N]> {
    params
        .try_into()
        .map_err(|_| ConfigurationError::WrongParameterCount {
            distribution,
            expected: N,
            found: params.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TextNode;
    use crate::fast_rng::FastRng;

    fn node(kind: &str, parameters: &str) -> TextNode {
        TextNode::new().with("type", kind).with("parameters", parameters)
    }

    #[test]
    fn test_factory_dispatch() {
        let cases = [
            (node("uniform", "0.0 2.0"), "uniform"),
            (node("maxwell", "1.2895e6"), "maxwell"),
            (node("watt", "0.988e6 2.249e-6"), "watt"),
            (node("discrete", "1.0 2.0 0.5 0.5"), "discrete"),
            (node("tabular", "0.0 1.0 1.0 1.0"), "tabular"),
        ];
        for (n, kind) in cases {
            assert_eq!(distribution_from_node(&n).unwrap().kind(), kind);
        }
    }

    #[test]
    fn test_factory_normalizes_type() {
        let d = distribution_from_node(&node("  UniForm\t", "0.0 2.0")).unwrap();
        assert!(matches!(d, Distribution::Uniform(_)));
    }

    #[test]
    fn test_factory_errors() {
        let missing = TextNode::new().with("parameters", "0.0 1.0");
        assert!(matches!(
            distribution_from_node(&missing),
            Err(ConfigurationError::MissingType)
        ));

        match distribution_from_node(&node("banana", "0.0 1.0")) {
            Err(ConfigurationError::UnknownType(kind)) => assert_eq!(kind, "banana"),
            other => panic!("expected UnknownType, got {:?}", other),
        }

        // no textual path for equiprobable bins
        assert!(matches!(
            distribution_from_node(&node("equiprobable", "0.0 1.0 2.0")),
            Err(ConfigurationError::UnknownType(_))
        ));

        let spline = node("tabular", "0.0 1.0 1.0 1.0").with("interpolation", "spline");
        assert!(matches!(
            distribution_from_node(&spline),
            Err(ConfigurationError::UnknownInterpolation(_))
        ));

        let no_params = TextNode::new().with("type", "uniform");
        assert!(matches!(
            distribution_from_node(&no_params),
            Err(ConfigurationError::MissingField(_))
        ));
    }

    #[test]
    fn test_type_without_text_is_missing() {
        use crate::config::JsonNode;

        for text in [r#"{"type": {}, "parameters": [0, 1]}"#, r#"{"type": null}"#] {
            let node: JsonNode = text.parse().unwrap();
            assert!(matches!(
                distribution_from_node(&node),
                Err(ConfigurationError::MissingType)
            ));
        }
    }

    #[test]
    fn test_enum_dispatch_matches_variant() {
        let tabular = Tabular::new(
            vec![0.0, 1.0, 2.0],
            vec![1.0, 2.0, 1.0],
            Interpolation::LinearLinear,
            None,
        )
        .unwrap();
        let dist = Distribution::from(tabular.clone());

        let mut rng1 = FastRng::new(1);
        let mut rng2 = FastRng::new(1);
        for _ in 0..100 {
            assert_eq!(dist.sample(&mut rng1), tabular.sample(&mut rng2));
        }
    }

    #[test]
    fn test_split_parameters() {
        let (x, p) = split_parameters("tabular", vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(x, vec![1.0, 2.0]);
        assert_eq!(p, vec![3.0, 4.0]);
        assert!(split_parameters("tabular", vec![1.0]).is_err());
    }

    #[test]
    fn test_send_sync_bounds() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Distribution>();
        assert_sync::<Distribution>();
    }
}
