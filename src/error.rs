/// Errors raised while building a distribution from configuration.
///
/// Every variant is fatal for the distribution being loaded: constructors
/// return before any partially built value escapes.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// The `type` field is absent on the factory path.
    #[error("distribution type must be specified")]
    MissingType,

    /// The `type` field names no known distribution.
    #[error("invalid distribution type: {0}")]
    UnknownType(String),

    /// A fixed-arity distribution received the wrong number of parameters.
    #[error("{distribution} distribution must have {expected} parameters specified, found {found}")]
    WrongParameterCount {
        distribution: &'static str,
        expected: usize,
        found: usize,
    },

    /// The `interpolation` field is present but not recognized.
    #[error("unknown interpolation type for distribution: {0}")]
    UnknownInterpolation(String),

    /// A required field is absent.
    #[error("required field '{0}' is missing")]
    MissingField(String),

    /// An `x`/`p` parameter array cannot be split into two halves.
    #[error("{distribution} distribution requires an even number of parameters, found {found}")]
    OddParameterCount {
        distribution: &'static str,
        found: usize,
    },

    #[error("{distribution} distribution requires at least {min} points, found {found}")]
    TooFewPoints {
        distribution: &'static str,
        min: usize,
        found: usize,
    },

    #[error("{distribution} distribution arrays differ in length: expected {expected}, found {found}")]
    LengthMismatch {
        distribution: &'static str,
        expected: usize,
        found: usize,
    },

    /// Table abscissae must be strictly increasing.
    #[error("{distribution} grid must be strictly increasing: x[{index}] = {value} follows {previous}")]
    NonIncreasingGrid {
        distribution: &'static str,
        index: usize,
        previous: f64,
        value: f64,
    },

    #[error("{distribution} distribution has negative probability p[{index}] = {value}")]
    NegativeProbability {
        distribution: &'static str,
        index: usize,
        value: f64,
    },

    /// An explicitly supplied cumulative table decreases.
    #[error("cumulative table decreases at c[{index}] = {value} (previous {previous})")]
    NonMonotonicCdf {
        index: usize,
        previous: f64,
        value: f64,
    },

    /// Total probability mass is zero, negative or not finite.
    #[error("{distribution} distribution cannot be normalized: total mass is {total}")]
    NonPositiveNormalization {
        distribution: &'static str,
        total: f64,
    },

    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds { low: f64, high: f64 },

    /// A scalar parameter lies outside its domain.
    #[error("invalid {distribution} parameter '{name}': {value}")]
    InvalidParameter {
        distribution: &'static str,
        name: &'static str,
        value: f64,
    },

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
