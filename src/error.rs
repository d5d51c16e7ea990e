use thiserror::Error as ThisError;

/// Represents errors that can occur while fitting and selecting laws.
#[derive(Debug, ThisError, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The two sequences handed to the supremum-distance evaluator have
    /// different lengths. This is a contract violation, never a recoverable
    /// condition: the evaluator refuses to truncate silently.
    #[error("Sequence lengths must match, but were given {left} and {right}.")]
    LengthMismatch { left: usize, right: usize },

    /// An empty sample was supplied where observations are required.
    #[error("The sample must not be empty.")]
    EmptySample,

    /// The input data contains `NaN` values, which have no place in a CDF.
    #[error("Input data must not contain NaN values.")]
    ContainsNaN,

    /// The range of the input data is zero (i.e., all values are the same),
    /// so the family's scale parameter cannot be estimated.
    #[error("The range of the data is zero, the parameters cannot be estimated.")]
    ZeroRange,

    /// The family requires strictly positive observations.
    #[error("The {law} law requires strictly positive data.")]
    NonPositiveData { law: &'static str },

    /// A parameter vector without at least a location and a scale.
    #[error("Parameter vector must hold at least a location and a scale, but has length {given}.")]
    InvalidParameters { given: usize },

    /// The multiple-testing correction was asked to adjust an empty set of
    /// p-values, which is undefined.
    #[error("Cannot adjust an empty set of p-values.")]
    NoPValues,

    /// See [`statrs::distribution::NormalError`].
    #[error("{0}")]
    NormalDistributionError(#[from] statrs::distribution::NormalError),

    /// See [`statrs::distribution::ExpError`].
    #[error("{0}")]
    ExpError(#[from] statrs::distribution::ExpError),

    /// See [`statrs::distribution::LogNormalError`].
    #[error("{0}")]
    LogNormalError(#[from] statrs::distribution::LogNormalError),

    /// See [`statrs::distribution::ParetoError`].
    #[error("{0}")]
    ParetoError(#[from] statrs::distribution::ParetoError),

    /// Other errors.
    #[error("{0}")]
    Other(String),
}
