//! Candidate distribution families.
//!
//! Every family exposes exactly two capabilities through the [`Law`]
//! trait: estimating a parameter vector from a sample and evaluating its
//! CDF at a set of query points. Parameter vectors follow one convention
//! throughout the crate: zero or more shape parameters first, then exactly
//! one location and one scale (so every vector holds at least two
//! entries).

mod exponential;
mod log_normal;
mod normal;
mod pareto;
mod power_law;

pub use exponential::Exponential;
pub use log_normal::LogNormal;
pub use normal::Normal;
pub use pareto::Pareto;
pub use power_law::PowerLaw;

use crate::{Error, Float};

/// A candidate distribution family.
///
/// Implementations estimate their parameters from the raw (not
/// de-duplicated) sample and evaluate their CDF at arbitrary query points
/// given such a parameter vector. An estimation that cannot produce a
/// meaningful fit (degenerate data, unsupported values) must return an
/// error; [`crate::select_best_fit`] excludes the candidate and carries on
/// with the rest of the pool.
pub trait Law<T: Float>: Send + Sync {
    /// Name of the family, used to label the selection outcome.
    fn name(&self) -> &'static str;

    /// Estimates the parameter vector (shapes, then location, then scale)
    /// from the sample.
    fn estimate(&self, data: &[T]) -> Result<Vec<T>, Error>;

    /// Evaluates the family CDF at each query point for the given
    /// parameter vector.
    fn cdf(&self, points: &[T], params: &[T]) -> Result<Vec<T>, Error>;
}

/// Splits a parameter vector into its shape slice, location and scale.
pub(crate) fn split_params<T: Float>(params: &[T]) -> Result<(&[T], T, T), Error> {
    if params.len() < 2 {
        return Err(Error::InvalidParameters {
            given: params.len(),
        });
    }

    let (shape, tail) = params.split_at(params.len() - 2);
    Ok((shape, tail[0], tail[1]))
}

pub(crate) fn mean<T: Float>(data: &[T]) -> T {
    let sum = data.iter().fold(T::zero(), |acc, &x| acc + x);
    sum / T::from(data.len()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_shape_order() {
        let (shape, location, scale) = split_params(&[2.5, 0.0, 1.0]).unwrap();
        assert_eq!(shape, &[2.5]);
        assert_eq!(location, 0.0);
        assert_eq!(scale, 1.0);
    }

    #[test]
    fn split_rejects_short_vectors() {
        assert_eq!(
            split_params(&[1.0]),
            Err(Error::InvalidParameters { given: 1 })
        );
    }
}
