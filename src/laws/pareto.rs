use statrs::distribution::{ContinuousCDF, Pareto as ParetoDist};

use super::{Law, split_params};
use crate::{Error, Float};

/// The Pareto law, parameterized as `[shape, location, scale]` with the
/// location fixed at zero.
///
/// The scale is the sample minimum and the shape is the Hill
/// maximum-likelihood estimator `n / sum(ln(x / min))`.
pub struct Pareto;

impl<T: Float> Law<T> for Pareto {
    fn name(&self) -> &'static str {
        "pareto"
    }

    fn estimate(&self, data: &[T]) -> Result<Vec<T>, Error> {
        if data.is_empty() {
            return Err(Error::EmptySample);
        }

        if data.iter().any(|&x| x <= T::zero()) {
            return Err(Error::NonPositiveData { law: "pareto" });
        }

        let scale = data.iter().copied().fold(T::infinity(), T::min);
        let log_sum = data.iter().map(|&x| (x / scale).ln()).fold(T::zero(), |acc, x| acc + x);
        if log_sum <= T::zero() {
            return Err(Error::ZeroRange);
        }

        let shape = T::from(data.len()).unwrap() / log_sum;
        Ok(vec![shape, T::zero(), scale])
    }

    fn cdf(&self, points: &[T], params: &[T]) -> Result<Vec<T>, Error> {
        let (shape, location, scale) = split_params(params)?;
        let [b] = shape else {
            return Err(Error::InvalidParameters {
                given: params.len(),
            });
        };

        let dist = ParetoDist::new(scale.to_f64().unwrap(), b.to_f64().unwrap())?;
        Ok(points
            .iter()
            .map(|&x| T::from(dist.cdf((x - location).to_f64().unwrap())).unwrap())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_uses_hill_shape() {
        let data = [1.0, f64::exp(1.0), f64::exp(3.0)];
        let params: Vec<f64> = Pareto.estimate(&data).unwrap();
        // log_sum = 0 + 1 + 3, shape = 3 / 4.
        assert!((params[0] - 0.75).abs() < 1e-12);
        assert_eq!(params[1], 0.0);
        assert_eq!(params[2], 1.0);
    }

    #[test]
    fn cdf_is_zero_below_the_scale() {
        let values: Vec<f64> = Pareto.cdf(&[0.5, 1.0], &[2.0, 0.0, 1.0]).unwrap();
        assert_eq!(values, vec![0.0, 0.0]);
    }

    #[test]
    fn cdf_matches_closed_form() {
        let values: Vec<f64> = Pareto.cdf(&[2.0], &[2.0, 0.0, 1.0]).unwrap();
        assert!((values[0] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn degenerate_sample_is_rejected() {
        let result: Result<Vec<f64>, Error> = Pareto.estimate(&[2.0, 2.0]);
        assert_eq!(result, Err(Error::ZeroRange));
    }
}
