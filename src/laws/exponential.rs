use statrs::distribution::{ContinuousCDF, Exp};

use super::{Law, mean, split_params};
use crate::{Error, Float};

/// The exponential law, parameterized as `[location, scale]`.
///
/// Estimation matches the maximum-likelihood fit of a shifted exponential:
/// the location is the sample minimum and the scale is the mean excess
/// above it.
///
/// # Examples
///
/// ```
/// use lawfit::Law;
/// use lawfit::laws::Exponential;
///
/// let params = Exponential.estimate(&[0.0, 1.0, 2.0]).unwrap();
/// assert_eq!(params, vec![0.0, 1.0]);
/// ```
pub struct Exponential;

impl<T: Float> Law<T> for Exponential {
    fn name(&self) -> &'static str {
        "exponential"
    }

    fn estimate(&self, data: &[T]) -> Result<Vec<T>, Error> {
        if data.is_empty() {
            return Err(Error::EmptySample);
        }

        let location = data.iter().copied().fold(T::infinity(), T::min);
        let scale = mean(data) - location;
        if scale <= T::zero() {
            return Err(Error::ZeroRange);
        }

        Ok(vec![location, scale])
    }

    fn cdf(&self, points: &[T], params: &[T]) -> Result<Vec<T>, Error> {
        let (_, location, scale) = split_params(params)?;
        if scale <= T::zero() {
            return Err(Error::ZeroRange);
        }

        let dist = Exp::new(1.0 / scale.to_f64().unwrap())?;
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
    fn cdf_is_zero_below_location() {
        let values: Vec<f64> = Exponential.cdf(&[0.0, 1.0], &[1.0, 2.0]).unwrap();
        assert_eq!(values, vec![0.0, 0.0]);
    }

    #[test]
    fn cdf_matches_closed_form() {
        let values: Vec<f64> = Exponential.cdf(&[2.0], &[0.0, 2.0]).unwrap();
        assert!((values[0] - (1.0 - f64::exp(-1.0))).abs() < 1e-12);
    }

    #[test]
    fn degenerate_sample_is_rejected() {
        let result: Result<Vec<f64>, Error> = Exponential.estimate(&[3.0, 3.0, 3.0]);
        assert_eq!(result, Err(Error::ZeroRange));
    }
}
