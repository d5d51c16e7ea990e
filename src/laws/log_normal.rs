use statrs::distribution::{ContinuousCDF, LogNormal as LogNormalDist};

use super::{Law, split_params};
use crate::{Error, Float};

/// The lognormal law, parameterized as `[shape, location, scale]` with the
/// location fixed at zero.
///
/// The shape is the standard deviation of the log-observations and the
/// scale is the exponential of their mean, so the underlying normal law of
/// `ln x` has mean `ln scale` and standard deviation `shape`.
pub struct LogNormal;

impl<T: Float> Law<T> for LogNormal {
    fn name(&self) -> &'static str {
        "lognormal"
    }

    fn estimate(&self, data: &[T]) -> Result<Vec<T>, Error> {
        if data.is_empty() {
            return Err(Error::EmptySample);
        }

        if data.iter().any(|&x| x <= T::zero()) {
            return Err(Error::NonPositiveData { law: "lognormal" });
        }

        let logs: Vec<T> = data.iter().map(|&x| x.ln()).collect();
        let mu = super::mean(&logs);
        let variance = logs.iter().map(|&l| (l - mu).powi(2)).fold(T::zero(), |acc, x| acc + x)
            / T::from(logs.len()).unwrap();
        let shape = variance.sqrt();
        if shape < T::epsilon() {
            return Err(Error::ZeroRange);
        }

        Ok(vec![shape, T::zero(), mu.exp()])
    }

    fn cdf(&self, points: &[T], params: &[T]) -> Result<Vec<T>, Error> {
        let (shape, location, scale) = split_params(params)?;
        let [s] = shape else {
            return Err(Error::InvalidParameters {
                given: params.len(),
            });
        };
        if scale <= T::zero() {
            return Err(Error::ZeroRange);
        }

        let dist = LogNormalDist::new(scale.ln().to_f64().unwrap(), s.to_f64().unwrap())?;
        Ok(points
            .iter()
            .map(|&x| {
                let shifted = x - location;
                if shifted <= T::zero() {
                    T::zero()
                } else {
                    T::from(dist.cdf(shifted.to_f64().unwrap())).unwrap()
                }
            })
            .collect())
    }
}
