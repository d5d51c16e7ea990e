use statrs::distribution::{ContinuousCDF, Normal as Gaussian};

use super::{Law, mean, split_params};
use crate::{Error, Float};

/// The normal law, parameterized as `[location, scale]`.
///
/// Estimation is the maximum-likelihood fit: the location is the sample
/// mean and the scale is the uncorrected (population) standard deviation.
pub struct Normal;

impl<T: Float> Law<T> for Normal {
    fn name(&self) -> &'static str {
        "normal"
    }

    fn estimate(&self, data: &[T]) -> Result<Vec<T>, Error> {
        if data.is_empty() {
            return Err(Error::EmptySample);
        }

        let location = mean(data);
        let variance = data.iter().map(|&x| (x - location).powi(2)).fold(T::zero(), |acc, x| acc + x)
            / T::from(data.len()).unwrap();
        let scale = variance.sqrt();
        if scale < T::epsilon() {
            return Err(Error::ZeroRange);
        }

        Ok(vec![location, scale])
    }

    fn cdf(&self, points: &[T], params: &[T]) -> Result<Vec<T>, Error> {
        let (_, location, scale) = split_params(params)?;

        let dist = Gaussian::new(location.to_f64().unwrap(), scale.to_f64().unwrap())?;
        Ok(points
            .iter()
            .map(|&x| T::from(dist.cdf(x.to_f64().unwrap())).unwrap())
            .collect())
    }
}
