use super::{Law, split_params};
use crate::{Error, Float};

/// The power law, parameterized as `[shape, location, scale]` with the
/// location fixed at zero.
///
/// The density is `a * x^(a - 1) / scale^a` on `(0, scale]`; the scale is
/// the sample maximum and the shape is the maximum-likelihood estimator
/// `n / sum(ln(max / x))`. The CDF has no statrs counterpart and is
/// evaluated in closed form: `((x - location) / scale)^a` clamped to
/// `[0, 1]`.
pub struct PowerLaw;

impl<T: Float> Law<T> for PowerLaw {
    fn name(&self) -> &'static str {
        "powerlaw"
    }

    fn estimate(&self, data: &[T]) -> Result<Vec<T>, Error> {
        if data.is_empty() {
            return Err(Error::EmptySample);
        }

        if data.iter().any(|&x| x <= T::zero()) {
            return Err(Error::NonPositiveData { law: "powerlaw" });
        }

        let scale = data.iter().copied().fold(T::neg_infinity(), T::max);
        let log_sum = data.iter().map(|&x| (scale / x).ln()).fold(T::zero(), |acc, x| acc + x);
        if log_sum <= T::zero() {
            return Err(Error::ZeroRange);
        }

        let shape = T::from(data.len()).unwrap() / log_sum;
        Ok(vec![shape, T::zero(), scale])
    }

    fn cdf(&self, points: &[T], params: &[T]) -> Result<Vec<T>, Error> {
        let (shape, location, scale) = split_params(params)?;
        let [a] = shape else {
            return Err(Error::InvalidParameters {
                given: params.len(),
            });
        };
        if scale <= T::zero() {
            return Err(Error::ZeroRange);
        }

        Ok(points
            .iter()
            .map(|&x| {
                let z = (x - location) / scale;
                if z <= T::zero() {
                    T::zero()
                } else if z >= T::one() {
                    T::one()
                } else {
                    z.powf(*a)
                }
            })
            .collect())
    }
}
