use crate::{Error, Float};

/// Empirical cumulative distribution function over the sorted,
/// de-duplicated sample.
///
/// The support is the sorted sequence of distinct observations; evaluated
/// at a point `x` the ECDF returns the fraction of support values that are
/// less than or equal to `x`. At its own support points it therefore takes
/// the values `(i + 1) / m` for `i = 0..m`.
///
/// # Examples
///
/// ```
/// use lawfit::Ecdf;
///
/// let ecdf = Ecdf::new(&[3.0, 1.0, 2.0, 2.0]).unwrap();
/// assert_eq!(ecdf.support(), &[1.0, 2.0, 3.0]);
/// assert_eq!(ecdf.evaluate(0.5), 0.0);
/// assert_eq!(ecdf.evaluate(2.0), 2.0 / 3.0);
/// assert_eq!(ecdf.evaluate(10.0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Ecdf<T: Float> {
    support: Vec<T>,
}

impl<T: Float> Ecdf<T> {
    /// Builds the ECDF from a sample by sorting and de-duplicating it.
    ///
    /// Returns [`Error::EmptySample`] for an empty sample and
    /// [`Error::ContainsNaN`] when the data holds NaN values.
    pub fn new(data: &[T]) -> Result<Self, Error> {
        if data.is_empty() {
            return Err(Error::EmptySample);
        }

        if data.iter().any(|&v| v.is_nan()) {
            return Err(Error::ContainsNaN);
        }

        let mut support = data.to_vec();
        sort_if_parallel!(support.as_mut_slice(), |a, b| a.partial_cmp(b).unwrap());
        support.dedup_by(|a, b| a == b);

        Ok(Self { support })
    }

    /// The sorted, distinct observations the step function is built from.
    #[must_use]
    pub fn support(&self) -> &[T] {
        &self.support
    }

    /// Fraction of support values less than or equal to `x`.
    #[must_use]
    pub fn evaluate(&self, x: T) -> T {
        let below = self.support.partition_point(|&v| v <= x);
        T::from(below).unwrap() / T::from(self.support.len()).unwrap()
    }

    /// Evaluates the step function at each of the given points.
    #[must_use]
    pub fn evaluate_many(&self, points: &[T]) -> Vec<T> {
        points.iter().map(|&x| self.evaluate(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_values_step_evenly() {
        let ecdf = Ecdf::new(&[5.0, 1.0, 4.0, 2.0, 3.0]).unwrap();
        let values = ecdf.evaluate_many(ecdf.support());
        assert_eq!(values, vec![0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn duplicates_collapse() {
        let ecdf = Ecdf::new(&[1.0, 1.0, 1.0, 2.0]).unwrap();
        assert_eq!(ecdf.support().len(), 2);
        assert_eq!(ecdf.evaluate(1.0), 0.5);
    }

    #[test]
    fn empty_sample_is_rejected() {
        assert_eq!(Ecdf::<f64>::new(&[]), Err(Error::EmptySample));
    }

    #[test]
    fn nan_is_rejected() {
        assert_eq!(Ecdf::new(&[1.0, f64::NAN]), Err(Error::ContainsNaN));
    }
}
