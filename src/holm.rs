use crate::{Error, Float};

/// Outcome of the Holm-Bonferroni step-down correction.
///
/// Both vectors are positionally aligned with the p-values handed to
/// [`holm`]: `reject[i]` and `p_values[i]` describe the i-th input
/// hypothesis regardless of its rank in the sorted order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Adjustment<T: Float> {
    /// Whether the i-th hypothesis is rejected at the requested level.
    pub reject: Vec<bool>,

    /// Holm-adjusted p-values, each at least as large as its raw input.
    pub p_values: Vec<T>,
}

/// Applies the Holm-Bonferroni step-down correction to a family of raw
/// p-values.
///
/// The k-th smallest p-value (0-indexed) is scaled by `n - k`; a running
/// maximum over the sorted order enforces monotonicity and the result is
/// clipped at 1 before being scattered back to input order. A hypothesis
/// is rejected when its adjusted p-value is at most `alpha`. This is a
/// joint computation over the whole family: it cannot be evaluated one
/// hypothesis at a time.
///
/// Returns [`Error::NoPValues`] for an empty family (the correction is
/// undefined over an empty set) and [`Error::ContainsNaN`] on NaN input.
///
/// # Examples
///
/// ```
/// use lawfit::holm;
///
/// let adjustment = holm(&[0.01_f64, 0.02, 0.04], 0.05).unwrap();
/// assert!((adjustment.p_values[0] - 0.03).abs() < 1e-12);
/// assert!((adjustment.p_values[1] - 0.04).abs() < 1e-12);
/// assert!((adjustment.p_values[2] - 0.04).abs() < 1e-12);
/// assert_eq!(adjustment.reject, vec![true, true, true]);
/// ```
pub fn holm<T: Float>(p_values: &[T], alpha: T) -> Result<Adjustment<T>, Error> {
    let n = p_values.len();
    if n == 0 {
        return Err(Error::NoPValues);
    }

    if p_values.iter().any(|&v| v.is_nan()) {
        return Err(Error::ContainsNaN);
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by(|&a, &b| p_values[a].partial_cmp(&p_values[b]).unwrap());

    let mut adjusted = vec![T::zero(); n];
    let mut running = T::zero();
    for (rank, &idx) in order.iter().enumerate() {
        let scaled = T::from(n - rank).unwrap() * p_values[idx];
        if scaled > running {
            running = scaled;
        }
        adjusted[idx] = running.min(T::one());
    }

    let reject = adjusted.iter().map(|&p| p <= alpha).collect();

    Ok(Adjustment {
        reject,
        p_values: adjusted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjusted_never_below_raw() {
        let raw = [0.003, 0.5, 0.02, 0.9, 0.04];
        let adjustment = holm(&raw, 0.05).unwrap();
        for (r, a) in raw.iter().zip(&adjustment.p_values) {
            assert!(a >= r);
        }
    }

    #[test]
    fn adjusted_clipped_at_one() {
        let adjustment = holm(&[0.6, 0.7, 0.8], 0.05).unwrap();
        assert!(adjustment.p_values.iter().all(|&p| p <= 1.0));
        assert_eq!(adjustment.reject, vec![false, false, false]);
    }

    #[test]
    fn never_looser_than_alpha() {
        // Raw p-values below 0.05 can still survive after scaling.
        let adjustment = holm(&[0.04, 0.04, 0.04], 0.05).unwrap();
        assert_eq!(adjustment.reject, vec![false, false, false]);
    }

    #[test]
    fn single_hypothesis_is_untouched() {
        let adjustment = holm(&[0.03], 0.05).unwrap();
        assert_eq!(adjustment.p_values, vec![0.03]);
        assert_eq!(adjustment.reject, vec![true]);
    }

    #[test]
    fn empty_family_is_undefined() {
        assert_eq!(holm::<f64>(&[], 0.05), Err(Error::NoPValues));
    }
}
