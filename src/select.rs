#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::distance::{ks2_p_value, sup_distance};
use crate::ecdf::Ecdf;
use crate::holm::holm;
use crate::laws::Law;
use crate::{BestFit, Error, FitRecord, Float};

/// Family-wise significance level of the Holm correction.
const ALPHA: f64 = 0.05;

/// A candidate only qualifies when its adjusted p-value exceeds this.
const MIN_ADJUSTED_P: f64 = 0.1;

/// Selects the law that best fits the sample from an ordered pool of
/// candidates.
///
/// Each candidate is fitted to the raw sample and its CDF is evaluated at
/// the sorted, de-duplicated support points. The goodness of fit is the
/// Kolmogorov-Smirnov supremum distance between those fitted values and
/// the empirical CDF values, and the raw p-value is a two-sample
/// Kolmogorov-Smirnov test between the same two arrays of CDF values
/// (note: an approximation of the canonical one-sample test, which would
/// compare the raw sample against the candidate's analytic CDF; kept for
/// parity with established results). Raw p-values are then adjusted
/// jointly with the Holm-Bonferroni correction at level 0.05, and the
/// winner is the first candidate, in pool order, with the strictly
/// smallest distance among those that are not rejected and whose adjusted
/// p-value strictly exceeds 0.1.
///
/// A candidate whose estimation or CDF evaluation fails is excluded from
/// scoring and from the correction family; the remaining candidates are
/// still considered. An empty pool, or a pool in which no candidate
/// qualifies, yields [`BestFit::NoFit`] rather than an error.
///
/// Returns [`Error::EmptySample`] for an empty sample and
/// [`Error::ContainsNaN`] when the data holds NaN values.
///
/// # Examples
///
/// ```
/// use lawfit::laws::{Exponential, Normal};
/// use lawfit::{Law, select_best_fit};
///
/// // Quantiles of the unit exponential law.
/// let data: Vec<f64> = (1..=200).map(|i| -f64::ln(1.0 - f64::from(i) / 201.0)).collect();
///
/// let candidates: Vec<&dyn Law<f64>> = vec![&Exponential, &Normal];
/// let best = select_best_fit(&data, &candidates).unwrap();
/// assert_eq!(best.law(), "exponential");
/// ```
pub fn select_best_fit<T: Float>(
    data: &[T],
    candidates: &[&dyn Law<T>],
) -> Result<BestFit<T>, Error> {
    if data.is_empty() {
        return Err(Error::EmptySample);
    }

    if data.iter().any(|&v| v.is_nan()) {
        return Err(Error::ContainsNaN);
    }

    if candidates.is_empty() {
        return Ok(BestFit::NoFit);
    }

    let ecdf = Ecdf::new(data)?;
    let empirical = ecdf.evaluate_many(ecdf.support());

    let records: Vec<FitRecord<T>> = iter_if_parallel!(candidates)
        .filter_map(|law| score_candidate(*law, data, &ecdf, &empirical))
        .collect();

    if records.is_empty() {
        return Ok(BestFit::NoFit);
    }

    let raw: Vec<T> = records.iter().map(|record| record.p_value).collect();
    let adjustment = holm(&raw, T::from(ALPHA).unwrap())?;

    let min_adjusted = T::from(MIN_ADJUSTED_P).unwrap();
    let winner = records
        .iter()
        .zip(adjustment.reject.iter().zip(&adjustment.p_values))
        .fold(
            None::<(&FitRecord<T>, T)>,
            |best, (record, (&rejected, &adjusted))| {
                let incumbent = best.map_or_else(T::infinity, |(r, _)| r.distance);
                if !rejected && record.distance < incumbent && adjusted > min_adjusted {
                    Some((record, adjusted))
                } else {
                    best
                }
            },
        );

    Ok(match winner {
        None => BestFit::NoFit,
        Some((record, adjusted)) => shape_outcome(record, adjusted),
    })
}

/// Fits and scores one candidate; `None` excludes it from the pool.
///
/// Exclusion covers an estimation error, a parameter vector without at
/// least a location and a scale, a CDF evaluation error, and a CDF vector
/// whose length does not match the support.
fn score_candidate<T: Float>(
    law: &dyn Law<T>,
    data: &[T],
    ecdf: &Ecdf<T>,
    empirical: &[T],
) -> Option<FitRecord<T>> {
    let params = law.estimate(data).ok()?;
    if params.len() < 2 {
        return None;
    }

    let fitted = law.cdf(ecdf.support(), &params).ok()?;
    if fitted.len() != empirical.len() {
        return None;
    }

    let distance = sup_distance(empirical, &fitted).ok()?;
    let p_value = ks2_p_value(&fitted, empirical).ok()?;

    Some(FitRecord {
        law: law.name(),
        params,
        distance,
        p_value,
    })
}

fn shape_outcome<T: Float>(record: &FitRecord<T>, adjusted: T) -> BestFit<T> {
    let (shape, tail) = record.params.split_at(record.params.len() - 2);
    let location = tail[0];
    let scale = tail[1];

    if shape.is_empty() {
        BestFit::LocationScale {
            law: record.law,
            location,
            scale,
            distance: record.distance,
            p_value: adjusted,
        }
    } else {
        BestFit::Shaped {
            law: record.law,
            shape: shape.to_vec(),
            location,
            scale,
            distance: record.distance,
            p_value: adjusted,
        }
    }
}
