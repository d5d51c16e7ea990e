#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic)]
#![allow(
    clippy::doc_markdown,
    clippy::too_many_lines,
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

#[macro_use]
pub(crate) mod macros;

mod distance;
mod ecdf;
mod error;
mod holm;
pub mod laws;
mod select;

use std::iter::Sum;

pub use distance::{ks2_p_value, sup_distance};
pub use ecdf::Ecdf;
pub use error::Error;
pub use holm::{Adjustment, holm};
pub use laws::Law;
use num_traits::{Float as Float_, Num, NumAssign, NumOps};
pub use select::select_best_fit;

/// A convenience trait combining bounds frequently used for floating-point computations.
#[cfg(feature = "parallel")]
pub trait Float: Float_ + Num + NumAssign + NumOps + Sum + Send + Sync {}

/// Blanket implementation of [`Float`] for any type that satisfies its bounds.
#[cfg(feature = "parallel")]
impl<T: Float_ + Num + NumAssign + NumOps + Sum + Send + Sync> Float for T {}

/// A convenience trait combining bounds frequently used for floating-point computations.
#[cfg(not(feature = "parallel"))]
pub trait Float: Float_ + Num + NumAssign + NumOps + Sum {}

/// Blanket implementation of [`Float`] for any type that satisfies its bounds.
#[cfg(not(feature = "parallel"))]
impl<T: Float_ + Num + NumAssign + NumOps + Sum> Float for T {}

/// Per-candidate scoring result produced while evaluating a pool of laws.
///
/// One record is created for every candidate that was fitted and scored
/// successfully; records are never mutated afterwards. The parameter vector
/// follows the shapes-then-location-then-scale convention of [`Law`] and
/// always holds at least two entries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FitRecord<T: Float> {
    /// Name of the candidate family.
    pub law: &'static str,

    /// Estimated parameter vector: zero or more shape parameters, then the
    /// location and the scale.
    pub params: Vec<T>,

    /// Kolmogorov-Smirnov supremum distance between the fitted CDF and the
    /// empirical CDF at the support points.
    pub distance: T,

    /// Raw (unadjusted) p-value of the two-sample test between the fitted
    /// and empirical CDF values.
    pub p_value: T,
}

/// Outcome of [`select_best_fit`].
///
/// The variant is chosen by the winning candidate's shape-parameter count:
/// a plain location-scale family (no shape parameters) yields
/// [`BestFit::LocationScale`], a family with one or more shape parameters
/// yields [`BestFit::Shaped`], and [`BestFit::NoFit`] reports that no
/// candidate satisfied the selection rule. `NoFit` is a normal,
/// representable outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BestFit<T: Float> {
    /// No candidate passed the selection rule (or the pool was empty).
    NoFit,

    /// The winner has no shape parameters, only a location and a scale.
    LocationScale {
        /// Name of the selected family.
        law: &'static str,
        /// Estimated location parameter.
        location: T,
        /// Estimated scale parameter.
        scale: T,
        /// Kolmogorov-Smirnov distance of the winning fit.
        distance: T,
        /// Holm-adjusted p-value of the winning fit.
        p_value: T,
    },

    /// The winner has one or more shape parameters.
    Shaped {
        /// Name of the selected family.
        law: &'static str,
        /// Estimated shape parameters, in family order.
        shape: Vec<T>,
        /// Estimated location parameter.
        location: T,
        /// Estimated scale parameter.
        scale: T,
        /// Kolmogorov-Smirnov distance of the winning fit.
        distance: T,
        /// Holm-adjusted p-value of the winning fit.
        p_value: T,
    },
}

impl<T: Float> BestFit<T> {
    /// Name of the selected family, or `"None"` when nothing was selected.
    #[must_use]
    pub fn law(&self) -> &'static str {
        match self {
            Self::NoFit => "None",
            Self::LocationScale { law, .. } | Self::Shaped { law, .. } => law,
        }
    }

    /// Shape parameters of the winner; empty for location-scale winners and
    /// for the no-fit outcome.
    #[must_use]
    pub fn shape(&self) -> &[T] {
        match self {
            Self::NoFit | Self::LocationScale { .. } => &[],
            Self::Shaped { shape, .. } => shape,
        }
    }

    /// Kolmogorov-Smirnov distance of the winning fit, or positive infinity
    /// when nothing was selected.
    #[must_use]
    pub fn distance(&self) -> T {
        match self {
            Self::NoFit => T::infinity(),
            Self::LocationScale { distance, .. } | Self::Shaped { distance, .. } => *distance,
        }
    }

    /// Holm-adjusted p-value of the winning fit, or `-1` when nothing was
    /// selected.
    #[must_use]
    pub fn p_value(&self) -> T {
        match self {
            Self::NoFit => -T::one(),
            Self::LocationScale { p_value, .. } | Self::Shaped { p_value, .. } => *p_value,
        }
    }
}

#[cfg(all(feature = "serde", test))]
mod fit_record_serde_test {
    use serde_test::{Token, assert_ser_tokens};

    use super::FitRecord;

    #[test]
    fn test_fit_record_tokens() {
        let record = FitRecord {
            law: "exponential",
            params: vec![0.0, 1.0],
            distance: 0.05,
            p_value: 0.9,
        };

        let expected_tokens = vec![
            Token::Struct {
                name: "FitRecord",
                len: 4,
            },
            Token::Str("law"),
            Token::Str("exponential"),
            Token::Str("params"),
            Token::Seq { len: Some(2) },
            Token::F64(0.0),
            Token::F64(1.0),
            Token::SeqEnd,
            Token::Str("distance"),
            Token::F64(0.05),
            Token::Str("p_value"),
            Token::F64(0.9),
            Token::StructEnd,
        ];

        assert_ser_tokens(&record, &expected_tokens);
    }
}
