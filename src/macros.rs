//! Feature-switched iteration and sorting.
//!
//! Candidate scoring and the sorting passes behind the ECDF and the
//! two-sample test go through these macros so that the `parallel` feature
//! swaps in rayon without touching the call sites.

/// Iterates `$data` with `par_iter` under the `parallel` feature, `iter`
/// otherwise.
#[macro_export]
macro_rules! iter_if_parallel {
    ($data:expr) => {{
        #[cfg(feature = "parallel")]
        let iter = $data.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = $data.iter();
        iter
    }};
}

/// Sorts the slice `$data` with `par_sort_unstable_by` under the
/// `parallel` feature, `sort_unstable_by` otherwise.
#[macro_export]
macro_rules! sort_if_parallel {
    ($data:expr, $compare:expr) => {
        #[cfg(feature = "parallel")]
        rayon::prelude::ParallelSliceMut::par_sort_unstable_by($data, $compare);
        #[cfg(not(feature = "parallel"))]
        $data.sort_unstable_by($compare);
    };
}
