//! Shell sort sentinel.

use crate::engine::step::SortStep;

/// Shell sort has no step-trace implementation yet. Returns a single
/// `unsupported_algorithm` step carrying the input unchanged; callers must
/// treat this as "no visualization available", not as an error.
pub fn shell_sort_steps(input: &[i64]) -> Vec<SortStep> {
    vec![SortStep::new(input, vec![], "unsupported_algorithm")]
}
