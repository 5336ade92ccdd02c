//! Bubble sort tracer.

use crate::engine::step::SortStep;

/// Trace a bubble sort of `input`.
///
/// Emits an `initial` step, a `comparing` step for every adjacent pair in
/// the standard decreasing-window pattern, a `swapped` step after each
/// swap, and a `complete` step once the array is sorted.
pub fn bubble_sort_steps(input: &[i64]) -> Vec<SortStep> {
    let mut array = input.to_vec();
    let n = array.len();
    let mut steps = Vec::new();

    steps.push(SortStep::new(&array, vec![], "initial"));

    for i in 0..n {
        for j in 0..n - i - 1 {
            steps.push(SortStep::new(&array, vec![j, j + 1], "comparing"));

            if array[j] > array[j + 1] {
                array.swap(j, j + 1);
                steps.push(SortStep::new(&array, vec![j, j + 1], "swapped"));
            }
        }
    }

    steps.push(SortStep::new(&array, vec![], "complete"));

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_and_bookends() {
        let steps = bubble_sort_steps(&[4, 2, 7, 1]);
        assert_eq!(steps.first().map(|s| s.action.as_str()), Some("initial"));
        assert_eq!(steps.last().map(|s| s.action.as_str()), Some("complete"));
        assert_eq!(steps.last().map(|s| s.array.clone()), Some(vec![1, 2, 4, 7]));
    }

    #[test]
    fn test_comparison_count_matches_window() {
        // n=3 compares pairs (0,1),(1,2) then (0,1): 3 comparing steps.
        let steps = bubble_sort_steps(&[3, 2, 1]);
        let comparisons = steps.iter().filter(|s| s.action == "comparing").count();
        assert_eq!(comparisons, 3);
    }

    #[test]
    fn test_sorted_input_has_no_swaps() {
        let steps = bubble_sort_steps(&[1, 2, 3, 4]);
        assert!(steps.iter().all(|s| s.action != "swapped"));
    }

    #[test]
    fn test_empty_input_is_trivial() {
        let steps = bubble_sort_steps(&[]);
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|s| s.array.is_empty()));
    }

    #[test]
    fn test_single_element() {
        let steps = bubble_sort_steps(&[9]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].array, vec![9]);
    }
}
