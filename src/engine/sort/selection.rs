//! Selection sort tracer.

use crate::engine::step::SortStep;

/// Trace a selection sort of `input`.
///
/// Per outer index: a `start_min_search` step, a `comparison` step for each
/// candidate, a `new_minimum` step whenever the minimum moves, a `swap`
/// step captured BEFORE the swap mutates the array (so the replay shows
/// the pre-swap pair), and a `sorted_position` step once the slot is final.
pub fn selection_sort_steps(input: &[i64]) -> Vec<SortStep> {
    let mut array = input.to_vec();
    let n = array.len();
    let mut steps = Vec::new();

    steps.push(SortStep::new(&array, vec![], "initial_state"));

    for i in 0..n {
        let mut min_idx = i;

        steps.push(SortStep::new(&array, vec![i], "start_min_search"));

        for j in i + 1..n {
            steps.push(SortStep::new(&array, vec![min_idx, j], "comparison"));

            if array[j] < array[min_idx] {
                min_idx = j;
                steps.push(SortStep::new(&array, vec![min_idx], "new_minimum"));
            }
        }

        if min_idx != i {
            // Pre-swap snapshot; the swap itself lands in the next step.
            steps.push(SortStep::new(&array, vec![i, min_idx], "swap"));
            array.swap(i, min_idx);
        }

        steps.push(SortStep::new(&array, vec![i], "sorted_position"));
    }

    steps.push(SortStep::new(&array, vec![], "complete"));

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts() {
        let steps = selection_sort_steps(&[64, 25, 12, 22, 11]);
        assert_eq!(steps.last().unwrap().array, vec![11, 12, 22, 25, 64]);
    }

    #[test]
    fn test_swap_step_precedes_mutation() {
        let steps = selection_sort_steps(&[2, 1]);
        let swap_pos = steps.iter().position(|s| s.action == "swap").unwrap();
        // The swap step still shows the unsorted array; the following
        // sorted_position step shows the result.
        assert_eq!(steps[swap_pos].array, vec![2, 1]);
        assert_eq!(steps[swap_pos + 1].array, vec![1, 2]);
        assert_eq!(steps[swap_pos + 1].action, "sorted_position");
    }

    #[test]
    fn test_no_swap_when_min_in_place() {
        let steps = selection_sort_steps(&[1, 2, 3]);
        assert!(steps.iter().all(|s| s.action != "swap"));
    }

    #[test]
    fn test_one_sorted_position_per_index() {
        let steps = selection_sort_steps(&[3, 1, 2]);
        let finalized = steps.iter().filter(|s| s.action == "sorted_position").count();
        assert_eq!(finalized, 3);
    }

    #[test]
    fn test_empty_input() {
        let steps = selection_sort_steps(&[]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].action, "initial_state");
        assert_eq!(steps[1].action, "complete");
    }
}
