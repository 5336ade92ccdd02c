//! Merge sort tracer.

use crate::engine::step::SortStep;

/// Trace a merge sort of `input`.
///
/// The sort splits recursively at the midpoint (left-inclusive) and merges
/// each pair of sorted halves through an auxiliary snapshot of the
/// subrange. A `comparing` step is emitted per pointer comparison and a
/// `placement` step per element written back into the main array,
/// including the drain of leftover elements from either half.
pub fn merge_sort_steps(input: &[i64]) -> Vec<SortStep> {
    let mut array = input.to_vec();
    let mut steps = Vec::new();

    steps.push(SortStep::new(&array, vec![], "initial"));

    if !array.is_empty() {
        let end = array.len() - 1;
        merge_sort(&mut array, 0, end, &mut steps);
    }

    steps.push(SortStep::new(&array, vec![], "complete"));

    steps
}

fn merge_sort(array: &mut [i64], start: usize, end: usize, steps: &mut Vec<SortStep>) {
    if start >= end {
        return;
    }

    let mid = (start + end) / 2;
    merge_sort(array, start, mid, steps);
    merge_sort(array, mid + 1, end, steps);
    merge(array, start, mid, end, steps);
}

fn merge(array: &mut [i64], start: usize, mid: usize, end: usize, steps: &mut Vec<SortStep>) {
    let auxiliary: Vec<i64> = array[start..=end].to_vec();

    // i walks the left half of the auxiliary array, j the right half,
    // k the write position in the main array.
    let mut i = 0;
    let mut j = mid - start + 1;
    let mut k = start;

    while i <= mid - start && j <= end - start {
        steps.push(SortStep::new(array, vec![start + i, start + j], "comparing"));

        if auxiliary[i] <= auxiliary[j] {
            array[k] = auxiliary[i];
            i += 1;
        } else {
            array[k] = auxiliary[j];
            j += 1;
        }
        k += 1;

        steps.push(SortStep::new(array, vec![k - 1], "placement"));
    }

    while i <= mid - start {
        array[k] = auxiliary[i];
        steps.push(SortStep::new(array, vec![k], "placement"));
        i += 1;
        k += 1;
    }

    while j <= end - start {
        array[k] = auxiliary[j];
        steps.push(SortStep::new(array, vec![k], "placement"));
        j += 1;
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts() {
        let steps = merge_sort_steps(&[38, 27, 43, 3, 9, 82, 10]);
        assert_eq!(steps.last().unwrap().array, vec![3, 9, 10, 27, 38, 43, 82]);
    }

    #[test]
    fn test_placement_count_covers_every_write() {
        // Every merged element is written back exactly once, so placements
        // across all merges of [2,1,3] total 2 + 3 = 5.
        let steps = merge_sort_steps(&[2, 1, 3]);
        let placements = steps.iter().filter(|s| s.action == "placement").count();
        assert_eq!(placements, 5);
    }

    #[test]
    fn test_comparing_highlights_both_halves() {
        let steps = merge_sort_steps(&[2, 1]);
        let compare = steps.iter().find(|s| s.action == "comparing").unwrap();
        assert_eq!(compare.highlight_indices, vec![0, 1]);
    }

    #[test]
    fn test_empty_and_singleton() {
        assert_eq!(merge_sort_steps(&[]).len(), 2);
        let steps = merge_sort_steps(&[4]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps.last().unwrap().array, vec![4]);
    }
}
