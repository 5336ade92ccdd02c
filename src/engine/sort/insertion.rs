//! Insertion sort tracer.

use crate::engine::step::InsertionStep;

fn step(
    array: &[i64],
    highlighted_indices: Vec<usize>,
    pivot_index: i64,
    status: String,
    sorted_until: usize,
) -> InsertionStep {
    InsertionStep {
        array: array.to_vec(),
        highlighted_indices,
        pivot_index,
        status,
        sorted_until,
    }
}

/// Trace an insertion sort of `input`.
///
/// For each outer index a key-selection step is emitted, then one
/// comparison step and one post-shift step per element shifted right, then
/// an insertion-complete step. `sorted_until` tracks the sorted prefix
/// boundary and `pivot_index` marks the in-flight key (-1 when none).
pub fn insertion_sort_steps(input: &[i64]) -> Vec<InsertionStep> {
    let mut array = input.to_vec();
    let n = array.len();
    let mut steps = Vec::new();

    steps.push(step(
        &array,
        vec![],
        -1,
        "Initial state: Starting Insertion Sort.".to_string(),
        0,
    ));

    for i in 1..n {
        let key = array[i];
        // j is the candidate insertion slot; the element compared against
        // the key sits at j - 1.
        let mut j = i;

        steps.push(step(
            &array,
            vec![i],
            i as i64,
            format!(
                "Selecting key {} at index {}. This element will be inserted into the sorted sub-array.",
                key, i
            ),
            i,
        ));

        while j > 0 && key < array[j - 1] {
            steps.push(step(
                &array,
                vec![i, j - 1],
                i as i64,
                format!(
                    "Comparing key {} with {} at index {}. Since {} > {}, shifting {} right.",
                    key,
                    array[j - 1],
                    j - 1,
                    array[j - 1],
                    key,
                    array[j - 1]
                ),
                i,
            ));

            array[j] = array[j - 1];

            steps.push(step(
                &array,
                vec![j],
                i as i64,
                format!("Element {} shifted to index {}.", array[j], j),
                i,
            ));

            j -= 1;
        }

        array[j] = key;

        steps.push(step(
            &array,
            vec![j],
            -1,
            format!(
                "Key {} inserted into final position {}. The sub-array up to index {} is now sorted.",
                key, j, i
            ),
            i + 1,
        ));
    }

    steps.push(step(
        &array,
        vec![],
        -1,
        "Sorting complete.".to_string(),
        n,
    ));

    steps
}
