//! Linear search tracer.

use crate::engine::step::LinearStep;

fn step(
    array: &[i64],
    action: String,
    indices: Vec<usize>,
    current_index: i64,
    found: bool,
) -> LinearStep {
    LinearStep {
        array: array.to_vec(),
        action,
        indices,
        current_index,
        found,
    }
}

/// Trace a linear search for `target` in `array`.
///
/// Emits a start step, then per index a comparing step; a match ends the
/// trace immediately with a found step, a miss adds a moving-on step. When
/// every index is exhausted the final step reports `found: false` with
/// `current_index` at the last index examined.
pub fn linear_search_steps(array: &[i64], target: i64) -> Vec<LinearStep> {
    let n = array.len();
    let mut steps = Vec::new();

    steps.push(step(
        array,
        format!("Search started for {}", target),
        vec![],
        -1,
        false,
    ));

    for (i, &value) in array.iter().enumerate() {
        steps.push(step(
            array,
            format!("Comparing element at index {}: Value is {}", i, value),
            vec![i],
            i as i64,
            false,
        ));

        if value == target {
            steps.push(step(
                array,
                format!("Target {} found at index {}", target, i),
                vec![i],
                i as i64,
                true,
            ));
            return steps;
        }

        steps.push(step(
            array,
            format!("Value {} does not match {}. Moving to next index.", value, target),
            vec![],
            i as i64,
            false,
        ));
    }

    steps.push(step(
        array,
        format!("Target {} not found after checking all elements.", target),
        vec![],
        n as i64 - 1,
        false,
    ));

    steps
}
