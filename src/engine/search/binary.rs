//! Binary search tracer.

use crate::engine::step::BinaryStep;

fn step(
    array: &[i64],
    action: String,
    indices: Vec<usize>,
    low: i64,
    high: i64,
    mid: i64,
    found: bool,
) -> BinaryStep {
    BinaryStep {
        array: array.to_vec(),
        action,
        indices,
        low,
        high,
        mid,
        found,
    }
}

/// Trace a binary search for `target` in `array`.
///
/// The input must already be in non-decreasing order; that is the caller's
/// contract and is not verified here. Emits a start step with the initial
/// bounds, a mid-check step per iteration, a bound-narrowing step after
/// each unequal comparison, and a terminal found/not-found step. The
/// not-found case is reached when the bounds converge (`low > high`).
pub fn binary_search_steps(array: &[i64], target: i64) -> Vec<BinaryStep> {
    let mut steps = Vec::new();

    steps.push(step(
        array,
        format!("Search started for {}", target),
        vec![],
        0,
        array.len() as i64 - 1,
        -1,
        false,
    ));

    let mut low: i64 = 0;
    let mut high: i64 = array.len() as i64 - 1;
    let mut found_at: Option<i64> = None;

    while low <= high {
        let mid = (low + high) / 2;
        let value = array[mid as usize];

        steps.push(step(
            array,
            format!("Checking mid element at index {}: Value is {}", mid, value),
            vec![mid as usize],
            low,
            high,
            mid,
            false,
        ));

        if value == target {
            found_at = Some(mid);
            break;
        } else if value < target {
            low = mid + 1;
            steps.push(step(
                array,
                format!("Target is greater than {}. Setting new low to {}.", value, low),
                vec![],
                low,
                high,
                mid,
                false,
            ));
        } else {
            high = mid - 1;
            steps.push(step(
                array,
                format!("Target is less than {}. Setting new high to {}.", value, high),
                vec![],
                low,
                high,
                mid,
                false,
            ));
        }
    }

    match found_at {
        Some(mid) => steps.push(step(
            array,
            format!("Target {} found at index {}", target, mid),
            vec![mid as usize],
            low,
            high,
            mid,
            true,
        )),
        None => steps.push(step(
            array,
            format!("Target {} not found in the array.", target),
            vec![],
            low,
            high,
            -1,
            false,
        )),
    }

    steps
}
