//! Quick sort tracer (Lomuto partition, last-element pivot).

use crate::engine::step::QuickStep;

fn step(
    array: &[i64],
    action: String,
    indices: Vec<usize>,
    pivot_index: i64,
    boundary_left: i64,
    boundary_right: i64,
) -> QuickStep {
    QuickStep {
        array: array.to_vec(),
        action,
        indices,
        pivot_index,
        boundary_left,
        boundary_right,
    }
}

/// Trace a quick sort of `input`.
///
/// Each partition emits a pivot-selection step highlighting the active
/// range, a comparison step per element (current pointer, pivot, and the
/// next candidate swap slot), a swap step only when elements actually move,
/// and a pivot-placement step with the range boundaries reset to -1.
/// Recursion runs left sub-range first, then right.
pub fn quick_sort_steps(input: &[i64]) -> Vec<QuickStep> {
    let mut array = input.to_vec();
    let mut steps = Vec::new();

    steps.push(step(
        &array,
        "Initial State".to_string(),
        vec![],
        -1,
        -1,
        -1,
    ));

    let high = array.len() as i64 - 1;
    quick_sort_recursive(&mut array, 0, high, &mut steps);

    let all: Vec<usize> = (0..array.len()).collect();
    steps.push(step(&array, "Sorting Complete".to_string(), all, -1, -1, -1));

    steps
}

fn quick_sort_recursive(array: &mut [i64], low: i64, high: i64, steps: &mut Vec<QuickStep>) {
    if low < high {
        let pi = partition(array, low, high, steps);
        quick_sort_recursive(array, low, pi - 1, steps);
        quick_sort_recursive(array, pi + 1, high, steps);
    }
}

fn partition(array: &mut [i64], low: i64, high: i64, steps: &mut Vec<QuickStep>) -> i64 {
    let pivot = array[high as usize];
    // Last confirmed less-than-or-equal position; starts one left of the range.
    let mut i = low - 1;

    steps.push(step(
        array,
        format!("Selecting Pivot {} and Partitioning Range", pivot),
        (low as usize..=high as usize).collect(),
        high,
        low,
        high,
    ));

    for j in low..high {
        steps.push(step(
            array,
            format!("Comparing {} with Pivot {}", array[j as usize], pivot),
            vec![j as usize, high as usize, (i + 1) as usize],
            high,
            low,
            high,
        ));

        if array[j as usize] <= pivot {
            i += 1;

            if i != j {
                array.swap(i as usize, j as usize);
                steps.push(step(
                    array,
                    format!(
                        "Swapping smaller element {} (at {}) with element at {}",
                        array[i as usize], j, i
                    ),
                    vec![i as usize, j as usize, high as usize],
                    high,
                    low,
                    high,
                ));
            }
        }
    }

    let final_pivot_index = i + 1;
    array.swap(final_pivot_index as usize, high as usize);

    steps.push(step(
        array,
        format!(
            "Pivot {} placed at final sorted position ({})",
            pivot, final_pivot_index
        ),
        vec![final_pivot_index as usize],
        final_pivot_index,
        -1,
        -1,
    ));

    final_pivot_index
}
