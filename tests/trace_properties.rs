//! Property-based tests over the trace invariants.

use proptest::prelude::*;
use serde_json::Value;

use stepviz::tree::{bst_steps, tree_from_value, TreeOp};
use stepviz::{
    binary_search_steps, bubble_sort_steps, insertion_sort_steps, linear_search_steps,
    merge_sort_steps, quick_sort_steps, selection_sort_steps,
};

fn sorted_copy(input: &[i64]) -> Vec<i64> {
    let mut sorted = input.to_vec();
    sorted.sort_unstable();
    sorted
}

fn small_vec() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-100i64..100, 0..20)
}

proptest! {
    #[test]
    fn bubble_final_array_is_sorted(input in small_vec()) {
        let steps = bubble_sort_steps(&input);
        prop_assert_eq!(&steps.last().unwrap().array, &sorted_copy(&input));
        prop_assert_eq!(&steps.first().unwrap().array, &input);
    }

    #[test]
    fn insertion_final_array_is_sorted(input in small_vec()) {
        let steps = insertion_sort_steps(&input);
        prop_assert_eq!(&steps.last().unwrap().array, &sorted_copy(&input));
    }

    #[test]
    fn selection_final_array_is_sorted(input in small_vec()) {
        let steps = selection_sort_steps(&input);
        prop_assert_eq!(&steps.last().unwrap().array, &sorted_copy(&input));
    }

    #[test]
    fn quick_final_array_is_sorted(input in small_vec()) {
        let steps = quick_sort_steps(&input);
        prop_assert_eq!(&steps.last().unwrap().array, &sorted_copy(&input));
    }

    #[test]
    fn merge_final_array_is_sorted(input in small_vec()) {
        let steps = merge_sort_steps(&input);
        prop_assert_eq!(&steps.last().unwrap().array, &sorted_copy(&input));
    }

    #[test]
    fn bubble_mutation_steps_change_the_array(input in small_vec()) {
        // Steps that declare a mutation must show a different array than
        // their predecessor; comparison steps must not mutate.
        let steps = bubble_sort_steps(&input);
        for window in steps.windows(2) {
            if window[1].action == "swapped" {
                prop_assert_ne!(&window[0].array, &window[1].array);
            } else {
                prop_assert_eq!(&window[0].array, &window[1].array);
            }
        }
    }

    #[test]
    fn merge_placements_only_mutate(input in small_vec()) {
        let steps = merge_sort_steps(&input);
        for window in steps.windows(2) {
            if window[1].action != "placement" {
                prop_assert_eq!(&window[0].array, &window[1].array);
            }
        }
    }

    #[test]
    fn binary_search_outcome_matches_membership(
        input in small_vec(),
        target in -100i64..100,
    ) {
        let sorted = sorted_copy(&input);
        let steps = binary_search_steps(&sorted, target);
        let last = steps.last().unwrap();

        if sorted.contains(&target) {
            prop_assert!(last.found);
            prop_assert_eq!(sorted[last.mid as usize], target);
        } else {
            prop_assert!(!last.found);
            prop_assert!(last.low > last.high);
        }
    }

    #[test]
    fn linear_search_trace_length_is_exact(
        input in prop::collection::vec(-20i64..20, 1..20),
        target in -20i64..20,
    ) {
        let steps = linear_search_steps(&input, target);
        match input.iter().position(|&v| v == target) {
            // Start step, two steps per miss, comparing + found at the match.
            Some(k) => prop_assert_eq!(steps.len(), 2 * k + 3),
            None => prop_assert_eq!(steps.len(), 2 * input.len() + 2),
        }
    }

    #[test]
    fn bst_inserts_keep_ordering_invariant(
        values in prop::collection::vec(-50i64..50, 1..15),
    ) {
        let mut state = Value::Null;
        for &value in &values {
            let (_, new_state) = bst_steps(Some(&state), TreeOp::Insert, value);
            state = new_state;
        }

        let mut expected: Vec<i64> = values.clone();
        expected.sort_unstable();
        expected.dedup();

        let in_order = tree_from_value(Some(&state))
            .map_or(Vec::new(), |root| root.in_order());
        prop_assert_eq!(in_order, expected);
    }

    #[test]
    fn bst_insert_then_delete_restores_in_order(
        values in prop::collection::vec(-50i64..50, 1..10),
        extra in 100i64..200,
    ) {
        // `extra` is outside the value range, so it is always a fresh node.
        let mut state = Value::Null;
        for &value in &values {
            state = bst_steps(Some(&state), TreeOp::Insert, value).1;
        }
        let before = tree_from_value(Some(&state))
            .map_or(Vec::new(), |root| root.in_order());

        let (_, state) = bst_steps(Some(&state), TreeOp::Insert, extra);
        let (_, state) = bst_steps(Some(&state), TreeOp::Delete, extra);

        let after = tree_from_value(Some(&state))
            .map_or(Vec::new(), |root| root.in_order());
        prop_assert_eq!(before, after);
    }
}
