//! Tree mutation with step tracing.

use serde_json::Value;

use crate::engine::step::TreeStep;

use super::node::{tree_from_value, tree_to_value, Node};

/// The two supported tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeOp {
    Insert,
    Delete,
}

impl TreeOp {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "insert" => Some(Self::Insert),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Run one self-contained tree transition.
///
/// Deserializes `state`, applies the operation while recording a step per
/// node visit and mutation, and returns the trace together with the new
/// serialized state the caller must round-trip into the next request.
pub fn bst_steps(state: Option<&Value>, op: TreeOp, value: i64) -> (Vec<TreeStep>, Value) {
    let root = tree_from_value(state);
    let mut steps = Vec::new();

    let root = match op {
        TreeOp::Insert => match root {
            None => {
                steps.push(TreeStep::new(value, "Root Inserted"));
                Some(Node::leaf(value))
            }
            Some(node) => Some(insert_recursive(node, value, &mut steps)),
        },
        TreeOp::Delete => delete_recursive(root, value, &mut steps),
    };

    let new_state = tree_to_value(root.as_deref());
    (steps, new_state)
}

fn insert_recursive(mut node: Box<Node>, value: i64, steps: &mut Vec<TreeStep>) -> Box<Node> {
    steps.push(TreeStep::new(node.value, "Visiting"));

    if value < node.value {
        steps.push(TreeStep::new(node.value, "Move Left"));
        node.left = Some(match node.left.take() {
            None => {
                steps.push(TreeStep::new(value, "Inserted"));
                Node::leaf(value)
            }
            Some(child) => insert_recursive(child, value, steps),
        });
    } else if value > node.value {
        steps.push(TreeStep::new(node.value, "Move Right"));
        node.right = Some(match node.right.take() {
            None => {
                steps.push(TreeStep::new(value, "Inserted"));
                Node::leaf(value)
            }
            Some(child) => insert_recursive(child, value, steps),
        });
    } else {
        // Duplicate insert is a no-op.
        steps.push(TreeStep::new(node.value, "Value Already Exists (Skipping)"));
    }

    node
}

fn delete_recursive(
    node: Option<Box<Node>>,
    value: i64,
    steps: &mut Vec<TreeStep>,
) -> Option<Box<Node>> {
    let mut node = match node {
        None => {
            steps.push(TreeStep::new(value, "Value Not Found"));
            return None;
        }
        Some(node) => node,
    };

    steps.push(TreeStep::new(node.value, "Visiting"));

    if value < node.value {
        node.left = delete_recursive(node.left.take(), value, steps);
        Some(node)
    } else if value > node.value {
        node.right = delete_recursive(node.right.take(), value, steps);
        Some(node)
    } else {
        steps.push(TreeStep::new(node.value, "Target Found"));

        match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (left, Some(right)) => {
                // Two children: promote the in-order successor's value and
                // delete it from the right subtree.
                let successor = right.min_value();
                node.value = successor;
                node.left = left;
                node.right = delete_recursive(Some(right), successor, steps);
                Some(node)
            }
        }
    }
}
