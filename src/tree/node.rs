//! Tree representation and (de)serialization.

use serde::Serialize;
use serde_json::Value;

/// A binary search tree node. Each node exclusively owns its children; an
/// absent child is `None`, which serializes to JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub value: i64,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    pub fn leaf(value: i64) -> Box<Node> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    /// Smallest value in this subtree (the leftmost node). Used as the
    /// in-order successor when deleting a two-child node.
    pub fn min_value(&self) -> i64 {
        let mut current = self;
        while let Some(left) = &current.left {
            current = left;
        }
        current.value
    }

    /// In-order traversal of the subtree values. With the BST ordering
    /// invariant intact this is always non-decreasing.
    pub fn in_order(&self) -> Vec<i64> {
        let mut values = Vec::new();
        collect_in_order(Some(self), &mut values);
        values
    }
}

fn collect_in_order(node: Option<&Node>, values: &mut Vec<i64>) {
    if let Some(node) = node {
        collect_in_order(node.left.as_deref(), values);
        values.push(node.value);
        collect_in_order(node.right.as_deref(), values);
    }
}

/// Rebuild a tree from its serialized form.
///
/// Absent or `null` input is an empty tree. A node that is not an object
/// or has no integer `value` field degrades to an empty subtree instead of
/// failing; the degradation is logged so malformed client state is at
/// least visible.
pub fn tree_from_value(value: Option<&Value>) -> Option<Box<Node>> {
    let map = match value {
        None | Some(Value::Null) => return None,
        Some(Value::Object(map)) => map,
        Some(other) => {
            tracing::warn!("Malformed tree node (expected object, got {}); treating as empty", other);
            return None;
        }
    };

    let node_value = match map.get("value").and_then(Value::as_i64) {
        Some(v) => v,
        None => {
            tracing::warn!("Malformed tree node (missing integer 'value'); treating as empty");
            return None;
        }
    };

    Some(Box::new(Node {
        value: node_value,
        left: tree_from_value(map.get("left")),
        right: tree_from_value(map.get("right")),
    }))
}

/// Serialize a tree back to the wire shape. An empty tree is JSON `null`.
pub fn tree_to_value(root: Option<&Node>) -> Value {
    match root {
        Some(node) => serde_json::to_value(node).unwrap_or(Value::Null),
        None => Value::Null,
    }
}
