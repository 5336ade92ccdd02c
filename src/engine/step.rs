//! Step schemas for the tracer families.
//!
//! A step is an immutable point-in-time snapshot of one observable action.
//! Each tracer family has its own fixed field set; the field names are the
//! wire contract consumed by the visualization front end, so they must not
//! change shape between releases. Every step carries an independent copy of
//! the working array at the moment it was emitted.

use serde::{Deserialize, Serialize};

/// Step shape shared by the bubble, selection, merge, and shell tracers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortStep {
    pub array: Vec<i64>,
    pub highlight_indices: Vec<usize>,
    pub action: String,
}

impl SortStep {
    pub fn new(array: &[i64], highlight_indices: Vec<usize>, action: impl Into<String>) -> Self {
        Self {
            array: array.to_vec(),
            highlight_indices,
            action: action.into(),
        }
    }
}

/// Step shape for the insertion sort tracer.
///
/// `pivot_index` is the index of the key currently being inserted, or -1
/// when no key is in flight. `sorted_until` is the exclusive end of the
/// prefix known to be sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertionStep {
    pub array: Vec<i64>,
    pub highlighted_indices: Vec<usize>,
    pub pivot_index: i64,
    pub status: String,
    pub sorted_until: usize,
}

/// Step shape for the quick sort tracer.
///
/// `boundary_left`/`boundary_right` delimit the active partition range and
/// are reset to -1 once a pivot reaches its final position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickStep {
    pub array: Vec<i64>,
    pub action: String,
    pub indices: Vec<usize>,
    pub pivot_index: i64,
    pub boundary_left: i64,
    pub boundary_right: i64,
}

/// Step shape for the binary search tracer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryStep {
    pub array: Vec<i64>,
    pub action: String,
    pub indices: Vec<usize>,
    pub low: i64,
    pub high: i64,
    pub mid: i64,
    pub found: bool,
}

/// Step shape for the linear search tracer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearStep {
    pub array: Vec<i64>,
    pub action: String,
    pub indices: Vec<usize>,
    pub current_index: i64,
    pub found: bool,
}

/// Step shape for binary search tree operations.
///
/// `path` is carried for wire compatibility with the front end and is
/// currently always empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeStep {
    pub value: i64,
    pub action: String,
    pub path: Vec<i64>,
}

impl TreeStep {
    pub fn new(value: i64, action: impl Into<String>) -> Self {
        Self {
            value,
            action: action.into(),
            path: Vec::new(),
        }
    }
}
