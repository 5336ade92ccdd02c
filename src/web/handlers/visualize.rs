//! Visualization handler: dispatches an algorithm name to its tracer.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::engine::{
    binary_search_steps, bubble_sort_steps, insertion_sort_steps, linear_search_steps,
    merge_sort_steps, quick_sort_steps, selection_sort_steps, shell_sort_steps, Algorithm,
};
use crate::web::error::WebError;

/// Request to trace one algorithm run.
#[derive(Debug, Deserialize)]
pub struct VisualizeRequest {
    pub algorithm: String,
    pub array: Option<Vec<i64>>,
    /// Required for search algorithms.
    pub target: Option<i64>,
}

/// Response carrying the full ordered trace. Generic over the step shape
/// because each tracer family has its own.
#[derive(Debug, Serialize)]
pub struct VisualizeResponse<S> {
    pub steps: Vec<S>,
}

fn trace<S: Serialize>(steps: Vec<S>) -> Response {
    Json(VisualizeResponse { steps }).into_response()
}

/// Run an algorithm and return its step trace.
///
/// Input contracts are enforced here, not in the tracers: the array must
/// be present and non-empty, search algorithms need a target, and binary
/// search gets its input sorted before tracing.
pub async fn visualize_algorithm(
    Json(request): Json<VisualizeRequest>,
) -> Result<Response, WebError> {
    let array = request
        .array
        .filter(|a| !a.is_empty())
        .ok_or_else(|| WebError::BadRequest("Invalid or missing 'array' in request.".to_string()))?;

    let algorithm = Algorithm::from_name(&request.algorithm)
        .ok_or_else(|| WebError::BadRequest(format!("Unsupported algorithm: {}", request.algorithm)))?;

    tracing::debug!(algorithm = algorithm.name(), len = array.len(), "Tracing algorithm");

    let response = match algorithm {
        Algorithm::BubbleSort => trace(bubble_sort_steps(&array)),
        Algorithm::InsertionSort => trace(insertion_sort_steps(&array)),
        Algorithm::SelectionSort => trace(selection_sort_steps(&array)),
        Algorithm::QuickSort => trace(quick_sort_steps(&array)),
        Algorithm::MergeSort => trace(merge_sort_steps(&array)),
        Algorithm::ShellSort => trace(shell_sort_steps(&array)),
        Algorithm::BinarySearch => {
            let target = require_target(request.target)?;
            // Binary search presumes non-decreasing order; sort on the
            // caller's behalf as the adapter contract requires.
            let mut sorted = array;
            sorted.sort_unstable();
            trace(binary_search_steps(&sorted, target))
        }
        Algorithm::LinearSearch => {
            let target = require_target(request.target)?;
            trace(linear_search_steps(&array, target))
        }
    };

    Ok(response)
}

fn require_target(target: Option<i64>) -> Result<i64, WebError> {
    target.ok_or_else(|| WebError::BadRequest("Missing 'target' in request.".to_string()))
}
