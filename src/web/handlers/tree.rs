//! Binary search tree handler: one stateless session round trip.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::TreeStep;
use crate::tree::{bst_steps, TreeOp};
use crate::web::error::WebError;

/// Request for one tree operation. `tree_state` is the serialized tree the
/// client got back from the previous call, or absent for a fresh tree.
#[derive(Debug, Deserialize)]
pub struct BstRequest {
    pub operation: String,
    pub value: Option<i64>,
    pub tree_state: Option<Value>,
}

/// Response carrying the trace and the new serialized tree state the
/// client must echo back on the next call.
#[derive(Debug, Serialize)]
pub struct BstResponse {
    pub steps: Vec<TreeStep>,
    pub new_tree_state_dict: Value,
}

/// Apply an insert or delete to the client-held tree state.
pub async fn bst_operation(Json(request): Json<BstRequest>) -> Result<Json<BstResponse>, WebError> {
    let op = TreeOp::from_name(&request.operation)
        .ok_or_else(|| WebError::BadRequest("Operation must be 'insert' or 'delete'".to_string()))?;

    let value = request
        .value
        .ok_or_else(|| WebError::BadRequest("Missing 'value' in request".to_string()))?;

    let (steps, new_state) = bst_steps(request.tree_state.as_ref(), op, value);

    tracing::info!(
        operation = %request.operation,
        value,
        root = %new_state.get("value").cloned().unwrap_or(serde_json::Value::Null),
        "BST operation applied"
    );

    Ok(Json(BstResponse {
        steps,
        new_tree_state_dict: new_state,
    }))
}
