//! Random array generation for the visualization front end.

use axum::extract::{Query, State};
use axum::Json;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::web::state::WebAppState;

/// Query parameters for array generation.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateArrayParams {
    pub size: Option<usize>,
    pub max_val: Option<i64>,
}

/// Response carrying the generated array.
#[derive(Debug, Serialize)]
pub struct ArrayResponse {
    pub array: Vec<i64>,
}

/// Generate a random array of integers in `1..=max_val`.
///
/// Out-of-range sizes and invalid bounds fall back to the configured
/// defaults rather than erroring, so the front end always gets an array.
pub async fn generate_array(
    State(state): State<WebAppState>,
    Query(params): Query<GenerateArrayParams>,
) -> Json<ArrayResponse> {
    let config = &state.config().array_gen;

    let mut size = params.size.unwrap_or(config.default_size);
    if size < 1 || size > config.max_size {
        size = config.default_size;
    }

    let mut max_val = params.max_val.unwrap_or(config.default_max_value);
    if max_val < 1 {
        max_val = config.default_max_value;
    }

    let mut rng = rand::rng();
    let array: Vec<i64> = (0..size).map(|_| rng.random_range(1..=max_val)).collect();

    Json(ArrayResponse { array })
}
