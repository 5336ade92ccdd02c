//! REST API route definitions.

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::handlers::{array, tree, visualize};
use crate::web::state::WebAppState;

/// Build the API router with all REST endpoints.
pub fn api_routes() -> Router<WebAppState> {
    Router::new()
        .route("/visualize", post(visualize::visualize_algorithm))
        .route("/array", get(array::generate_array))
        .route("/bst", post(tree::bst_operation))
}
