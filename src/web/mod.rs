//! Axum web adapter around the trace engine.
//!
//! The adapter owns request validation, algorithm dispatch, and CORS; the
//! engine itself is pure and does not re-validate inputs.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::WebError;
pub use server::{build_router, run_server};
pub use state::WebAppState;
