//! HTTP request handlers for the stepviz web API.

pub mod array;
pub mod tree;
pub mod visualize;
