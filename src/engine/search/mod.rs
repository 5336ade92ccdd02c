//! Search tracers.
//!
//! Both tracers stop as soon as the target is found, so trace length is
//! O(n) at worst rather than fixed. A search miss is a normal terminal
//! step (`found: false`), never an error.

mod binary;
mod linear;

pub use binary::binary_search_steps;
pub use linear::linear_search_steps;
