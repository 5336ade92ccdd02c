//! Binary search tree engine.
//!
//! The tree is rebuilt from a client-supplied serialized form at the start
//! of every operation and re-serialized at the end; the server never keeps
//! tree identity across calls. Callers round-trip the serialized state as
//! their session.

mod node;
mod ops;

pub use node::{tree_from_value, tree_to_value, Node};
pub use ops::{bst_steps, TreeOp};
