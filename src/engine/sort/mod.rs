//! Sorting tracers.
//!
//! Each tracer sorts a private copy of its input and records a step at
//! every comparison, swap, shift, and placement. The final step's array is
//! always the input in non-decreasing order (shell sort excepted, which is
//! an explicit unsupported-algorithm sentinel).

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;
mod shell;

pub use bubble::bubble_sort_steps;
pub use insertion::insertion_sort_steps;
pub use merge::merge_sort_steps;
pub use quick::quick_sort_steps;
pub use selection::selection_sort_steps;
pub use shell::shell_sort_steps;
