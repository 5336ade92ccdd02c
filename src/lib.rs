pub mod config;
pub mod engine;
pub mod tree;
pub mod util;
pub mod web;

pub use config::Config;
pub use engine::{
    binary_search_steps, bubble_sort_steps, insertion_sort_steps, linear_search_steps,
    merge_sort_steps, quick_sort_steps, selection_sort_steps, shell_sort_steps, Algorithm,
    BinaryStep, InsertionStep, LinearStep, QuickStep, SortStep, TreeStep,
};
pub use tree::{bst_steps, tree_from_value, tree_to_value, Node, TreeOp};
pub use web::{run_server, WebAppState, WebError};
