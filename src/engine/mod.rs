//! Instrumented algorithm execution.
//!
//! Each tracer runs its algorithm against a private copy of the input and
//! returns the full, ordered list of steps instead of just the result. The
//! trace is materialized in full before being returned; there is no
//! streaming or suspension, and identical inputs always produce identical
//! traces.

pub mod search;
pub mod sort;
pub mod step;

pub use search::{binary_search_steps, linear_search_steps};
pub use sort::{
    bubble_sort_steps, insertion_sort_steps, merge_sort_steps, quick_sort_steps,
    selection_sort_steps, shell_sort_steps,
};
pub use step::{BinaryStep, InsertionStep, LinearStep, QuickStep, SortStep, TreeStep};

/// The algorithms the engine can trace, keyed by the exact display names
/// the front end sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BubbleSort,
    InsertionSort,
    SelectionSort,
    QuickSort,
    MergeSort,
    ShellSort,
    BinarySearch,
    LinearSearch,
}

impl Algorithm {
    /// Resolve a display name to an algorithm. Names are matched exactly.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Bubble Sort" => Some(Self::BubbleSort),
            "Insertion Sort" => Some(Self::InsertionSort),
            "Selection Sort" => Some(Self::SelectionSort),
            "Quick Sort" => Some(Self::QuickSort),
            "Merge Sort" => Some(Self::MergeSort),
            "Shell Sort" => Some(Self::ShellSort),
            "Binary Search" => Some(Self::BinarySearch),
            "Linear Search" => Some(Self::LinearSearch),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BubbleSort => "Bubble Sort",
            Self::InsertionSort => "Insertion Sort",
            Self::SelectionSort => "Selection Sort",
            Self::QuickSort => "Quick Sort",
            Self::MergeSort => "Merge Sort",
            Self::ShellSort => "Shell Sort",
            Self::BinarySearch => "Binary Search",
            Self::LinearSearch => "Linear Search",
        }
    }

    /// Search algorithms require a `target` in the request.
    pub fn is_search(&self) -> bool {
        matches!(self, Self::BinarySearch | Self::LinearSearch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips() {
        for algo in [
            Algorithm::BubbleSort,
            Algorithm::InsertionSort,
            Algorithm::SelectionSort,
            Algorithm::QuickSort,
            Algorithm::MergeSort,
            Algorithm::ShellSort,
            Algorithm::BinarySearch,
            Algorithm::LinearSearch,
        ] {
            assert_eq!(Algorithm::from_name(algo.name()), Some(algo));
        }
    }

    #[test]
    fn test_from_name_is_exact_match() {
        assert_eq!(Algorithm::from_name("bubble sort"), None);
        assert_eq!(Algorithm::from_name("Heap Sort"), None);
        assert_eq!(Algorithm::from_name(""), None);
    }

    #[test]
    fn test_is_search() {
        assert!(Algorithm::BinarySearch.is_search());
        assert!(Algorithm::LinearSearch.is_search());
        assert!(!Algorithm::QuickSort.is_search());
    }
}
