//! # Sorting Algorithms and Registry
//!
//! The harness treats algorithms as interchangeable units under test: anything
//! with the [`SortFn`] shape qualifies, no shared base type required. The
//! [`SortRegistry`] maps display names to functions and preserves registration
//! order, which in turn fixes the row order of the results table.
//!
//! All reference implementations are generic over `T: Ord + Clone`, rely only
//! on the total ordering of the elements, never mutate their input, and return
//! a freshly allocated sorted vector.

use crate::cli::AlgorithmKind;
use anyhow::{bail, Result};

pub mod bubble;
pub mod merge;
pub mod selection;

pub use bubble::bubble_sort;
pub use merge::{merge_sort, merge_sort_iter};
pub use selection::selection_sort;

/// A sorting algorithm under test: a pure function from a borrowed slice to a
/// new sorted vector holding the same multiset of elements.
pub type SortFn = fn(&[u64]) -> Vec<u64>;

/// Baseline subject backed by the standard library's unstable sort.
///
/// Included so the handwritten algorithms can be compared against an
/// optimized reference in the same table.
pub fn std_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut out = input.to_vec();
    out.sort_unstable();
    out
}

/// Ordered mapping from algorithm display name to sorting function.
///
/// Registration order is preserved; it drives the iteration order of the
/// benchmark matrix and therefore the row order of the report. Registering a
/// new algorithm requires no change to any other component.
pub struct SortRegistry {
    entries: Vec<(String, SortFn)>,
}

impl SortRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a registry from CLI algorithm selections, in the given order.
    ///
    /// The `all` convenience variant is expanded first.
    pub fn from_kinds(kinds: &[AlgorithmKind]) -> Result<Self> {
        let mut registry = Self::new();
        for kind in AlgorithmKind::expand_all(kinds.to_vec()) {
            let algorithm: SortFn = match kind {
                AlgorithmKind::Std => std_sort::<u64>,
                AlgorithmKind::Selection => selection_sort::<u64>,
                AlgorithmKind::Merge => merge_sort::<u64>,
                AlgorithmKind::MergeIter => merge_sort_iter::<u64>,
                AlgorithmKind::Bubble => bubble_sort::<u64>,
                // expand_all never yields All; nothing to register for it
                AlgorithmKind::All => continue,
            };
            registry.register(kind.to_string(), algorithm)?;
        }
        if registry.is_empty() {
            bail!("No algorithms selected");
        }
        Ok(registry)
    }

    /// Register an algorithm under a display name.
    ///
    /// Names must be unique; a duplicate would silently shadow a row in the
    /// results table, so it is rejected instead.
    pub fn register(&mut self, name: impl Into<String>, algorithm: SortFn) -> Result<()> {
        let name = name.into();
        if self.entries.iter().any(|(existing, _)| *existing == name) {
            bail!("Algorithm '{}' is already registered", name);
        }
        self.entries.push((name, algorithm));
        Ok(())
    }

    /// Iterate over `(name, function)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, SortFn)> {
        self.entries.iter().map(|(name, f)| (name.as_str(), *f))
    }

    /// Look up an algorithm by name
    pub fn get(&self, name: &str) -> Option<SortFn> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, f)| *f)
    }

    /// Registered names, in registration order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SortRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kinds_preserves_selection_order() {
        let registry =
            SortRegistry::from_kinds(&[AlgorithmKind::Bubble, AlgorithmKind::Selection]).unwrap();
        assert_eq!(registry.names(), vec!["bubble", "selection"]);
    }

    #[test]
    fn test_from_kinds_expands_all() {
        let registry = SortRegistry::from_kinds(&[AlgorithmKind::All]).unwrap();
        assert_eq!(
            registry.names(),
            vec!["std", "selection", "merge", "merge-iter", "bubble"]
        );
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = SortRegistry::new();
        registry.register("custom", std_sort::<u64>).unwrap();
        assert!(registry.register("custom", bubble_sort::<u64>).is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_selection_rejected() {
        assert!(SortRegistry::from_kinds(&[]).is_err());
    }

    #[test]
    fn test_registered_function_is_callable_by_name() {
        let registry = SortRegistry::from_kinds(&[AlgorithmKind::Merge]).unwrap();
        let merge = registry.get("merge").unwrap();
        assert_eq!(merge(&[3, 1, 2]), vec![1, 2, 3]);
        assert!(registry.get("bubble").is_none());
    }

    #[test]
    fn test_std_sort_contract() {
        assert_eq!(std_sort::<u64>(&[]), Vec::<u64>::new());
        assert_eq!(std_sort(&[5, 3, 5, 1]), vec![1, 3, 5, 5]);
    }
}
