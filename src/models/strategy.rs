//! Search strategy for exact-count duration fitting.

use serde::{Deserialize, Serialize};

/// Evaluation strategy for [`crate::fit::exists_exact_fit_with`].
///
/// Both strategies return identical answers; they differ only in
/// resource usage.
///
/// | Strategy | Time | Extra memory | Stack |
/// |----------|------|--------------|-------|
/// | `Recursive` | O(2^n) worst case | O(1) | O(n) |
/// | `Table` | O(n · count · target) | O(count · target) | O(1) |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Include/exclude recursion from the last duration backward,
    /// pruning durations larger than the remaining target.
    #[default]
    Recursive,
    /// Reachability table indexed by (items chosen, sum), filled one
    /// duration at a time.
    Table,
}
