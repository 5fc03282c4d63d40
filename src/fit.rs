//! Exact-count duration fitting.
//!
//! Given movie running times, a flight length, and a number of movies to
//! watch, decide whether exactly that many distinct movies fill the flight
//! to the minute. This is subset-sum with a cardinality constraint.
//!
//! # Semantics
//! Candidates are selected by position, so equal durations are distinct
//! movies. Zero-length durations are legitimate, cost-free picks. A
//! negative target or count can never be met. Durations are expected to be
//! non-negative; a negative duration is never selected.
//!
//! # Strategies
//! - [`SearchStrategy::Recursive`]: include/exclude search from the last
//!   duration backward. Durations longer than the remaining target are
//!   only excluded. Stops at the first match.
//! - [`SearchStrategy::Table`]: reachability over (items chosen, sum),
//!   one duration at a time. No recursion.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 35.5 (Subset-Sum)

use tracing::debug;

use crate::models::SearchStrategy;

/// Whether exactly `count` of `durations` sum to `target`.
///
/// Uses [`SearchStrategy::Recursive`].
///
/// # Example
///
/// ```
/// use agenda_fit::fit::exists_exact_fit;
///
/// let movies = [30, 77, 120, 95, 45, 18, 25, 75, 118];
/// assert!(exists_exact_fit(&movies, 195, 2)); // 77 + 118
/// assert!(!exists_exact_fit(&movies, 195, 1));
/// ```
pub fn exists_exact_fit(durations: &[i64], target: i64, count: i64) -> bool {
    exists_exact_fit_with(durations, target, count, SearchStrategy::Recursive)
}

/// Whether exactly `count` of `durations` sum to `target`, evaluated with
/// the given strategy.
pub fn exists_exact_fit_with(
    durations: &[i64],
    target: i64,
    count: i64,
    strategy: SearchStrategy,
) -> bool {
    let found = if target < 0 || count < 0 || exceeds_len(count, durations.len()) {
        false
    } else {
        match strategy {
            SearchStrategy::Recursive => fits(durations, target, count),
            SearchStrategy::Table => fits_table(durations, target, count),
        }
    };

    debug!(
        len = durations.len(),
        target,
        count,
        ?strategy,
        found,
        "exact fit search finished"
    );
    found
}

/// Positions of one selection of exactly `count` durations summing to
/// `target`, in ascending order.
///
/// Explores candidates in the same order as the recursive search, so the
/// returned selection is the first one that search would reach.
/// Returns `None` when no selection exists.
pub fn find_exact_fit(durations: &[i64], target: i64, count: i64) -> Option<Vec<usize>> {
    if target < 0 || count < 0 || exceeds_len(count, durations.len()) {
        return None;
    }

    let mut picks = Vec::new();
    if !search(durations, target, count, &mut picks) {
        debug!(len = durations.len(), target, count, "no exact fit");
        return None;
    }

    // Picks are pushed while walking backward
    picks.reverse();
    debug!(?picks, target, count, "exact fit found");
    Some(picks)
}

/// Whether `count` items cannot be drawn from `len` candidates.
///
/// Negative counts also exceed every length.
pub(crate) fn exceeds_len(count: i64, len: usize) -> bool {
    usize::try_from(count).map_or(true, |c| c > len)
}

/// Include/exclude recursion over `durations`, consuming from the back.
fn fits(durations: &[i64], target: i64, count: i64) -> bool {
    search(durations, target, count, &mut Vec::new())
}

/// Recursive search that records the positions picked on the way to the
/// first match. `picks` is left holding that match, in descending order.
fn search(durations: &[i64], target: i64, count: i64, picks: &mut Vec<usize>) -> bool {
    if target == 0 && count == 0 {
        return true;
    }
    // Target 0 with picks left may still be met by zero-length durations
    if count <= 0 || target < 0 {
        return false;
    }
    let Some(idx) = durations.len().checked_sub(1) else {
        return false;
    };
    let last = durations[idx];
    let rest = &durations[..idx];

    if last < 0 || last > target {
        return search(rest, target, count, picks);
    }
    if search(rest, target, count, picks) {
        return true;
    }

    picks.push(idx);
    if search(rest, target - last, count - 1, picks) {
        return true;
    }
    picks.pop();
    false
}

/// Upper bound on reachability table cells before falling back to recursion.
const TABLE_CELL_LIMIT: usize = 1 << 24;

/// `reachable[k][s]`: some `k` of the durations seen so far sum to `s`.
fn fits_table(durations: &[i64], target: i64, count: i64) -> bool {
    let (Ok(target_idx), Ok(count_idx)) = (usize::try_from(target), usize::try_from(count)) else {
        return false;
    };

    let reachable_total = durations
        .iter()
        .filter(|&&d| d >= 0)
        .fold(0i64, |acc, &d| acc.saturating_add(d));
    if target > reachable_total {
        return false;
    }

    let cells = (count_idx + 1).checked_mul(target_idx.saturating_add(1));
    if cells.map_or(true, |c| c > TABLE_CELL_LIMIT) {
        debug!(target, count, "reachability table too large, using recursion");
        return fits(durations, target, count);
    }

    let mut reachable = vec![vec![false; target_idx + 1]; count_idx + 1];
    reachable[0][0] = true;

    for &duration in durations {
        let Ok(d) = usize::try_from(duration) else {
            continue;
        };
        if d > target_idx {
            continue;
        }
        // Descending so each duration is used at most once
        for k in (1..=count_idx).rev() {
            for s in (d..=target_idx).rev() {
                if reachable[k - 1][s - d] {
                    reachable[k][s] = true;
                }
            }
        }
    }

    reachable[count_idx][target_idx]
}
