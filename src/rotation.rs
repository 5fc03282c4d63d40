//! Rotation point detection in a wrapped agenda.
//!
//! A guest list is built by starting somewhere in the middle of an
//! alphabetically sorted phone agenda, walking to the end, then wrapping
//! around to the beginning. The result is two sorted runs back to back.
//! The rotation point is the index where the second run starts.
//!
//! # Algorithm
//! Linear scan over adjacent pairs. The first pair whose second name sorts
//! strictly before the first one (case-insensitively, at the configured
//! [`ComparisonMode`] depth) marks the rotation. A list with no such pair
//! has its rotation point at the start.
//!
//! # Example
//!
//! ```
//! use agenda_fit::rotation::find_rotation_point;
//! use agenda_fit::models::ComparisonMode;
//!
//! let names = ["Noah", "Pamela", "Sandra", "Salima", "Adam", "Bridget"];
//! assert_eq!(find_rotation_point(&names, ComparisonMode::Shallow), 4);
//! assert_eq!(find_rotation_point(&names, ComparisonMode::Deep), 3);
//! ```

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::models::ComparisonMode;

/// Returns the index at which the second sorted run begins.
///
/// Returns 0 when the sequence is empty, has a single name, or is
/// already in order under `mode`.
pub fn find_rotation_point<S: AsRef<str>>(names: &[S], mode: ComparisonMode) -> usize {
    let point = names
        .windows(2)
        .position(|pair| is_lower(pair[0].as_ref(), pair[1].as_ref(), mode))
        .map_or(0, |i| i + 1);

    debug!(len = names.len(), ?mode, point, "rotation point search finished");
    point
}

/// Whether `next` sorts strictly before `previous`.
///
/// Characters are folded to uppercase before their code points are
/// compared. Identical names are never lower than each other.
///
/// - [`ComparisonMode::Shallow`]: only the first character counts. An empty
///   name has no first character and sorts before any non-empty one.
/// - [`ComparisonMode::Deep`]: the first differing character decides; when
///   one name is a prefix of the other, the shorter one sorts first.
pub fn is_lower(previous: &str, next: &str, mode: ComparisonMode) -> bool {
    let ordering = match mode {
        ComparisonMode::Shallow => folded(first_char(next)).cmp(folded(first_char(previous))),
        ComparisonMode::Deep => folded(next).cmp(folded(previous)),
    };

    trace!(previous, next, ?mode, ?ordering, "compared names");
    ordering == Ordering::Less
}

fn first_char(name: &str) -> &str {
    name.chars()
        .next()
        .map_or("", |c| &name[..c.len_utf8()])
}

fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agenda() -> Vec<&'static str> {
        vec![
            "George", "Gregory", "Hugo", "James", "Julia", "Lara", "Noah", "Pamela", "Paul",
            "Pauline", "Sandra", "Salima", "Tudor", "Adam", "Alesia", "Bridget", "Charlie",
            "Celine", "Diane", "Fabio",
        ]
    }

    #[test]
    fn test_agenda_shallow() {
        // "Tudor" → "Adam" is the first first-letter descent
        assert_eq!(find_rotation_point(&agenda(), ComparisonMode::Shallow), 13);
    }

    #[test]
    fn test_agenda_deep() {
        // "Sandra" → "Salima" descends at the third letter
        assert_eq!(find_rotation_point(&agenda(), ComparisonMode::Deep), 11);
    }

    #[test]
    fn test_empty_and_single() {
        let empty: [&str; 0] = [];
        assert_eq!(find_rotation_point(&empty, ComparisonMode::Shallow), 0);
        assert_eq!(find_rotation_point(&empty, ComparisonMode::Deep), 0);
        assert_eq!(find_rotation_point(&["Zoe"], ComparisonMode::Deep), 0);
    }

    #[test]
    fn test_sorted_has_no_rotation() {
        let names = ["adam", "Bridget", "celine", "Diane", "fabio"];
        assert_eq!(find_rotation_point(&names, ComparisonMode::Shallow), 0);
        assert_eq!(find_rotation_point(&names, ComparisonMode::Deep), 0);
    }

    #[test]
    fn test_rotated_sorted_list() {
        let sorted = ["Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace"];
        for k in 1..sorted.len() {
            let mut names = sorted.to_vec();
            names.rotate_left(k);
            // Rotating left by k leaves the original start at len - k
            let expected = sorted.len() - k;
            assert_eq!(find_rotation_point(&names, ComparisonMode::Deep), expected);
            assert_eq!(find_rotation_point(&names, ComparisonMode::Shallow), expected);
        }
    }

    #[test]
    fn test_case_folding_invariance() {
        let names = agenda();
        let upper: Vec<String> = names.iter().map(|n| n.to_uppercase()).collect();
        let lower: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
        for mode in [ComparisonMode::Shallow, ComparisonMode::Deep] {
            let expected = find_rotation_point(&names, mode);
            assert_eq!(find_rotation_point(&upper, mode), expected);
            assert_eq!(find_rotation_point(&lower, mode), expected);
        }
    }

    #[test]
    fn test_mixed_case_pair_is_not_a_descent() {
        assert!(!is_lower("alice", "Bob", ComparisonMode::Shallow));
        assert!(!is_lower("alice", "Bob", ComparisonMode::Deep));
        assert!(is_lower("bob", "Alice", ComparisonMode::Shallow));
    }

    #[test]
    fn test_identical_names_never_lower() {
        for mode in [ComparisonMode::Shallow, ComparisonMode::Deep] {
            assert!(!is_lower("Paul", "Paul", mode));
            assert!(!is_lower("paul", "PAUL", mode));
            assert!(!is_lower("", "", mode));
        }
        let names = ["Ann", "Ann", "ann"];
        assert_eq!(find_rotation_point(&names, ComparisonMode::Deep), 0);
    }

    #[test]
    fn test_shallow_ignores_rest_of_name() {
        assert!(!is_lower("Sandra", "Salima", ComparisonMode::Shallow));
        assert!(!is_lower("Pauline", "Paul", ComparisonMode::Shallow));
        assert!(is_lower("Sandra", "Salima", ComparisonMode::Deep));
    }

    #[test]
    fn test_deep_prefix_ordering() {
        // The name exhausted first sorts earlier
        assert!(!is_lower("Paul", "Pauline", ComparisonMode::Deep));
        assert!(is_lower("Pauline", "Paul", ComparisonMode::Deep));
    }

    #[test]
    fn test_empty_name_sorts_first() {
        for mode in [ComparisonMode::Shallow, ComparisonMode::Deep] {
            assert!(is_lower("Adam", "", mode));
            assert!(!is_lower("", "Adam", mode));
        }
    }

    #[test]
    fn test_non_ascii_names() {
        assert!(is_lower("Émile", "éclair", ComparisonMode::Deep));
        assert!(!is_lower("éclair", "Émile", ComparisonMode::Deep));
        // 'Ä' folds above 'Z' in code point order
        assert!(!is_lower("Zoë", "Ärger", ComparisonMode::Shallow));
        assert!(is_lower("ärger", "Zoë", ComparisonMode::Shallow));
    }

    #[test]
    fn test_owned_strings_accepted() {
        let names: Vec<String> = vec!["Tudor".into(), "Adam".into()];
        assert_eq!(find_rotation_point(&names, ComparisonMode::Shallow), 1);
    }
}
