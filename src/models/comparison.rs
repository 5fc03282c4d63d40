//! Name comparison depth.
//!
//! Selects how two adjacent agenda names are ordered when searching
//! for a rotation point. Passed explicitly to the finder instead of
//! living in process-wide state.

use serde::{Deserialize, Serialize};

/// How much of each name participates in the ordering comparison.
///
/// Both modes fold case before comparing code points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    /// Only the first character is compared. Names sharing a first
    /// character are never considered out of order.
    #[default]
    Shallow,
    /// Full names are compared character by character. A name that is
    /// exhausted first sorts earlier.
    Deep,
}

impl ComparisonMode {
    /// Mode from a boolean "in depth" toggle, such as a `-d` command-line flag.
    ///
    /// ```
    /// use agenda_fit::{find_rotation_point, ComparisonMode};
    ///
    /// let names = ["Sandra", "Salima", "Tudor", "Adam"];
    /// assert_eq!(find_rotation_point(&names, ComparisonMode::from_deep(false)), 3);
    /// assert_eq!(find_rotation_point(&names, ComparisonMode::from_deep(true)), 1);
    /// ```
    pub fn from_deep(deep: bool) -> Self {
        if deep {
            Self::Deep
        } else {
            Self::Shallow
        }
    }
}
