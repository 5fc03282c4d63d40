//! Fit request model.
//!
//! A self-contained description of one "pick exactly N durations"
//! question: a flight of `target` minutes and `count` movies to fill it.

use serde::{Deserialize, Serialize};

use super::SearchStrategy;
use crate::fit;
use crate::validation::{validate_fit_request, ValidationResult};

/// An exact-count fitting question.
///
/// # Time Representation
/// Durations and the target share one unit (minutes in the
/// in-flight entertainment setting). Positions are distinct candidates:
/// two equal durations are two different movies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitRequest {
    /// Candidate durations.
    pub durations: Vec<i64>,
    /// Total the chosen durations must sum to.
    pub target: i64,
    /// Exact number of durations to choose.
    pub count: i64,
    /// Evaluation strategy.
    #[serde(default)]
    pub strategy: SearchStrategy,
}

impl FitRequest {
    /// Number of items chosen when none is specified.
    pub const DEFAULT_COUNT: i64 = 2;

    /// Creates a request for `target` using the default count of two.
    pub fn new(target: i64) -> Self {
        Self {
            durations: Vec::new(),
            target,
            count: Self::DEFAULT_COUNT,
            strategy: SearchStrategy::default(),
        }
    }

    /// Sets the candidate durations.
    pub fn with_durations(mut self, durations: impl Into<Vec<i64>>) -> Self {
        self.durations = durations.into();
        self
    }

    /// Adds one candidate duration.
    pub fn with_duration(mut self, duration: i64) -> Self {
        self.durations.push(duration);
        self
    }

    /// Sets the exact number of durations to choose.
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Sets the evaluation strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Checks the request against the input contract.
    pub fn validate(&self) -> ValidationResult {
        validate_fit_request(&self.durations, self.target, self.count)
    }

    /// Whether some `count` durations sum exactly to `target`.
    pub fn solve(&self) -> bool {
        fit::exists_exact_fit_with(&self.durations, self.target, self.count, self.strategy)
    }

    /// Positions of one qualifying selection, if any.
    pub fn selection(&self) -> Option<Vec<usize>> {
        fit::find_exact_fit(&self.durations, self.target, self.count)
    }
}
