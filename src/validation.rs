//! Input validation for rotation and fitting queries.
//!
//! The search functions never fail: contract violations map to a defined
//! answer (index 0, or no fit). Callers that want to reject bad input
//! before searching can run these checks first. Detects:
//! - Empty name sequences and blank names
//! - Negative durations, targets, and counts
//! - Counts larger than the number of candidates

use thiserror::Error;

use crate::fit::exceeds_len;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The name sequence has no entries.
    EmptySequence,
    /// A name has no characters.
    EmptyName,
    /// A duration is below zero.
    NegativeDuration,
    /// The target total is below zero.
    NegativeTarget,
    /// The required count is below zero.
    NegativeCount,
    /// More items are required than there are candidates.
    CountExceedsLength,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a name sequence for rotation point search.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_names<S: AsRef<str>>(names: &[S]) -> ValidationResult {
    let mut errors = Vec::new();

    if names.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySequence,
            "Name sequence is empty",
        ));
    }

    for (idx, name) in names.iter().enumerate() {
        if name.as_ref().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Name at index {idx} is empty"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the inputs of an exact-count fitting query.
///
/// Checks:
/// 1. No negative durations
/// 2. Non-negative target
/// 3. Non-negative count
/// 4. Count no larger than the number of durations
pub fn validate_fit_request(durations: &[i64], target: i64, count: i64) -> ValidationResult {
    let mut errors = Vec::new();

    for (idx, &d) in durations.iter().enumerate() {
        if d < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                format!("Duration at index {idx} is negative: {d}"),
            ));
        }
    }

    if target < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeTarget,
            format!("Target is negative: {target}"),
        ));
    }

    if count < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeCount,
            format!("Count is negative: {count}"),
        ));
    } else if exceeds_len(count, durations.len()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::CountExceedsLength,
            format!(
                "Count {count} exceeds the {} available durations",
                durations.len()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
