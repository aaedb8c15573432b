//! Input validation for scheduling problems.
//!
//! Checks structural integrity of the build type list before solving.
//! Detects:
//! - Empty type list
//! - Zero durations (a zero-length build would never advance time)
//!
//! Label content is unconstrained: labels are grouping keys for statistics,
//! not identities, so duplicates (and even blank labels) simply merge in the
//! summary counts.

use crate::models::BuildType;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No build types were supplied.
    EmptyTypeList,
    /// A build type has duration zero.
    ZeroDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the build type list for a solve.
///
/// Checks:
/// 1. At least one build type is present
/// 2. Every duration is >= 1
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(types: &[BuildType]) -> ValidationResult {
    let mut errors = Vec::new();

    if types.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTypeList,
            "At least one build type is required",
        ));
    }

    for (i, t) in types.iter().enumerate() {
        if t.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Build type #{i} ('{}') has duration 0", t.label),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
