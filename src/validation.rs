//! Input validation for mentoring rosters.
//!
//! Checks structural integrity of mentors, startups, and time slots
//! before scheduling. Detects:
//! - Blank mentor or startup names
//! - Duplicate names within a roster
//! - Startups without a sector
//! - Repeated time-slot tokens
//!
//! Every issue is collected; the scheduler refuses to run if any is found.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Mentor, Startup, TimeSlot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entries in the same roster share a name.
    DuplicateName,
    /// A mentor or startup has an empty name.
    BlankName,
    /// A startup has no sector.
    MissingSector,
    /// The same slot token appears more than once.
    DuplicateTimeSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the rosters and slot sequence for a scheduling run.
///
/// Checks:
/// 1. Every mentor has a non-blank, unique name
/// 2. Every startup has a non-blank, unique name
/// 3. Every startup has a non-blank sector
/// 4. No time slot token repeats
///
/// Exclusions are not considered: the full rosters must be well-formed.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    mentors: &[Mentor],
    startups: &[Startup],
    time_slots: &[TimeSlot],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut mentor_names = HashSet::new();
    for (i, m) in mentors.iter().enumerate() {
        if m.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                format!("Mentor at row {} has a blank name", i + 1),
            ));
        } else if !mentor_names.insert(m.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate mentor name: {}", m.name),
            ));
        }
    }

    let mut startup_names = HashSet::new();
    for (i, s) in startups.iter().enumerate() {
        if s.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                format!("Startup at row {} has a blank name", i + 1),
            ));
        } else if !startup_names.insert(s.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate startup name: {}", s.name),
            ));
        }

        if s.sector.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingSector,
                format!("Startup '{}' has no sector", s.name),
            ));
        }
    }

    let mut slot_labels = HashSet::new();
    for slot in time_slots {
        if !slot_labels.insert(slot.label()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTimeSlot,
                format!("Duplicate time slot: {slot}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
