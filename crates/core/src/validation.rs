//! Field validation helpers shared by request payloads.
//!
//! Payload structs declare their constraints with `#[derive(Validate)]`;
//! this module supplies the custom checks the derive cannot express and
//! flattens `validator`'s nested error map into a flat, ordered list that
//! can be returned to clients.

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// A single failed constraint on a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Reject strings that are empty or contain only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Flatten a `ValidationErrors` map into violations sorted by field.
///
/// Errors without a message fall back to their constraint code so the
/// client always gets something readable.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid ({})", e.code));
                FieldViolation::new(field.clone(), message)
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    violations
}

/// Run the declared constraints on `input`, mapping failures to
/// [`CoreError::Validation`].
pub fn validate<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(collect_violations(&errors)))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(
            custom(function = "not_blank", message = "Label is required"),
            length(min = 2, max = 5, message = "Label must be between 2 and 5 characters")
        )]
        label: String,
    }

    fn sample(label: &str) -> Sample {
        Sample {
            label: label.to_string(),
        }
    }

    #[test]
    fn not_blank_rejects_whitespace() {
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
        assert!(not_blank(" a ").is_ok());
    }

    #[test]
    fn valid_input_passes() {
        assert!(validate(&sample("abc")).is_ok());
    }

    #[test]
    fn blank_input_reports_required() {
        let err = validate(&sample("   ")).unwrap_err();
        assert_matches!(err, CoreError::Validation(violations) => {
            assert_eq!(violations, vec![FieldViolation::new("label", "Label is required")]);
        });
    }

    #[test]
    fn empty_input_reports_both_constraints() {
        let err = validate(&sample("")).unwrap_err();
        assert_matches!(err, CoreError::Validation(violations) => {
            assert_eq!(violations.len(), 2);
            assert!(violations.iter().all(|v| v.field == "label"));
        });
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Five two-byte characters fit a max of five.
        assert!(validate(&sample("ééééé")).is_ok());
        assert!(validate(&sample("éééééé")).is_err());
    }
}
