//! Field rules for item create/update requests
//!
//! Two rules apply to both request kinds:
//! - `name` must not be empty (code `required`)
//! - `price` must be greater than zero (code `out_of_range`)
//!
//! Validation is pure: it never touches storage.

use rust_decimal::Decimal;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError, ValidationErrors};

/// Code reported when a required field is empty
pub const REQUIRED: &str = "required";

/// Code reported when a value falls outside its allowed range
pub const OUT_OF_RANGE: &str = "out_of_range";

/// Field-level violations for a rejected request, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationProblem {
    /// Messages for each rejected field, in field-name order
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationProblem {
    /// Whether the given field has at least one violation
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }
}

impl std::fmt::Display for ValidationProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl From<ValidationErrors> for ValidationProblem {
    fn from(errors: ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .into_iter()
            .map(|(field, violations)| {
                let messages = violations
                    .iter()
                    .map(|v| {
                        v.message
                            .as_ref()
                            .map_or_else(|| v.code.to_string(), |m| m.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        Self { errors }
    }
}

/// Run the request's rules, returning every violation at once
pub fn check<T: Validate>(request: &T) -> Result<(), ValidationProblem> {
    request.validate().map_err(ValidationProblem::from)
}

/// Name must contain something other than whitespace
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(violation(REQUIRED, "'name' must not be empty."));
    }
    Ok(())
}

/// Price must be strictly positive
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(violation(OUT_OF_RANGE, "'price' must be greater than '0'."));
    }
    Ok(())
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CreateItem, UpdateItem};
    use proptest::prelude::*;

    #[test]
    fn valid_create_request_passes() {
        let request = CreateItem::new("Nike", "Pure White", Decimal::from(98));
        assert!(check(&request).is_ok());
    }

    #[test]
    fn empty_description_is_allowed() {
        let request = UpdateItem::new("Nike", "", Decimal::from(98));
        assert!(check(&request).is_ok());
    }

    #[test]
    fn empty_name_is_required() {
        let problem = check(&CreateItem::new("", "Pure White", Decimal::from(98))).unwrap_err();

        assert!(problem.has_field("name"));
        assert!(!problem.has_field("price"));
        assert_eq!(problem.errors["name"], vec!["'name' must not be empty."]);
    }

    #[test]
    fn whitespace_name_is_required() {
        let problem = check(&UpdateItem::new("   ", "", Decimal::from(1))).unwrap_err();
        assert!(problem.has_field("name"));
    }

    #[test]
    fn zero_price_is_out_of_range() {
        let problem = check(&UpdateItem::new("Nike", "", Decimal::ZERO)).unwrap_err();

        assert!(problem.has_field("price"));
        assert_eq!(problem.errors["price"], vec!["'price' must be greater than '0'."]);
    }

    #[test]
    fn all_violations_are_reported_together() {
        let problem = check(&CreateItem::default()).unwrap_err();

        assert!(problem.has_field("name"));
        assert!(problem.has_field("price"));
        assert_eq!(problem.to_string(), "invalid fields: name, price");
    }

    #[test]
    fn rule_codes() {
        assert_eq!(validate_name("").unwrap_err().code, REQUIRED);
        assert_eq!(validate_price(&Decimal::NEGATIVE_ONE).unwrap_err().code, OUT_OF_RANGE);
    }

    proptest! {
        #[test]
        fn non_positive_prices_are_rejected(cents in i64::MIN / 2..=0i64) {
            let request = CreateItem::new("Nike", "Pure White", Decimal::new(cents, 2));
            let problem = check(&request).unwrap_err();
            prop_assert!(problem.has_field("price"));
            prop_assert!(!problem.has_field("name"));
        }

        #[test]
        fn positive_prices_with_names_are_accepted(
            name in "[a-zA-Z][a-zA-Z0-9 ]{0,30}",
            cents in 1i64..10_000_000,
        ) {
            let request = UpdateItem::new(name, "", Decimal::new(cents, 2));
            prop_assert!(check(&request).is_ok());
        }

        #[test]
        fn blank_names_are_rejected(name in "[ \t]{0,8}", cents in 1i64..10_000) {
            let request = CreateItem::new(name, "", Decimal::new(cents, 2));
            let problem = check(&request).unwrap_err();
            prop_assert!(problem.has_field("name"));
        }
    }
}
