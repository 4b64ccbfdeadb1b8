use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::ApiError;

pub mod rules;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-]{5,19}$").expect("phone regex"));

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presence {
    Required,
    Optional,
}

#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Non-empty string after trimming
    NotEmpty,
    Email,
    MinLen(usize),
    Phone,
    /// Any JSON number
    Numeric,
    /// Number >= 0
    NonNegativeNumber,
    /// Integer > 0 (fractional values fail)
    PositiveInt,
    /// Integer >= 0
    NonNegativeInt,
    NonEmptyArray,
}

/// One declarative rule: which field, whether it must be present, what shape
/// it must have, and the message reported when it doesn't.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub presence: Presence,
    pub check: Check,
    pub message: &'static str,
}

/// Run every rule against the body and collect all violations; handlers see
/// the body only when the whole set passes. One message per field (the first
/// failing rule wins).
pub fn validate(body: &Value, rules: &[FieldRule]) -> Result<(), ApiError> {
    let mut field_errors: HashMap<String, String> = HashMap::new();

    for rule in rules {
        match body.get(rule.field) {
            None | Some(Value::Null) => {
                if rule.presence == Presence::Required {
                    field_errors
                        .entry(rule.field.to_string())
                        .or_insert_with(|| rule.message.to_string());
                }
            }
            Some(value) => {
                if !passes(rule.check, value) {
                    field_errors
                        .entry(rule.field.to_string())
                        .or_insert_with(|| rule.message.to_string());
                }
            }
        }
    }

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation_error("Validation failed", field_errors))
    }
}

fn passes(check: Check, value: &Value) -> bool {
    match check {
        Check::NotEmpty => value.as_str().map(|s| !s.trim().is_empty()).unwrap_or(false),
        Check::Email => value.as_str().map(|s| EMAIL_RE.is_match(s.trim())).unwrap_or(false),
        Check::MinLen(n) => value.as_str().map(|s| s.len() >= n).unwrap_or(false),
        Check::Phone => value.as_str().map(|s| PHONE_RE.is_match(s.trim())).unwrap_or(false),
        Check::Numeric => value.is_number(),
        Check::NonNegativeNumber => value.as_f64().map(|n| n >= 0.0).unwrap_or(false),
        Check::PositiveInt => value.as_i64().map(|n| n > 0).unwrap_or(false),
        Check::NonNegativeInt => value.as_i64().map(|n| n >= 0).unwrap_or(false),
        Check::NonEmptyArray => value.as_array().map(|a| !a.is_empty()).unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field_errors(err: ApiError) -> HashMap<String, String> {
        match err {
            ApiError::ValidationError { field_errors, .. } => field_errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn all_violations_are_collected_in_one_pass() {
        let err = validate(&json!({}), rules::REGISTER).unwrap_err();
        let errors = field_errors(err);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors["name"], "Name is required");
        assert_eq!(errors["email"], "Invalid email format");
        assert_eq!(errors["password"], "Password must be at least 8 characters long");
    }

    #[test]
    fn valid_registration_passes() {
        let body = json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "longenough"
        });
        assert!(validate(&body, rules::REGISTER).is_ok());
    }

    #[test]
    fn malformed_email_is_reported() {
        let body = json!({ "name": "Ada", "email": "not-an-email", "password": "longenough" });
        let errors = field_errors(validate(&body, rules::REGISTER).unwrap_err());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["email"], "Invalid email format");
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        assert!(validate(&json!({}), rules::PROFILE_UPDATE).is_ok());
    }

    #[test]
    fn optional_fields_are_still_checked_when_present() {
        let body = json!({ "email": "nope" });
        let errors = field_errors(validate(&body, rules::PROFILE_UPDATE).unwrap_err());
        assert_eq!(errors["email"], "Invalid email format");
    }

    #[test]
    fn quantity_must_be_a_positive_integer() {
        for bad in [json!(0), json!(-1), json!(2.5), json!("3")] {
            let body = json!({ "productId": "abc", "quantity": bad });
            assert!(validate(&body, rules::CART_ADD).is_err());
        }
        let body = json!({ "productId": "abc", "quantity": 3 });
        assert!(validate(&body, rules::CART_ADD).is_ok());
    }

    #[test]
    fn negative_price_is_rejected() {
        let body = json!({
            "name": "Mug", "description": "A mug",
            "price": -1.0, "quantityAvailable": 3
        });
        let errors = field_errors(validate(&body, rules::PRODUCT_CREATE).unwrap_err());
        assert_eq!(errors["price"], "Price cannot be negative");
    }

    #[test]
    fn non_numeric_price_reports_the_type_message_first() {
        let body = json!({
            "name": "Mug", "description": "A mug",
            "price": "free", "quantityAvailable": 3
        });
        let errors = field_errors(validate(&body, rules::PRODUCT_CREATE).unwrap_err());
        assert_eq!(errors["price"], "Price must be a number");
    }

    #[test]
    fn order_requires_at_least_one_product() {
        let body = json!({
            "user": "u", "products": [], "totalPrice": 10.0,
            "shippingAddress": "1 Main St", "paymentMethod": "card"
        });
        let errors = field_errors(validate(&body, rules::ORDER_CREATE).unwrap_err());
        assert_eq!(errors["products"], "At least one product is required");
    }
}
