//! Validation error payloads for the HTTP adapter.
//!
//! Every rejected field is reported as `invalid_request` with a `details`
//! object naming the field and the rule it broke, plus any bound the client
//! needs to correct the input.

use serde_json::{Map, Value, json};

use crate::domain::{Error, UserValidationError};

/// Detail codes for failures that happen before domain validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidBody => "invalid_body",
        }
    }
}

/// Builder for invalid-request errors carrying a field and rule code.
struct FieldViolation {
    field: Option<&'static str>,
    code: &'static str,
    message: String,
    extra: Map<String, Value>,
}

impl FieldViolation {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: None,
            code,
            message: message.into(),
            extra: Map::new(),
        }
    }

    fn on(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    fn with(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_owned(), value);
        self
    }

    fn into_error(self) -> Error {
        let mut details = self.extra;
        if let Some(field) = self.field {
            details.insert("field".to_owned(), json!(field));
        }
        details.insert("code".to_owned(), json!(self.code));
        Error::invalid_request(self.message).with_details(Value::Object(details))
    }
}

/// Describe a rejected user field.
pub(crate) fn user_validation_error(err: &UserValidationError) -> Error {
    let violation = FieldViolation::new(err.code(), err.to_string()).on(err.field());
    let violation = match *err {
        UserValidationError::NameTooShort { min } => violation.with("min", json!(min)),
        UserValidationError::NameTooLong { max } => violation.with("max", json!(max)),
        UserValidationError::NameNotAlphanumeric => violation,
        UserValidationError::AgeOutOfRange { min, max } => violation
            .with("min", json!(min))
            .with("max", json!(max)),
    };
    violation.into_error()
}

/// Describe a request body that could not be decoded.
pub(crate) fn invalid_body_error(reason: &str) -> Error {
    FieldViolation::new(ErrorCode::InvalidBody.as_str(), "request body is invalid")
        .with("reason", json!(reason))
        .into_error()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(UserValidationError::NameTooShort { min: 2 }, json!({ "field": "name", "code": "name_too_short", "min": 2 }))]
    #[case(UserValidationError::NameTooLong { max: 50 }, json!({ "field": "name", "code": "name_too_long", "max": 50 }))]
    #[case(UserValidationError::NameNotAlphanumeric, json!({ "field": "name", "code": "name_not_alphanumeric" }))]
    #[case(UserValidationError::AgeOutOfRange { min: 0, max: 120 }, json!({ "field": "age", "code": "age_out_of_range", "min": 0, "max": 120 }))]
    fn user_validation_details(#[case] err: UserValidationError, #[case] expected: Value) {
        let error = user_validation_error(&err);
        assert_eq!(error.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(error.message(), err.to_string());
        assert_eq!(error.details(), Some(&expected));
    }

    #[test]
    fn invalid_body_has_no_field() {
        let error = invalid_body_error("missing field `age`");
        let details = error.details().expect("details");
        assert_eq!(details["code"], json!("invalid_body"));
        assert_eq!(details["reason"], json!("missing field `age`"));
        assert!(details.get("field").is_none());
    }
}
