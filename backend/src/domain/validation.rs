//! Field rules for user records and the switch that enables them.
//!
//! Strict mode enforces:
//!
//! | Field | Rule |
//! |-------|------|
//! | name  | 2 to 50 characters, ASCII letters and digits only |
//! | age   | greater than 0 and less than 120 |
//!
//! Off mode accepts any name and any age.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Minimum name length, in characters, under strict validation.
pub const NAME_MIN: usize = 2;
/// Maximum name length, in characters, under strict validation.
pub const NAME_MAX: usize = 50;
/// Exclusive lower bound for age under strict validation.
pub const AGE_LOWER_EXCLUSIVE: i64 = 0;
/// Exclusive upper bound for age under strict validation.
pub const AGE_UPPER_EXCLUSIVE: i64 = 120;

/// A user field rejected by the active rules.
///
/// Each variant knows the field it concerns and a stable rule code so
/// adapters can report the failure in a structured way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// Name shorter than [`NAME_MIN`].
    #[error("name must be at least {min} characters")]
    NameTooShort { min: usize },
    /// Name longer than [`NAME_MAX`].
    #[error("name must be at most {max} characters")]
    NameTooLong { max: usize },
    /// Name contains something other than ASCII letters and digits.
    #[error("name may only contain letters and digits")]
    NameNotAlphanumeric,
    /// Age outside the open interval `(min, max)`.
    #[error("age must be greater than {min} and less than {max}")]
    AgeOutOfRange { min: i64, max: i64 },
}

impl UserValidationError {
    /// Name of the offending field as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameTooShort { .. } | Self::NameTooLong { .. } | Self::NameNotAlphanumeric => {
                "name"
            }
            Self::AgeOutOfRange { .. } => "age",
        }
    }

    /// Stable identifier of the violated rule.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameTooShort { .. } => "name_too_short",
            Self::NameTooLong { .. } => "name_too_long",
            Self::NameNotAlphanumeric => "name_not_alphanumeric",
            Self::AgeOutOfRange { .. } => "age_out_of_range",
        }
    }
}

/// How strictly submitted fields are checked before they reach the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Accept any name and age.
    Off,
    /// Apply the length, character and range rules.
    #[default]
    Strict,
}

impl ValidationMode {
    /// Check a name against the active rules.
    ///
    /// Length is checked before the character class.
    ///
    /// # Examples
    /// ```
    /// use userbase::domain::{UserValidationError, ValidationMode};
    ///
    /// assert!(ValidationMode::Strict.check_name("Ann").is_ok());
    /// assert_eq!(
    ///     ValidationMode::Strict.check_name("A"),
    ///     Err(UserValidationError::NameTooShort { min: 2 })
    /// );
    /// assert!(ValidationMode::Off.check_name("A").is_ok());
    /// ```
    pub fn check_name(self, name: &str) -> Result<(), UserValidationError> {
        if self == Self::Off {
            return Ok(());
        }

        let length = name.chars().count();
        if length < NAME_MIN {
            return Err(UserValidationError::NameTooShort { min: NAME_MIN });
        }
        if length > NAME_MAX {
            return Err(UserValidationError::NameTooLong { max: NAME_MAX });
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(UserValidationError::NameNotAlphanumeric);
        }
        Ok(())
    }

    /// Check an age against the active rules.
    pub fn check_age(self, age: i64) -> Result<(), UserValidationError> {
        if self == Self::Off || (age > AGE_LOWER_EXCLUSIVE && age < AGE_UPPER_EXCLUSIVE) {
            return Ok(());
        }
        Err(UserValidationError::AgeOutOfRange {
            min: AGE_LOWER_EXCLUSIVE,
            max: AGE_UPPER_EXCLUSIVE,
        })
    }

    /// Lower-case label used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a configuration value does not name a validation mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown validation mode `{0}`; expected `off` or `strict`")]
pub struct ParseValidationModeError(String);

impl FromStr for ValidationMode {
    type Err = ParseValidationModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "strict" => Ok(Self::Strict),
            _ => Err(ParseValidationModeError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Boundary coverage for the strict rule set.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Ann")]
    #[case("Bo")]
    #[case("abc123")]
    fn strict_accepts_valid_names(#[case] name: &str) {
        assert_eq!(ValidationMode::Strict.check_name(name), Ok(()));
    }

    #[rstest]
    #[case("", UserValidationError::NameTooShort { min: NAME_MIN })]
    #[case("A", UserValidationError::NameTooShort { min: NAME_MIN })]
    #[case("Ann Lee", UserValidationError::NameNotAlphanumeric)]
    #[case("ann_lee", UserValidationError::NameNotAlphanumeric)]
    #[case("Zoë", UserValidationError::NameNotAlphanumeric)]
    fn strict_rejects_invalid_names(#[case] name: &str, #[case] expected: UserValidationError) {
        assert_eq!(ValidationMode::Strict.check_name(name), Err(expected));
    }

    #[test]
    fn strict_name_length_bounds_are_inclusive() {
        let longest = "a".repeat(NAME_MAX);
        assert_eq!(ValidationMode::Strict.check_name(&longest), Ok(()));

        let too_long = "a".repeat(NAME_MAX + 1);
        assert_eq!(
            ValidationMode::Strict.check_name(&too_long),
            Err(UserValidationError::NameTooLong { max: NAME_MAX })
        );
    }

    #[test]
    fn length_is_counted_in_characters() {
        // Two characters, four bytes: passes length, fails character class.
        assert_eq!(
            ValidationMode::Strict.check_name("éé"),
            Err(UserValidationError::NameNotAlphanumeric)
        );
    }

    #[rstest]
    #[case(1)]
    #[case(25)]
    #[case(119)]
    fn strict_accepts_ages_inside_range(#[case] age: i64) {
        assert_eq!(ValidationMode::Strict.check_age(age), Ok(()));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(120)]
    #[case(i64::MAX)]
    fn strict_rejects_ages_outside_range(#[case] age: i64) {
        let err = ValidationMode::Strict
            .check_age(age)
            .expect_err("age outside range");
        assert_eq!(err.field(), "age");
        assert_eq!(err.code(), "age_out_of_range");
    }

    #[rstest]
    #[case("", -5)]
    #[case("A", 500)]
    #[case("not alnum!", 0)]
    fn off_accepts_anything(#[case] name: &str, #[case] age: i64) {
        assert_eq!(ValidationMode::Off.check_name(name), Ok(()));
        assert_eq!(ValidationMode::Off.check_age(age), Ok(()));
    }

    #[rstest]
    #[case("off", ValidationMode::Off)]
    #[case("STRICT", ValidationMode::Strict)]
    #[case(" strict ", ValidationMode::Strict)]
    fn parses_mode_labels(#[case] raw: &str, #[case] expected: ValidationMode) {
        assert_eq!(raw.parse::<ValidationMode>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_mode_label() {
        let err = "lenient".parse::<ValidationMode>().expect_err("unknown mode");
        assert!(err.to_string().contains("lenient"));
    }

    #[test]
    fn default_mode_is_strict() {
        assert_eq!(ValidationMode::default(), ValidationMode::Strict);
    }
}
