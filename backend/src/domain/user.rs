//! User record and its field types.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use super::validation::{UserValidationError, ValidationMode};

/// Opaque user identifier.
///
/// Minted as UUID v4 text by [`UserId::random`]. Lookups accept any string:
/// an identifier that was never minted is simply not found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name that passed the rules of a [`ValidationMode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Validate `name` under `mode`.
    pub fn parse(name: impl Into<String>, mode: ValidationMode) -> Result<Self, UserValidationError> {
        let name = name.into();
        mode.check_name(&name)?;
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Age that passed the rules of a [`ValidationMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Age(i64);

impl Age {
    /// Validate `age` under `mode`.
    pub fn parse(age: i64, mode: ValidationMode) -> Result<Self, UserValidationError> {
        mode.check_age(age)?;
        Ok(Self(age))
    }

    /// Numeric value.
    pub fn get(self) -> i64 {
        self.0
    }
}

/// A stored user.
///
/// ## Invariants
/// - `id` is assigned once by the store and never changes.
/// - `name` and `age` satisfied the validation mode in force when they were
///   last written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: UserName,
    age: Age,
}

impl User {
    /// Assemble a user from validated parts.
    pub fn new(id: UserId, name: UserName, age: Age) -> Self {
        Self { id, name, age }
    }

    /// Stable identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Current name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Current age.
    pub fn age(&self) -> Age {
        self.age
    }

    /// Copy of this user with a different name.
    #[must_use]
    pub fn with_name(&self, name: UserName) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    /// Copy of this user with a different age.
    #[must_use]
    pub fn with_age(&self, age: Age) -> Self {
        Self { age, ..self.clone() }
    }
}

/// Unvalidated input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Submitted name.
    pub name: String,
    /// Submitted age.
    pub age: i64,
}

impl NewUser {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Validate the fields and attach `id`.
    ///
    /// `name` is checked before `age`, so the first failure reported is
    /// always the name when both are invalid.
    pub fn into_user(self, id: UserId, mode: ValidationMode) -> Result<User, UserValidationError> {
        let name = UserName::parse(self.name, mode)?;
        let age = Age::parse(self.age, mode)?;
        Ok(User::new(id, name, age))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn ann() -> User {
        NewUser::new("Ann", 25)
            .into_user(UserId::from("user-1"), ValidationMode::Strict)
            .expect("valid user")
    }

    #[rstest]
    fn serialises_flat_record(ann: User) {
        let value = serde_json::to_value(&ann).expect("serialise");
        assert_eq!(value, json!({ "id": "user-1", "name": "Ann", "age": 25 }));
    }

    #[rstest]
    fn with_name_keeps_id_and_age(ann: User) {
        let renamed = ann.with_name(UserName::parse("Bob", ValidationMode::Strict).expect("name"));
        assert_eq!(renamed.id(), ann.id());
        assert_eq!(renamed.age(), ann.age());
        assert_eq!(renamed.name().as_ref(), "Bob");
    }

    #[test]
    fn into_user_reports_name_before_age() {
        let err = NewUser::new("A", 0)
            .into_user(UserId::random(), ValidationMode::Strict)
            .expect_err("both fields invalid");
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn random_ids_are_uuid_text() {
        let id = UserId::random();
        assert!(Uuid::parse_str(id.as_ref()).is_ok());
        assert_ne!(id, UserId::random());
    }
}
