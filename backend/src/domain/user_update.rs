//! Partial updates to a user record.

use super::user::{Age, User, UserName};
use super::validation::{UserValidationError, ValidationMode};

/// Values that count as "nothing submitted" under the falsy-skip policy.
pub trait Falsy {
    /// True for the empty or zero value of the type.
    fn is_falsy(&self) -> bool;
}

impl Falsy for String {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for i64 {
    fn is_falsy(&self) -> bool {
        *self == 0
    }
}

/// Change requested for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Keep the current value.
    #[default]
    Unset,
    /// Replace the current value.
    Set(T),
}

impl<T: Falsy> FieldUpdate<T> {
    /// Interpret a submitted value with the falsy-skip policy.
    ///
    /// A missing value and a present-but-falsy value (`""`, `0`) both become
    /// [`FieldUpdate::Unset`].
    ///
    /// QUIRK: an explicit empty name or zero age is silently ignored rather
    /// than applied or rejected. This mirrors the behaviour clients already
    /// depend on and is probably an upstream truthiness bug; keep it until
    /// the product decision is revisited.
    ///
    /// # Examples
    /// ```
    /// use userbase::domain::FieldUpdate;
    ///
    /// assert_eq!(FieldUpdate::<i64>::skip_falsy(Some(0)), FieldUpdate::Unset);
    /// assert_eq!(FieldUpdate::skip_falsy(Some(30_i64)), FieldUpdate::Set(30));
    /// ```
    pub fn skip_falsy(submitted: Option<T>) -> Self {
        match submitted {
            Some(value) if !value.is_falsy() => Self::Set(value),
            _ => Self::Unset,
        }
    }
}

/// Requested changes to a user. `id` is never part of a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// Name change.
    pub name: FieldUpdate<String>,
    /// Age change.
    pub age: FieldUpdate<i64>,
}

impl UserPatch {
    /// Build a patch from submitted values using the falsy-skip policy.
    pub fn from_submitted(name: Option<String>, age: Option<i64>) -> Self {
        Self {
            name: FieldUpdate::skip_falsy(name),
            age: FieldUpdate::skip_falsy(age),
        }
    }

    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name == FieldUpdate::Unset && self.age == FieldUpdate::Unset
    }

    /// Apply the patch to `user`, validating only the fields being changed.
    ///
    /// Returns the updated copy; `user` itself is left untouched so a
    /// failed validation cannot leave a half-applied record behind.
    pub fn apply(&self, user: &User, mode: ValidationMode) -> Result<User, UserValidationError> {
        let mut updated = user.clone();
        if let FieldUpdate::Set(name) = &self.name {
            updated = updated.with_name(UserName::parse(name.as_str(), mode)?);
        }
        if let FieldUpdate::Set(age) = self.age {
            updated = updated.with_age(Age::parse(age, mode)?);
        }
        Ok(updated)
    }
}
