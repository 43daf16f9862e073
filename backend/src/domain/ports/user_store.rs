//! Port for the user store: the single owner of all user records.
//!
//! Implementations enforce identifier uniqueness, run field validation
//! before any mutation and serialise writers so each operation sees a
//! consistent collection.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId, UserPatch, UserValidationError};

use super::define_port_error;

define_port_error! {
    /// Failures reported by user store adapters.
    pub enum UserStoreError {
        /// No live record carries the identifier.
        NotFound { id: String } => "user {id} not found",
        /// A submitted field broke the active validation rules.
        Validation { reason: UserValidationError } => "{reason}",
        /// The store could not serve the request.
        Unavailable { message: String } => "user store unavailable: {message}",
    }
}

impl From<UserValidationError> for UserStoreError {
    fn from(reason: UserValidationError) -> Self {
        Self::Validation { reason }
    }
}

/// CRUD contract over the user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Validate `new_user`, mint an identifier and insert the record.
    ///
    /// The store is unchanged when validation fails.
    async fn create(&self, new_user: NewUser) -> Result<User, UserStoreError>;

    /// Every live record.
    async fn list(&self) -> Result<Vec<User>, UserStoreError>;

    /// The record with identifier `id`.
    async fn get(&self, id: &UserId) -> Result<User, UserStoreError>;

    /// Apply `patch` to the record with identifier `id`.
    ///
    /// A missing record is reported before any validation failure. The
    /// record is unchanged when validation fails.
    async fn update(&self, id: &UserId, patch: UserPatch) -> Result<User, UserStoreError>;

    /// Remove and return the record with identifier `id`.
    async fn delete(&self, id: &UserId) -> Result<User, UserStoreError>;
}
