//! In-memory user store.
//!
//! [`InMemoryUserStore`] keeps records in a `Vec` behind a single `RwLock`.
//! Writers hold the write lock across their whole check-and-mutate step;
//! readers share the read lock. Records are kept, and listed, in insertion
//! order. Nothing survives the process.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{NewUser, User, UserId, UserPatch, ValidationMode};

/// User store backed by process memory.
///
/// # Examples
/// ```
/// use userbase::domain::ports::UserStore;
/// use userbase::domain::{NewUser, ValidationMode};
/// use userbase::outbound::memory::InMemoryUserStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryUserStore::new(ValidationMode::Strict);
/// let ann = store.create(NewUser::new("Ann", 25)).await.expect("valid user");
/// assert_eq!(store.get(ann.id()).await.expect("stored"), ann);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
    validation: ValidationMode,
}

impl InMemoryUserStore {
    /// Create an empty store applying `validation` to every write.
    pub fn new(validation: ValidationMode) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            validation,
        }
    }

    /// Validation mode applied to writes.
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, UserStoreError> {
        self.users.read().map_err(|err| {
            error!(error = %err, "user store lock poisoned");
            UserStoreError::unavailable("lock poisoned")
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, UserStoreError> {
        self.users.write().map_err(|err| {
            error!(error = %err, "user store lock poisoned");
            UserStoreError::unavailable("lock poisoned")
        })
    }
}

fn position(users: &[User], id: &UserId) -> Result<usize, UserStoreError> {
    users
        .iter()
        .position(|user| user.id() == id)
        .ok_or_else(|| UserStoreError::not_found(id.as_ref()))
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let user = new_user
            .into_user(UserId::random(), self.validation)
            .inspect_err(|err| {
                debug!(field = err.field(), rule = err.code(), "create rejected");
            })?;

        self.write()?.push(user.clone());
        debug!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.read()?.clone())
    }

    async fn get(&self, id: &UserId) -> Result<User, UserStoreError> {
        self.read()?
            .iter()
            .find(|user| user.id() == id)
            .cloned()
            .ok_or_else(|| UserStoreError::not_found(id.as_ref()))
    }

    async fn update(&self, id: &UserId, patch: UserPatch) -> Result<User, UserStoreError> {
        let mut users = self.write()?;
        let slot = users
            .iter_mut()
            .find(|user| user.id() == id)
            .ok_or_else(|| UserStoreError::not_found(id.as_ref()))?;
        if patch.is_empty() {
            debug!(user_id = %id, "update changes nothing");
            return Ok(slot.clone());
        }

        let updated = patch.apply(slot, self.validation).inspect_err(|err| {
            debug!(user_id = %id, field = err.field(), rule = err.code(), "update rejected");
        })?;
        *slot = updated.clone();
        debug!(user_id = %id, "user updated");
        Ok(updated)
    }

    async fn delete(&self, id: &UserId) -> Result<User, UserStoreError> {
        let mut users = self.write()?;
        let index = position(&users, id)?;
        let removed = users.remove(index);
        debug!(user_id = %id, "user deleted");
        Ok(removed)
    }
}
