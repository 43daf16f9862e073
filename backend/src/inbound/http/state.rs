//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`, so they depend only
//! on the store port and can be exercised against any implementation.

use std::sync::Arc;

use crate::domain::ports::UserStore;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use userbase::domain::ValidationMode;
/// use userbase::inbound::http::state::HttpState;
/// use userbase::outbound::memory::InMemoryUserStore;
///
/// let state = HttpState::new(Arc::new(InMemoryUserStore::new(ValidationMode::Strict)));
/// let _users = state.users.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// The process-wide user store.
    pub users: Arc<dyn UserStore>,
}

impl HttpState {
    /// Wrap a store for use by the handlers.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
