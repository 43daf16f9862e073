//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register the users API under `/api/v1` and the health probes.
///
/// The application must provide `web::Data<HttpState>` and
/// `web::Data<HealthState>`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use userbase::domain::ValidationMode;
/// use userbase::inbound::http::{self, health::HealthState, state::HttpState};
/// use userbase::outbound::memory::InMemoryUserStore;
///
/// let state = HttpState::new(Arc::new(InMemoryUserStore::new(ValidationMode::Strict)));
/// let app = App::new()
///     .app_data(web::Data::new(state))
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(http::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .service(
            web::scope("/api/v1")
                .service(users::list_users)
                .service(users::create_user)
                .service(users::get_user)
                .service(users::update_user)
                .service(users::delete_user),
        )
        .service(health::ready)
        .service(health::live);
}
