//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use super::health::HealthState;
use super::state::HttpState;
use crate::Trace;
use crate::domain::ports::UserStore;

/// Build an application wired exactly like production around `store`.
pub fn test_app(
    store: Arc<dyn UserStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(store)))
        .app_data(web::Data::new(HealthState::new()))
        .wrap(Trace)
        .configure(super::configure)
}
