use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, Route,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{
    config::Config,
    domain::repositories::UserRepository,
    infrastructure::repositories::InMemoryUserRepository,
    presentation::http::{
        endpoints::{ApiState, HealthEndpoints, TodosEndpoints, UsersEndpoints},
        errors::render_error,
    },
};

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Builds the whole HTTP application around a fresh, empty store.
///
/// The store is owned by the returned endpoint and dropped with it, so every
/// call yields an independent service instance.
pub fn build_app(config: Config) -> impl Endpoint {
    let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let state = Arc::new(ApiState::new(repo, &config));

    let api_service = OpenApiService::new(
        (
            HealthEndpoints,
            UsersEndpoints::new(state.clone()),
            TodosEndpoints::new(state),
        ),
        "Todo API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(config.server_url());
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/docs", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
        .catch_all_error(render_error)
        .with(Cors::new())
        .with(Tracing)
}
