use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, Route,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{
    application::usecases::proxy_auth::ProxyAuthUseCase,
    presentation::http::{
        endpoints::{
            auth::proxy_auth, devtools::DevToolsEndpoints, health::HealthEndpoints,
            root::ApiState, users::UsersEndpoints,
        },
        errors::render_error,
    },
};

pub fn build_app(
    state: Arc<ApiState>,
    proxy_auth_usecase: Arc<ProxyAuthUseCase>,
    web_url: String,
    server_url: String,
) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (
            HealthEndpoints::new(state.clone()),
            UsersEndpoints::new(state.clone()),
            DevToolsEndpoints::new(state),
        ),
        "Portal API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .at("/api/auth", proxy_auth)
        .at("/api/auth/*path", proxy_auth)
        .nest("/docs", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
        .data(proxy_auth_usecase)
        .with(
            Cors::new()
                .allow_origin(web_url)
                .allow_credentials(true),
        )
        .with(Tracing)
        .catch_all_error(render_error)
}
