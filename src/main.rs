use std::sync::Arc;

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::info;

use crate::{
    application::{
        services::{
            auth_gateway::{AuditHook, AuthHooks},
            devtools::DevToolsService,
        },
        usecases::{health::HealthUseCase, proxy_auth::ProxyAuthUseCase},
    },
    config::Config,
    domain::devtools::core_plugins,
    infrastructure::{
        auth::http::HttpAuthGateway,
        repositories::postgres::{self, PostgresDatabaseProbe, PostgresUserRepository},
        storage::file::FileStorage,
        system::process::SysinfoMetrics,
    },
    presentation::http::{app::build_app, endpoints::root::ApiState},
};

mod application;
mod config;
mod domain;
mod infrastructure;
mod presentation;
mod telemetry;

#[main]
async fn main() -> anyhow::Result<()> {
    let config = Config::try_parse()?;
    telemetry::init_tracing()?;

    let pool = postgres::connect(&config.database_url, config.database_max_connections).await?;
    postgres::migrate(&pool).await?;

    let user_repo = PostgresUserRepository::new(pool.clone());
    let probe = PostgresDatabaseProbe::new(pool);
    let health = HealthUseCase::new(probe, Arc::new(SysinfoMetrics::new()));

    let auth_gateway = HttpAuthGateway::new(&config.auth_service_url)?;
    let proxy_auth = Arc::new(ProxyAuthUseCase::new(
        auth_gateway,
        AuthHooks::new(vec![Arc::new(AuditHook)]),
    ));

    let storage = Arc::new(FileStorage::new(&config.devtools_state_path));
    let devtools = Arc::new(DevToolsService::load(storage, core_plugins()).await);

    let state = Arc::new(ApiState::new(user_repo, health, devtools));

    let server_url = config.server_url();
    info!(url = %server_url, auth = %config.auth_service_url, "Starting server");

    let app = build_app(state, proxy_auth, config.web_url.clone(), server_url);

    Server::new(TcpListener::bind(config.bind_address()))
        .run(app)
        .await?;

    Ok(())
}
