use anyhow::Result;
use profile_service::application::{
    ports::{security::TokenManager, time::Clock, util::EntryIdGenerator},
    services::ApplicationServices,
};
use profile_service::config::AppConfig;
use profile_service::domain::{profile::ProfileRepository, user::UserRepository};
use profile_service::infrastructure::{
    database,
    repositories::{PostgresProfileRepository, PostgresUserRepository},
    security::token::BiscuitTokenManager,
    time::SystemClock,
    util::UuidEntryIdGenerator,
};
use profile_service::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(
        config.database_url(),
        config.database_max_connections(),
        config.database_acquire_timeout(),
    )
    .await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database migrations applied");

    let profile_repo: Arc<dyn ProfileRepository> =
        Arc::new(PostgresProfileRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));

    let token_manager_impl =
        BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let token_manager: Arc<dyn TokenManager> = Arc::new(token_manager_impl);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let id_generator: Arc<dyn EntryIdGenerator> = Arc::new(UuidEntryIdGenerator);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&profile_repo),
        Arc::clone(&user_repo),
        Arc::clone(&token_manager),
        Arc::clone(&clock),
        Arc::clone(&id_generator),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, &RouterSettings::from_config(&config));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
