// src/main.rs
use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use scribe_core::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        storage::ImageStore,
        time::Clock,
    },
    services::ApplicationServices,
};
use scribe_core::config::AppConfig;
use scribe_core::domain::{
    post::{PostReadRepository, PostWriteRepository},
    user::UserRepository,
};
use scribe_core::infrastructure::{
    database,
    repositories::{PostgresPostReadRepository, PostgresPostWriteRepository, PostgresUserRepository},
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    storage::FsImageStore,
    time::SystemClock,
};
use scribe_core::presentation::http::{routes::build_router, state::HttpState};
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
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> =
        Arc::new(PostgresUserRepository::new(pool.clone()));
    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(PostgresPostWriteRepository::new(pool.clone()));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager_impl =
        BiscuitTokenManager::new(config.token_private_key(), config.token_ttl())?;
    let token_manager: Arc<dyn TokenManager> = Arc::new(token_manager_impl);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    tokio::fs::create_dir_all(config.upload_dir()).await?;
    let image_store: Arc<dyn ImageStore> = Arc::new(FsImageStore::new(config.upload_dir()));

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&user_repo),
        Arc::clone(&post_write_repo),
        Arc::clone(&post_read_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&token_manager),
        Arc::clone(&image_store),
        Arc::clone(&clock),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.upload_dir());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

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
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
