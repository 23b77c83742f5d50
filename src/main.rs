use anyhow::Result;
use bramble::application::services::ApplicationServices;
use bramble::config::AppConfig;
use bramble::domain::blog::BlogReadRepository;
use bramble::infrastructure::{database, repositories::PostgresBlogRepository};
use bramble::presentation::http::{routes::build_router, state::HttpState, templates};
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
    // from_env loads .env, so it runs before tracing reads RUST_LOG.
    let config = AppConfig::from_env()?;
    init_tracing();

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let blog_repo: Arc<dyn BlogReadRepository> = Arc::new(PostgresBlogRepository::new(pool));
    let services = Arc::new(ApplicationServices::new(blog_repo));

    let engine = templates::load_templates(config.templates_dir())?;
    let state = HttpState {
        services,
        templates: Arc::new(engine),
    };

    let app = build_router(state, config.static_dir(), config.media_dir());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
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
