use anyhow::Result;
use kb_display::application::{
    ports::{
        permission::PermissionOracle, security::TokenManager, session::SessionMessageStore,
        time::Clock, util::SlugGenerator,
    },
    services::ApplicationServices,
};
use kb_display::config::AppConfig;
use kb_display::domain::{
    article::{KbArticleReadRepository, KbArticleWriteRepository},
    portlet::PortletPreferencesRepository,
};
use kb_display::infrastructure::{
    database,
    repositories::{
        PostgresKbArticleReadRepository, PostgresKbArticleWriteRepository,
        PostgresPermissionOracle, PostgresPortletPreferencesRepository,
    },
    security::{
        redis_session_store::RedisSessionMessageStore,
        session_store::InMemorySessionMessageStore, token::BiscuitTokenManager,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use kb_display::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc, time::Duration};
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

    let article_write_repo: Arc<dyn KbArticleWriteRepository> =
        Arc::new(PostgresKbArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn KbArticleReadRepository> =
        Arc::new(PostgresKbArticleReadRepository::new(pool.clone()));
    let preferences_repo: Arc<dyn PortletPreferencesRepository> =
        Arc::new(PostgresPortletPreferencesRepository::new(pool.clone()));
    let permissions: Arc<dyn PermissionOracle> = Arc::new(PostgresPermissionOracle::new(pool));

    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let session_store = session_store(&config)?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        preferences_repo,
        permissions,
        token_manager,
        session_store,
        clock,
        slugger,
        config.display_templates(),
    ));

    let state = HttpState::new(services, config.public_base_url());
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn session_store(config: &AppConfig) -> Result<Arc<dyn SessionMessageStore>> {
    match config.redis_url() {
        Some(url) => {
            tracing::info!("using redis session message store");
            let store = RedisSessionMessageStore::from_url(url, config.session_message_ttl_secs())?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("REDIS_URL not set; session messages are kept in memory");
            let ttl = Duration::from_secs(config.session_message_ttl_secs());
            Ok(Arc::new(InMemorySessionMessageStore::with_ttl(ttl)))
        }
    }
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
            tracing::error!(error = %err, "failed to install CTRL+C handler");
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
                tracing::error!(error = %err, "failed to install terminate handler");
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
