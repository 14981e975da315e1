use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use storefront_core::application::{
    ports::{
        security::AdminAuthenticator,
        time::Clock,
        util::{IdGenerator, SlugGenerator},
    },
    services::{ApplicationServices, ServiceSettings},
};
use storefront_core::config::AppConfig;
use storefront_core::domain::{
    action::ActionLogRepository,
    order::OrderReadRepository,
    product::{ProductImageRepository, ProductReadRepository, ProductWriteRepository},
};
use storefront_core::infrastructure::{
    database,
    repositories::{
        PostgresActionLogRepository, PostgresOrderRepository, PostgresProductImageRepository,
        PostgresProductReadRepository, PostgresProductWriteRepository,
    },
    security::HmacAdminAuthenticator,
    time::SystemClock,
    util::{DefaultSlugGenerator, UuidGenerator},
};
use storefront_core::presentation::http::{routes::build_router, state::HttpState};
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

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database migrations applied");

    let product_read_repo: Arc<dyn ProductReadRepository> =
        Arc::new(PostgresProductReadRepository::new(pool.clone()));
    let product_write_repo: Arc<dyn ProductWriteRepository> =
        Arc::new(PostgresProductWriteRepository::new(pool.clone()));
    let image_repo: Arc<dyn ProductImageRepository> =
        Arc::new(PostgresProductImageRepository::new(pool.clone()));
    let action_repo: Arc<dyn ActionLogRepository> =
        Arc::new(PostgresActionLogRepository::new(pool.clone()));
    let order_repo: Arc<dyn OrderReadRepository> = Arc::new(PostgresOrderRepository::new(pool));

    let authenticator: Arc<dyn AdminAuthenticator> =
        Arc::new(HmacAdminAuthenticator::new(config.admin_api_token())?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        product_read_repo,
        product_write_repo,
        image_repo,
        action_repo,
        order_repo,
        authenticator,
        clock,
        ids,
        slugger,
        ServiceSettings {
            tool_max_attempts: config.tool_max_attempts(),
            low_stock_threshold: config.low_stock_threshold(),
        },
    ));

    let state = HttpState { services };
    let app = build_router(state, &config.router_settings());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    // Client addresses feed the per-IP rate limiter.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
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
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
