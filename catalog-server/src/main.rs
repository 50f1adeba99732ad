//! # Catalog Server
//!
//! Read-only product catalog API.
//!
//! Serves product listings, featured items, lookup by id, and
//! category/sub-category filtering over PostgreSQL. The HTTP surface lives
//! under `/api/products`; storage access goes through the store port in
//! `catalog-core`.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_core::{MIGRATOR, PostgresProductRepository};
use catalog_server::{AppState, infra::config::Config, routes::create_app_router};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "catalog-server")]
#[command(about = "Product catalog read API over PostgreSQL")]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Enable permissive CORS for local development
    #[arg(long, default_value_t = false)]
    dev: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.database_url {
        config.database.url = Some(url);
    }
    if cli.dev {
        config.dev_mode = true;
    }

    let database_url = config
        .database
        .url
        .clone()
        .context("DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(16)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(&database_url)
        .await
        .context("failed to connect to PostgreSQL")?;

    MIGRATOR
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    let state = AppState::new(
        Arc::new(PostgresProductRepository::new(pool)),
        Arc::new(config.clone()),
    );
    let app = create_app_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("catalog server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
