//! Actor Page 101 HTTP server.
//!
//! Serves tenant pages on their subdomains and the page management API.
//! Every request passes through hostname rewriting before routing.

mod config;
mod observability;

use actor_pages::domain::{PageRepository, TracingEventPublisher};
use actor_pages::{
    register_routes, rewrite_layer, InMemoryPageRepository, Migrator, SeaOrmPageRepository,
    Service,
};
use anyhow::Context;
use axum::extract::Request;
use axum::{Router, ServiceExt};
use clap::Parser;
use config::AppConfig;
use sea_orm_migration::MigratorTrait;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower::Layer;

#[derive(Debug, Parser)]
#[command(name = "actor-pages-server", version, about = "Actor Page 101 tenant page server")]
struct Args {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?;
    if args.print_config {
        println!("{config:#?}");
        return Ok(());
    }

    observability::init_tracing(&config.log_filter, config.json_logs);

    let token = CancellationToken::new();
    let signal = token.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        }
        signal.cancel();
    });

    run_with_shutdown(config, async move { token.cancelled().await }).await
}

async fn run_with_shutdown<F>(config: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let repo = build_repository(config.database_url.as_deref()).await?;
    let service = Arc::new(Service::new(
        repo,
        Arc::new(TracingEventPublisher),
        &config.pages,
    ));

    let app = rewrite_layer::<axum::body::Body>(service.router().clone())
        .layer(register_routes(Router::new(), service.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(
        addr = %config.bind_addr,
        root_domain = service.router().root_domain(),
        "Actor pages server listening"
    );

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Actor pages server stopped");
    Ok(())
}

async fn build_repository(database_url: Option<&str>) -> anyhow::Result<Arc<dyn PageRepository>> {
    let Some(url) = database_url else {
        tracing::warn!("No database_url configured, pages are kept in memory");
        return Ok(Arc::new(InMemoryPageRepository::new()));
    };

    let db = sea_orm::Database::connect(url)
        .await
        .context("failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("failed to run migrations")?;
    tracing::info!("Database ready");

    Ok(Arc::new(SeaOrmPageRepository::new(Arc::new(db))))
}
