//! Route registration

use super::{dto::*, error::Problem, handlers};
use crate::contract::RenderedPage;
use crate::domain::Service;
use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::{get, put},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Register all REST routes.
///
/// Tenant pages are mounted under the router's tenant prefix so hostname
/// rewrites land on them.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let prefix = service.router().tenant_prefix().trim_end_matches('/').to_string();

    router
        // Public tenant pages
        .route(&format!("{prefix}/{{slug}}"), get(render_page_handler))
        .route(
            &format!("{prefix}/{{slug}}/{{*rest}}"),
            get(render_nested_page_handler),
        )
        // Page management
        .route("/api/pages", get(list_pages_handler).post(create_page_handler))
        .route(
            "/api/pages/{slug}/config",
            get(get_page_config_handler).put(save_page_config_handler),
        )
        .route("/api/pages/{slug}/tier", put(change_tier_handler))
        .route("/api/pages/{slug}/published", put(set_published_handler))
        // Add service as extension for handlers
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn render_page_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
) -> Result<Json<RenderedPage>, Problem> {
    handlers::render_page(service, path).await
}

/// Sub-paths of a tenant page render the same page
async fn render_nested_page_handler(
    Extension(service): Extension<Arc<Service>>,
    Path((slug, _rest)): Path<(String, String)>,
) -> Result<Json<RenderedPage>, Problem> {
    handlers::render_page(service, Path(slug)).await
}

async fn list_pages_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
) -> Result<Json<PageListResponse>, Problem> {
    handlers::list_pages(service, headers).await
}

async fn create_page_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    json: Json<CreatePageRequest>,
) -> Result<(StatusCode, Json<PageConfigDto>), Problem> {
    handlers::create_page(service, headers, json).await
}

async fn get_page_config_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    path: Path<String>,
) -> Result<Json<PageConfigDto>, Problem> {
    handlers::get_page_config(service, headers, path).await
}

async fn save_page_config_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    path: Path<String>,
    json: Json<SavePageConfigRequest>,
) -> Result<Json<PageConfigDto>, Problem> {
    handlers::save_page_config(service, headers, path, json).await
}

async fn change_tier_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    path: Path<String>,
    json: Json<ChangeTierRequest>,
) -> Result<Json<PageConfigDto>, Problem> {
    handlers::change_tier(service, headers, path, json).await
}

async fn set_published_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    path: Path<String>,
    json: Json<SetPublishedRequest>,
) -> Result<Json<PageSummaryDto>, Problem> {
    handlers::set_published(service, headers, path, json).await
}
