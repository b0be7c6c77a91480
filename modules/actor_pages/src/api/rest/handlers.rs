//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
    mapper::parse_tier,
};
use crate::contract::{AuthContext, RenderedPage, TenantPageConfig, Tier};
use crate::domain::{validation::generate_slug, Service};
use axum::{extract::Path, http::HeaderMap, http::StatusCode, Json};
use std::sync::Arc;

/// Header carrying the caller's user id, set by the upstream auth layer
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the caller's role; `admin` grants overrides
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Caller identity from the headers set by the upstream auth layer
pub fn auth_from_headers(headers: &HeaderMap) -> AuthContext {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let user_id = header(USER_ID_HEADER).map(str::to_string);
    if header(USER_ROLE_HEADER).is_some_and(|role| role.eq_ignore_ascii_case("admin")) {
        AuthContext::admin(user_id)
    } else {
        AuthContext::owner(user_id)
    }
}

// ===== Public page handlers =====

/// Render a published tenant page
pub async fn render_page(
    service: Arc<Service>,
    Path(slug): Path<String>,
) -> Result<Json<RenderedPage>, Problem> {
    let page = service.render_page(&slug).await.map_err(|e| {
        map_domain_error(e).with_instance(format!("{}/{}", service.router().tenant_prefix(), slug))
    })?;

    Ok(Json(page))
}

// ===== Page management handlers =====

/// Create a page
pub async fn create_page(
    service: Arc<Service>,
    headers: HeaderMap,
    Json(req): Json<CreatePageRequest>,
) -> Result<(StatusCode, Json<PageConfigDto>), Problem> {
    let auth = auth_from_headers(&headers);
    let tier = match req.tier.as_deref() {
        Some(tier) => parse_tier(tier).map_err(map_domain_error)?,
        None => Tier::Free,
    };
    let slug = req
        .slug
        .unwrap_or_else(|| generate_slug(&req.display_name));

    let config = service
        .create_page(&slug, &req.display_name, tier, &auth)
        .await
        .map_err(map_domain_error)?;

    let dto = PageConfigDto::from_config(&slug, &config).map_err(map_domain_error)?;
    Ok((StatusCode::CREATED, Json(dto)))
}

/// List all pages (admin only)
pub async fn list_pages(
    service: Arc<Service>,
    headers: HeaderMap,
) -> Result<Json<PageListResponse>, Problem> {
    let auth = auth_from_headers(&headers);
    let pages = service.list_pages(&auth).await.map_err(map_domain_error)?;

    let items: Vec<PageSummaryDto> = pages.into_iter().map(|p| p.into()).collect();
    let total = items.len();

    Ok(Json(PageListResponse { items, total }))
}

/// Get a page's canonical configuration (owner or admin)
pub async fn get_page_config(
    service: Arc<Service>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<Json<PageConfigDto>, Problem> {
    let auth = auth_from_headers(&headers);
    let config = service
        .get_page_config(&slug, &auth)
        .await
        .map_err(map_domain_error)?;

    let dto = PageConfigDto::from_config(&slug, &config).map_err(map_domain_error)?;
    Ok(Json(dto))
}

/// Save an edited configuration
pub async fn save_page_config(
    service: Arc<Service>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(req): Json<SavePageConfigRequest>,
) -> Result<Json<PageConfigDto>, Problem> {
    let auth = auth_from_headers(&headers);
    let config = TenantPageConfig::try_from(req).map_err(map_domain_error)?;

    let saved = service
        .save_page_config(&slug, config, &auth)
        .await
        .map_err(map_domain_error)?;

    let dto = PageConfigDto::from_config(&slug, &saved).map_err(map_domain_error)?;
    Ok(Json(dto))
}

/// Change a page's tier (admin only)
pub async fn change_tier(
    service: Arc<Service>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(req): Json<ChangeTierRequest>,
) -> Result<Json<PageConfigDto>, Problem> {
    let auth = auth_from_headers(&headers);
    let tier = parse_tier(&req.tier).map_err(map_domain_error)?;

    let config = service
        .change_tier(&slug, tier, &auth)
        .await
        .map_err(map_domain_error)?;

    let dto = PageConfigDto::from_config(&slug, &config).map_err(map_domain_error)?;
    Ok(Json(dto))
}

/// Publish or unpublish a page
pub async fn set_published(
    service: Arc<Service>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(req): Json<SetPublishedRequest>,
) -> Result<Json<PageSummaryDto>, Problem> {
    let auth = auth_from_headers(&headers);
    let summary = service
        .set_published(&slug, req.published, &auth)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(summary.into()))
}
