//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    ActorPagesApi, AuthContext, PageSummary, PagesError, RenderedPage, RouteDecision,
    TenantPageConfig, Tier,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// Used for in-process communication without HTTP overhead, e.g. by the
/// payments collaborator reporting tier transitions.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ActorPagesApi for NativeClient {
    async fn create_page(
        &self,
        slug: &str,
        display_name: &str,
        tier: Tier,
        auth: &AuthContext,
    ) -> Result<TenantPageConfig, PagesError> {
        self.service
            .create_page(slug, display_name, tier, auth)
            .await
    }

    async fn get_page_config(
        &self,
        slug: &str,
        auth: &AuthContext,
    ) -> Result<TenantPageConfig, PagesError> {
        self.service.get_page_config(slug, auth).await
    }

    async fn render_page(&self, slug: &str) -> Result<RenderedPage, PagesError> {
        self.service.render_page(slug).await
    }

    async fn save_page_config(
        &self,
        slug: &str,
        config: TenantPageConfig,
        auth: &AuthContext,
    ) -> Result<TenantPageConfig, PagesError> {
        self.service.save_page_config(slug, config, auth).await
    }

    async fn change_tier(
        &self,
        slug: &str,
        tier: Tier,
        auth: &AuthContext,
    ) -> Result<TenantPageConfig, PagesError> {
        self.service.change_tier(slug, tier, auth).await
    }

    async fn set_published(
        &self,
        slug: &str,
        published: bool,
        auth: &AuthContext,
    ) -> Result<PageSummary, PagesError> {
        self.service.set_published(slug, published, auth).await
    }

    async fn list_pages(&self, auth: &AuthContext) -> Result<Vec<PageSummary>, PagesError> {
        self.service.list_pages(auth).await
    }

    fn resolve_route(&self, host: &str, path: &str) -> RouteDecision {
        self.service.resolve_route(host, path)
    }
}
