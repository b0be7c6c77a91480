//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with actor pages.
//! NO HTTP - direct function calls for performance.

use super::{
    error::PagesError,
    model::{AuthContext, PageSummary, TenantPageConfig, Tier},
    render::RenderedPage,
    route::RouteDecision,
};
use async_trait::async_trait;

/// Actor pages API for inter-module communication
#[async_trait]
pub trait ActorPagesApi: Send + Sync {
    /// Create a page with the default configuration for `tier`
    async fn create_page(
        &self,
        slug: &str,
        display_name: &str,
        tier: Tier,
        auth: &AuthContext,
    ) -> Result<TenantPageConfig, PagesError>;

    /// Load a page's configuration, normalized to the canonical shape (owner or admin)
    async fn get_page_config(
        &self,
        slug: &str,
        auth: &AuthContext,
    ) -> Result<TenantPageConfig, PagesError>;

    /// Render the visible, tier-filtered view of a published page
    async fn render_page(&self, slug: &str) -> Result<RenderedPage, PagesError>;

    /// Store an edited configuration
    async fn save_page_config(
        &self,
        slug: &str,
        config: TenantPageConfig,
        auth: &AuthContext,
    ) -> Result<TenantPageConfig, PagesError>;

    /// Move a page to another tier (admin override or subscription change)
    async fn change_tier(
        &self,
        slug: &str,
        tier: Tier,
        auth: &AuthContext,
    ) -> Result<TenantPageConfig, PagesError>;

    /// Publish or unpublish a page
    async fn set_published(
        &self,
        slug: &str,
        published: bool,
        auth: &AuthContext,
    ) -> Result<PageSummary, PagesError>;

    /// Every stored page (admin only)
    async fn list_pages(&self, auth: &AuthContext) -> Result<Vec<PageSummary>, PagesError>;

    /// Decide where a request for `host` and `path` is served from
    fn resolve_route(&self, host: &str, path: &str) -> RouteDecision;
}
