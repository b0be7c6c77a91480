//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage.

use crate::contract::{TemplateId, Tier};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// One stored page
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecord {
    pub slug: String,
    pub owner_id: Option<String>,
    /// Authoritative over any tier carried inside `document`
    pub tier: Tier,
    pub template_id: TemplateId,
    /// Page configuration in canonical or legacy shape
    pub document: serde_json::Value,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert rejected because the slug is already stored
#[derive(Debug, thiserror::Error)]
#[error("slug '{0}' is already taken")]
pub struct SlugTaken(pub String);

/// Repository for pages
#[async_trait]
pub trait PageRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PageRecord>>;

    /// Insert a new page; fails with [`SlugTaken`] if the slug is stored
    async fn insert(&self, record: &PageRecord) -> Result<PageRecord>;

    /// Replace an existing page; fails if the slug is unknown
    async fn update(&self, record: &PageRecord) -> Result<PageRecord>;

    async fn exists(&self, slug: &str) -> Result<bool>;

    /// All pages ordered by slug
    async fn list_all(&self) -> Result<Vec<PageRecord>>;
}
