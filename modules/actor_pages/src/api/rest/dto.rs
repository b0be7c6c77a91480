//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Page DTOs =====

/// Page creation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePageRequest {
    /// Subdomain slug; generated from the display name when omitted
    #[schema(example = "jordan-avery")]
    #[serde(default)]
    pub slug: Option<String>,

    #[schema(example = "Jordan Avery")]
    pub display_name: String,

    /// Subscription tier, defaults to free
    #[schema(example = "free")]
    #[serde(default)]
    pub tier: Option<String>,
}

/// Tier change request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChangeTierRequest {
    #[schema(example = "premium")]
    pub tier: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SetPublishedRequest {
    pub published: bool,
}

/// Page configuration save request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SavePageConfigRequest {
    /// Canonical page configuration
    pub config: serde_json::Value,
}

/// Page configuration response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageConfigDto {
    pub slug: String,

    #[schema(example = "standard")]
    pub tier: String,

    #[schema(example = "standard-showcase")]
    pub template_id: String,

    /// Canonical page configuration
    pub config: serde_json::Value,
}

/// Page listing entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageSummaryDto {
    pub slug: String,
    pub display_name: String,
    pub tier: String,
    pub template_id: String,
    pub is_published: bool,
    /// Stored document still uses the legacy shape
    pub is_legacy: bool,
}

/// Page list response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageListResponse {
    pub items: Vec<PageSummaryDto>,
    pub total: usize,
}
