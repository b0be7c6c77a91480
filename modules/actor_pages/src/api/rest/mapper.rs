//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{self, PagesError, TenantPageConfig, Tier};

// ===== Page conversions =====

impl From<contract::PageSummary> for PageSummaryDto {
    fn from(summary: contract::PageSummary) -> Self {
        Self {
            slug: summary.slug,
            display_name: summary.display_name,
            tier: summary.tier.to_string(),
            template_id: summary.template_id.as_str().to_string(),
            is_published: summary.is_published,
            is_legacy: summary.is_legacy,
        }
    }
}

impl PageConfigDto {
    pub fn from_config(slug: &str, config: &TenantPageConfig) -> Result<Self, PagesError> {
        let value = serde_json::to_value(config).map_err(|e| {
            tracing::error!(error = %e, "Failed to serialize page config");
            PagesError::Internal
        })?;

        Ok(Self {
            slug: slug.to_string(),
            tier: config.tier.to_string(),
            template_id: config.template_id.as_str().to_string(),
            config: value,
        })
    }
}

impl TryFrom<SavePageConfigRequest> for TenantPageConfig {
    type Error = PagesError;

    fn try_from(req: SavePageConfigRequest) -> Result<Self, Self::Error> {
        serde_json::from_value(req.config)
            .map_err(|e| PagesError::validation(format!("invalid page config: {e}")))
    }
}

/// Parse a tier name from a request body
pub fn parse_tier(tier: &str) -> Result<Tier, PagesError> {
    tier.parse()
        .map_err(|e: contract::ParseTierError| PagesError::validation(e.to_string()))
}
