//! Routing decision produced for an inbound hostname and path

use serde::{Deserialize, Serialize};

/// Where a request should be served from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum RouteDecision {
    /// Root domain or `www.`; served as-is
    Marketing,
    /// Dashboard subdomain; `path` is the dashboard-prefixed path
    Dashboard { path: String },
    /// Tenant subdomain; `path` is the public tenant-page route for `slug`
    TenantPage { slug: String, path: String },
    /// Local development, foreign hosts, static assets, or anything unparseable
    PassThrough,
}

impl RouteDecision {
    /// Path the request should be rewritten to, if any
    pub fn rewrite_path(&self) -> Option<&str> {
        match self {
            RouteDecision::Dashboard { path } | RouteDecision::TenantPage { path, .. } => {
                Some(path)
            }
            RouteDecision::Marketing | RouteDecision::PassThrough => None,
        }
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            RouteDecision::TenantPage { slug, .. } => Some(slug),
            _ => None,
        }
    }
}
