//! Actor Pages Module
//!
//! Tier-gated actor portfolio pages for Actor Page 101. A page is stored as a
//! configuration document (canonical or legacy shape), normalized on read,
//! rendered with the tier's visibility limits and served on its own
//! subdomain through hostname rewriting.

// Public exports
pub mod contract;
pub use contract::{
    client::ActorPagesApi, error::PagesError, AuthContext, LegacyTenantConfig, PageSummary,
    RenderedPage, RouteDecision, SectionKey, TemplateId, TenantPageConfig, Tier,
};

pub use api::native::NativeClient;
pub use api::rest::{register_routes, rewrite_layer};
pub use config::Config;
pub use domain::{Service, TenantRouter, TierPolicy};
pub use infra::storage::{InMemoryPageRepository, Migrator, SeaOrmPageRepository};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
