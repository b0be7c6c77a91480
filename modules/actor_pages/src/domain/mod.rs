//! Domain layer - business logic and services

pub mod adapter;
pub mod document;
pub mod events;
pub mod repository;
pub mod router;
pub mod sections;
pub mod service;
pub mod tier_policy;
pub mod validation;

pub use document::StoredPageDocument;
pub use events::{EventPublisher, NoOpEventPublisher, PageEvent, TracingEventPublisher};
pub use repository::{PageRecord, PageRepository, SlugTaken};
pub use router::TenantRouter;
pub use service::Service;
pub use tier_policy::{ContentKind, Limit, TierPolicy, Visible};
