//! Domain events for actor pages
//!
//! Events are emitted after a page write succeeds. Publishing failures are
//! logged by the service and never fail the write.

use crate::contract::{ResumeMode, Tier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain event types for pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum PageEvent {
    PageCreated(PageCreatedEvent),
    PageConfigSaved(PageConfigSavedEvent),
    TierChanged(TierChangedEvent),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCreatedEvent {
    pub slug: String,
    pub tier: Tier,
    pub timestamp: DateTime<Utc>,
    /// User who performed the action (if available)
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfigSavedEvent {
    pub slug: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: Option<String>,
}

/// Event data for a tier transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierChangedEvent {
    pub slug: String,
    pub from: Tier,
    pub to: Tier,
    /// Set when the stored resume mode was no longer valid on `to`
    pub resume_mode_coerced: Option<ResumeMode>,
    pub timestamp: DateTime<Utc>,
    pub user_id: Option<String>,
}

impl PageEvent {
    pub fn created(slug: &str, tier: Tier, user_id: Option<String>) -> Self {
        PageEvent::PageCreated(PageCreatedEvent {
            slug: slug.to_string(),
            tier,
            timestamp: Utc::now(),
            user_id,
        })
    }

    pub fn config_saved(slug: &str, user_id: Option<String>) -> Self {
        PageEvent::PageConfigSaved(PageConfigSavedEvent {
            slug: slug.to_string(),
            timestamp: Utc::now(),
            user_id,
        })
    }

    pub fn tier_changed(
        slug: &str,
        from: Tier,
        to: Tier,
        resume_mode_coerced: Option<ResumeMode>,
        user_id: Option<String>,
    ) -> Self {
        PageEvent::TierChanged(TierChangedEvent {
            slug: slug.to_string(),
            from,
            to,
            resume_mode_coerced,
            timestamp: Utc::now(),
            user_id,
        })
    }

    pub fn slug(&self) -> &str {
        match self {
            PageEvent::PageCreated(e) => &e.slug,
            PageEvent::PageConfigSaved(e) => &e.slug,
            PageEvent::TierChanged(e) => &e.slug,
        }
    }
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: PageEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: PageEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Publisher that writes events to the log
pub struct TracingEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: PageEvent) -> anyhow::Result<()> {
        let payload = serde_json::to_string(&event)?;
        tracing::info!(slug = event.slug(), event = %payload, "Page event");
        Ok(())
    }
}
