//! Domain service - business logic orchestration

use super::document::StoredPageDocument;
use super::events::{EventPublisher, PageEvent};
use super::repository::{PageRecord, PageRepository, SlugTaken};
use super::router::TenantRouter;
use super::sections;
use super::tier_policy::TierPolicy;
use super::validation::{validate_page_config, validate_slug};
use crate::config::Config;
use crate::contract::{
    AuthContext, PageSummary, PagesError, RenderedPage, RouteDecision, TemplateId,
    TenantPageConfig, Tier,
};
use std::sync::Arc;

/// Domain service for actor pages
pub struct Service {
    repo: Arc<dyn PageRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    router: TenantRouter,
    /// Subdomains that can never be tenant slugs
    reserved_slugs: Vec<String>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        repo: Arc<dyn PageRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        config: &Config,
    ) -> Self {
        let reserved_slugs = config
            .dashboard_subdomains
            .iter()
            .chain(&config.marketing_subdomains)
            .map(|s| s.to_ascii_lowercase())
            .collect();

        Self {
            repo,
            event_publisher,
            router: TenantRouter::new(config),
            reserved_slugs,
        }
    }

    pub fn router(&self) -> &TenantRouter {
        &self.router
    }

    // ===== Page Operations =====

    /// Create a draft page with the default configuration for `tier`
    pub async fn create_page(
        &self,
        slug: &str,
        display_name: &str,
        tier: Tier,
        auth: &AuthContext,
    ) -> Result<TenantPageConfig, PagesError> {
        validate_slug(slug)?;
        if self.reserved_slugs.iter().any(|r| r == slug) {
            return Err(PagesError::validation(format!("slug '{slug}' is reserved")));
        }
        if auth.user_id.is_none() && !auth.is_admin {
            return Err(PagesError::Forbidden {
                reason: "creating a page requires a signed-in user".to_string(),
            });
        }
        if tier != Tier::Free && !auth.may_change_tier() {
            return Err(PagesError::Forbidden {
                reason: format!("only an admin may create a {tier} page"),
            });
        }

        let config = TenantPageConfig::new_for_tier(display_name.trim(), tier);
        validate_page_config(&config)?;

        if self.repo.exists(slug).await.map_err(internal)? {
            return Err(PagesError::Conflict {
                reason: format!("slug '{slug}' is already taken"),
            });
        }

        let now = chrono::Utc::now();
        let record = PageRecord {
            slug: slug.to_string(),
            owner_id: auth.user_id.clone(),
            tier,
            template_id: config.template_id,
            document: to_document(&config)?,
            is_published: false,
            created_at: now,
            updated_at: now,
        };
        if let Err(e) = self.repo.insert(&record).await {
            return Err(if e.is::<SlugTaken>() {
                PagesError::Conflict {
                    reason: e.to_string(),
                }
            } else {
                internal(e)
            });
        }

        tracing::info!(slug, %tier, "Page created");
        self.publish(PageEvent::created(slug, tier, auth.user_id.clone()))
            .await;

        Ok(config)
    }

    /// Canonical configuration of a page, whatever shape it is stored in.
    ///
    /// This is the unfiltered editing view, so only the owner or an admin
    /// may read it.
    pub async fn get_page_config(
        &self,
        slug: &str,
        auth: &AuthContext,
    ) -> Result<TenantPageConfig, PagesError> {
        let record = self.find(slug).await?;
        ensure_may_edit(&record, auth)?;
        Ok(config_of(&record))
    }

    /// Visible view of a published page
    pub async fn render_page(&self, slug: &str) -> Result<RenderedPage, PagesError> {
        let record = self.find(slug).await?;
        if !record.is_published {
            return Err(PagesError::page_not_found(slug));
        }

        let config = config_of(&record);
        let policy = TierPolicy::for_tier(config.tier);
        Ok(sections::render(&config, &policy))
    }

    /// Store an edited configuration.
    ///
    /// Non-admin callers cannot change tier or template; the stored values
    /// are kept. The resume mode is stored as submitted.
    pub async fn save_page_config(
        &self,
        slug: &str,
        mut config: TenantPageConfig,
        auth: &AuthContext,
    ) -> Result<TenantPageConfig, PagesError> {
        let mut record = self.find(slug).await?;
        ensure_may_edit(&record, auth)?;
        validate_page_config(&config)?;

        if auth.is_admin {
            if config.tier != record.tier || config.template_id != record.template_id {
                tracing::info!(
                    slug,
                    user_id = auth.user_id.as_deref().unwrap_or("unknown"),
                    tier = %config.tier,
                    template_id = config.template_id.as_str(),
                    "Admin override of tier or template"
                );
            }
            record.tier = config.tier;
            record.template_id = config.template_id;
        } else {
            if config.tier != record.tier {
                tracing::debug!(slug, requested = %config.tier, "Ignoring tier change from owner");
            }
            config.tier = record.tier;
            config.template_id = record.template_id;
        }

        record.document = to_document(&config)?;
        record.updated_at = chrono::Utc::now();
        self.repo.update(&record).await.map_err(internal)?;

        self.publish(PageEvent::config_saved(slug, auth.user_id.clone()))
            .await;
        Ok(config)
    }

    /// Move a page to `tier`.
    ///
    /// The stored resume mode is coerced when the new tier no longer allows
    /// it, and a template still at the old tier's default follows the tier.
    /// A stored document that cannot be decoded is left as it is; only the
    /// record's tier and template change.
    pub async fn change_tier(
        &self,
        slug: &str,
        tier: Tier,
        auth: &AuthContext,
    ) -> Result<TenantPageConfig, PagesError> {
        if !auth.may_change_tier() {
            return Err(PagesError::Forbidden {
                reason: "tier can only be changed by an admin or a subscription update"
                    .to_string(),
            });
        }

        let mut record = self.find(slug).await?;
        let from = record.tier;
        if record.template_id.matches_tier(from) {
            record.template_id = TemplateId::for_tier(tier);
        }
        record.tier = tier;

        let mut coerced = None;
        let config = match StoredPageDocument::decode(record.document.clone()) {
            Ok(document) => {
                let mut config = document.normalize();
                let mode = TierPolicy::for_tier(tier).resume_mode_for(config.resume.mode);
                coerced = (mode != config.resume.mode).then_some(mode);
                config.resume.mode = mode;
                config.tier = tier;
                config.template_id = record.template_id;
                record.document = to_document(&config)?;
                config
            }
            Err(e) => {
                tracing::warn!(slug, error = %e, "Stored document is undecodable, changing tier only");
                config_of(&record)
            }
        };
        record.updated_at = chrono::Utc::now();
        self.repo.update(&record).await.map_err(internal)?;

        tracing::info!(
            slug,
            %from,
            to = %tier,
            subscription = auth.is_subscription_signal,
            "Page tier changed"
        );
        self.publish(PageEvent::tier_changed(
            slug,
            from,
            tier,
            coerced,
            auth.user_id.clone(),
        ))
        .await;

        Ok(config)
    }

    pub async fn set_published(
        &self,
        slug: &str,
        published: bool,
        auth: &AuthContext,
    ) -> Result<PageSummary, PagesError> {
        let mut record = self.find(slug).await?;
        ensure_may_edit(&record, auth)?;

        if record.is_published != published {
            record.is_published = published;
            record.updated_at = chrono::Utc::now();
            self.repo.update(&record).await.map_err(internal)?;
            tracing::info!(slug, published, "Page visibility changed");
        }

        Ok(summary_of(&record))
    }

    pub async fn list_pages(&self, auth: &AuthContext) -> Result<Vec<PageSummary>, PagesError> {
        if !auth.is_admin {
            return Err(PagesError::Forbidden {
                reason: "listing pages requires admin".to_string(),
            });
        }

        let records = self.repo.list_all().await.map_err(internal)?;
        Ok(records.iter().map(summary_of).collect())
    }

    pub fn resolve_route(&self, host: &str, path: &str) -> RouteDecision {
        self.router.route(host, path)
    }

    // ===== Helpers =====

    async fn find(&self, slug: &str) -> Result<PageRecord, PagesError> {
        self.repo
            .find_by_slug(slug)
            .await
            .map_err(internal)?
            .ok_or_else(|| PagesError::page_not_found(slug))
    }

    async fn publish(&self, event: PageEvent) {
        if let Err(e) = self.event_publisher.publish(event).await {
            tracing::warn!(error = %e, "Failed to publish page event");
        }
    }
}

/// Normalized config with the record's tier and template applied
fn config_of(record: &PageRecord) -> TenantPageConfig {
    let mut config = StoredPageDocument::from_value(record.document.clone()).normalize();
    config.tier = record.tier;
    config.template_id = record.template_id;
    config
}

fn summary_of(record: &PageRecord) -> PageSummary {
    let document = StoredPageDocument::from_value(record.document.clone());
    let is_legacy = document.is_legacy();
    PageSummary {
        slug: record.slug.clone(),
        display_name: document.normalize().hero.name,
        tier: record.tier,
        template_id: record.template_id,
        is_published: record.is_published,
        is_legacy,
    }
}

fn ensure_may_edit(record: &PageRecord, auth: &AuthContext) -> Result<(), PagesError> {
    if auth.may_edit(record.owner_id.as_deref()) {
        Ok(())
    } else {
        Err(PagesError::Forbidden {
            reason: format!("page '{}' belongs to another user", record.slug),
        })
    }
}

fn to_document(config: &TenantPageConfig) -> Result<serde_json::Value, PagesError> {
    serde_json::to_value(config).map_err(|e| {
        tracing::error!(error = %e, "Failed to serialize page config");
        PagesError::Internal
    })
}

fn internal(e: anyhow::Error) -> PagesError {
    tracing::error!(error = %e, "Page repository failure");
    PagesError::Internal
}
