//! SeaORM repository tests against in-memory SQLite

use actor_pages::contract::*;
use actor_pages::domain::{NoOpEventPublisher, PageRecord, PageRepository, Service, SlugTaken};
use actor_pages::{Config, Migrator, SeaOrmPageRepository};
use chrono::{TimeZone, Utc};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

mod common;
use common::*;

async fn repository() -> SeaOrmPageRepository {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    SeaOrmPageRepository::new(Arc::new(db))
}

/// Record with second-precision timestamps so it compares equal after a trip
/// through the database
fn stored(slug: &str, document: serde_json::Value) -> PageRecord {
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    PageRecord {
        created_at: at,
        updated_at: at,
        ..record(slug, Tier::Standard, document, true)
    }
}

#[tokio::test]
async fn insert_find_and_list() {
    let repo = repository().await;
    let canonical = stored(
        "jordan",
        serde_json::to_value(full_page(Tier::Standard)).unwrap(),
    );
    let legacy = stored("amy", legacy_document());

    repo.insert(&canonical).await.unwrap();
    repo.insert(&legacy).await.unwrap();

    assert!(repo.exists("jordan").await.unwrap());
    assert!(!repo.exists("nobody").await.unwrap());
    assert_eq!(repo.find_by_slug("jordan").await.unwrap(), Some(canonical));
    assert_eq!(repo.find_by_slug("nobody").await.unwrap(), None);

    let slugs: Vec<_> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.slug)
        .collect();
    assert_eq!(slugs, ["amy", "jordan"]);
}

#[tokio::test]
async fn insert_rejects_taken_slug() {
    let repo = repository().await;
    let page = stored("jordan", legacy_document());

    repo.insert(&page).await.unwrap();
    let err = repo.insert(&page).await.unwrap_err();
    assert!(err.downcast_ref::<SlugTaken>().is_some(), "{err:#}");
}

#[tokio::test]
async fn update_replaces_existing_only() {
    let repo = repository().await;
    let mut page = stored("jordan", legacy_document());
    assert!(repo.update(&page).await.is_err());

    repo.insert(&page).await.unwrap();
    page.tier = Tier::Premium;
    page.template_id = TemplateId::PremiumCinematic;
    page.is_published = false;
    repo.update(&page).await.unwrap();

    assert_eq!(repo.find_by_slug("jordan").await.unwrap(), Some(page));
}

#[tokio::test]
async fn service_over_sqlite() {
    let repo = Arc::new(repository().await);
    let service = Service::new(
        repo.clone(),
        Arc::new(NoOpEventPublisher),
        &Config::default(),
    );

    service
        .create_page("casey", "Casey Morgan", Tier::Free, &owner())
        .await
        .unwrap();
    service
        .change_tier("casey", Tier::Standard, &AuthContext::subscription())
        .await
        .unwrap();

    let record = repo.find_by_slug("casey").await.unwrap().unwrap();
    assert_eq!(record.tier, Tier::Standard);
    assert_eq!(record.template_id, TemplateId::StandardShowcase);
    assert_eq!(record.owner_id.as_deref(), Some(OWNER));
    assert!(!record.is_published);

    let config = service.get_page_config("casey", &owner()).await.unwrap();
    assert_eq!(config.hero.name, "Casey Morgan");
    assert_eq!(config.resume.mode, ResumeMode::PdfEmbed);
}
