//! Common test utilities and shared page fixtures

#![allow(dead_code)]

use actor_pages::contract::*;
use actor_pages::domain::{NoOpEventPublisher, PageRecord, Service};
use actor_pages::{Config, InMemoryPageRepository};
use chrono::Utc;
use std::sync::Arc;

pub const OWNER: &str = "user-jordan";

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub fn owner() -> AuthContext {
    AuthContext::owner(Some(OWNER.to_string()))
}

pub fn admin() -> AuthContext {
    AuthContext::admin(Some("admin-1".to_string()))
}

pub fn image(id: &str) -> ImageItem {
    ImageItem {
        id: id.to_string(),
        url: format!("https://cdn.example.com/{id}.jpg"),
        alt: None,
    }
}

pub fn reel(id: &str) -> ReelItem {
    ReelItem {
        id: id.to_string(),
        title: format!("Reel {id}"),
        vimeo_url: format!("https://player.vimeo.com/video/{}", 1000 + id.len()),
        project_label: None,
    }
}

pub fn project(id: &str, medium: ProjectMedium) -> ProjectItem {
    ProjectItem {
        id: id.to_string(),
        title: format!("Project {id}"),
        role: "Lead".to_string(),
        year: Some("2024".to_string()),
        medium,
        ..ProjectItem::default()
    }
}

/// A page with more content than any capped tier displays:
/// 5 headshots (hero plus 4 gallery images), 3 reels, 10 credits,
/// 8 BTS images and one rep.
pub fn full_page(tier: Tier) -> TenantPageConfig {
    let mut config = TenantPageConfig::new_for_tier("Jordan Avery", tier);
    config.hero.headshot_url = "https://cdn.example.com/hero.jpg".to_string();
    config.hero.reps = vec![RepInfo {
        label: "Talent Agent".to_string(),
        company: "Bright Talent".to_string(),
        email: Some("agent@bright.example.com".to_string()),
        ..RepInfo::default()
    }];
    config.contact = ContactConfig {
        parent_email: "parent@example.com".to_string(),
        show_reps: true,
    };
    config.headshots.galleries = vec![
        HeadshotGallery {
            id: "commercial".to_string(),
            label: "Commercial".to_string(),
            images: vec![image("c1"), image("c2")],
        },
        HeadshotGallery {
            id: "theatrical".to_string(),
            label: "Theatrical".to_string(),
            images: vec![image("t1"), image("t2")],
        },
    ];
    config.reels.items = vec![reel("r1"), reel("r2"), reel("r3")];
    config.projects.items = (0..10)
        .map(|i| {
            let medium = ProjectMedium::ALL[i % ProjectMedium::ALL.len()];
            project(&format!("p{i}"), medium)
        })
        .collect();
    config.bts.albums = vec![Album {
        id: "set".to_string(),
        label: "On Set".to_string(),
        images: (0..8).map(|i| image(&format!("b{i}"))).collect(),
    }];
    config
}

/// Stored record holding `document` as-is
pub fn record(slug: &str, tier: Tier, document: serde_json::Value, published: bool) -> PageRecord {
    let now = Utc::now();
    PageRecord {
        slug: slug.to_string(),
        owner_id: Some(OWNER.to_string()),
        tier,
        template_id: TemplateId::for_tier(tier),
        document,
        is_published: published,
        created_at: now,
        updated_at: now,
    }
}

pub fn canonical_record(slug: &str, config: &TenantPageConfig, published: bool) -> PageRecord {
    let document = serde_json::to_value(config).unwrap();
    record(slug, config.tier, document, published)
}

/// Legacy document with 4 photos (the second marked primary), 2 reels,
/// 6 credits and a rep link
pub fn legacy_document() -> serde_json::Value {
    serde_json::json!({
        "plan": "free",
        "profile": {
            "displayName": "Sam Rivera",
            "tagline": "Comedic lead",
            "location": "Atlanta, GA"
        },
        "photos": [
            { "id": "p1", "url": "https://cdn.example.com/p1.jpg" },
            { "id": "p2", "url": "https://cdn.example.com/p2.jpg", "isPrimary": true },
            { "id": "p3", "url": "https://cdn.example.com/p3.jpg" },
            { "id": "p4", "url": "https://cdn.example.com/p4.jpg" }
        ],
        "reels": [
            { "id": "r1", "title": "Comedy", "platform": "vimeo", "videoId": "76979871" },
            { "id": "r2", "title": "Drama", "platform": "youtube", "videoId": "dQw4w9WgXcQ" }
        ],
        "credits": [
            { "id": "c1", "category": "Film", "project": "Long Night", "role": "Lead", "year": 2023 },
            { "id": "c2", "category": "TV", "project": "Found", "role": "Guest" },
            { "id": "c3", "category": "Theatre", "project": "Our Town" },
            { "id": "c4", "category": "Voiceover", "project": "Game Ad" },
            { "id": "c5", "category": "Film", "project": "Short One" },
            { "id": "c6", "category": "Film", "project": "Short Two" }
        ],
        "links": [
            { "label": "Instagram", "url": "https://instagram.com/sam", "type": "social" },
            { "label": "Talent Agent: Bright Talent", "url": "mailto:agent@bright.example.com", "type": "rep" }
        ],
        "theme": "classic-dark"
    })
}

/// Service over an in-memory repository seeded with `records`
pub fn service_with(records: Vec<PageRecord>) -> Arc<Service> {
    let repo = Arc::new(InMemoryPageRepository::with_records(records));
    Arc::new(Service::new(
        repo,
        Arc::new(NoOpEventPublisher),
        &Config::default(),
    ))
}
