//! Entity to record mappers
//!
//! Conversions between SeaORM entities and domain records

use super::entity;
use crate::contract::{TemplateId, Tier};
use crate::domain::repository::PageRecord;
use anyhow::Context;

impl TryFrom<entity::Model> for PageRecord {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        let tier: Tier = entity
            .tier
            .parse()
            .with_context(|| format!("page '{}' has an invalid tier", entity.slug))?;
        let template_id = match entity.template_id.parse::<TemplateId>() {
            Ok(template_id) => template_id,
            Err(never) => match never {},
        };

        Ok(Self {
            slug: entity.slug,
            owner_id: entity.owner_id,
            tier,
            template_id,
            document: entity.config,
            is_published: entity.is_published,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl From<&PageRecord> for entity::ActiveModel {
    fn from(record: &PageRecord) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            slug: Set(record.slug.clone()),
            owner_id: Set(record.owner_id.clone()),
            tier: Set(record.tier.as_str().to_string()),
            template_id: Set(record.template_id.as_str().to_string()),
            config: Set(record.document.clone()),
            is_published: Set(record.is_published),
            created_at: Set(record.created_at),
            updated_at: Set(record.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn model(tier: &str, template_id: &str) -> entity::Model {
        entity::Model {
            slug: "jordan".into(),
            owner_id: None,
            tier: tier.into(),
            template_id: template_id.into(),
            config: json!({ "plan": "free" }),
            is_published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_to_record() {
        let record = PageRecord::try_from(model("premium", "premium-cinematic")).unwrap();
        assert_eq!(record.tier, Tier::Premium);
        assert_eq!(record.template_id, TemplateId::PremiumCinematic);
        assert_eq!(record.document, json!({ "plan": "free" }));
    }

    #[test]
    fn test_unknown_template_is_tolerated() {
        let record = PageRecord::try_from(model("free", "classic-1")).unwrap();
        assert_eq!(record.template_id, TemplateId::Other);
    }

    #[test]
    fn test_invalid_tier_is_an_error() {
        let err = PageRecord::try_from(model("gold", "mini-portfolio")).unwrap_err();
        assert!(err.to_string().contains("invalid tier"));
    }
}
