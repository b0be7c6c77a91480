//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Actor pages table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "actor_pages")]
pub struct Model {
    /// Tenant slug (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub slug: String,

    /// Owning user, if any
    pub owner_id: Option<String>,

    /// Subscription tier (free, standard, premium)
    pub tier: String,

    /// Visual template identifier
    pub template_id: String,

    /// Page configuration document, canonical or legacy shape
    pub config: Json,

    pub is_published: bool,

    /// Creation timestamp
    pub created_at: DateTimeUtc,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
