//! SeaORM repository implementations

use crate::domain::repository::{PageRecord, PageRepository, SlugTaken};
use anyhow::{bail, Result};
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};
use std::sync::Arc;

use super::entity;

// ===== Page Repository =====

pub struct SeaOrmPageRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPageRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PageRepository for SeaOrmPageRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PageRecord>> {
        let result = entity::Entity::find_by_id(slug.to_string())
            .one(&*self.db)
            .await?;

        result.map(PageRecord::try_from).transpose()
    }

    async fn insert(&self, record: &PageRecord) -> Result<PageRecord> {
        if self.exists(&record.slug).await? {
            return Err(SlugTaken(record.slug.clone()).into());
        }

        // A concurrent insert can still win between the check and here
        let active: entity::ActiveModel = record.into();
        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    anyhow::Error::new(SlugTaken(record.slug.clone()))
                }
                _ => e.into(),
            })?;

        result.try_into()
    }

    async fn update(&self, record: &PageRecord) -> Result<PageRecord> {
        if !self.exists(&record.slug).await? {
            bail!("page '{}' does not exist", record.slug);
        }

        let active: entity::ActiveModel = record.into();
        let result = entity::Entity::update(active).exec(&*self.db).await?;

        result.try_into()
    }

    async fn exists(&self, slug: &str) -> Result<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::Slug.eq(slug))
            .count(&*self.db)
            .await?;

        Ok(count > 0)
    }

    async fn list_all(&self) -> Result<Vec<PageRecord>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Slug)
            .all(&*self.db)
            .await?;

        results.into_iter().map(PageRecord::try_from).collect()
    }
}
