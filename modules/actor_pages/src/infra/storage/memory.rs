//! In-memory page repository.
//!
//! Backs local development and tests. Nothing survives a restart.

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::repository::{PageRecord, PageRepository, SlugTaken};

#[derive(Default)]
pub struct InMemoryPageRepository {
    pages: RwLock<BTreeMap<String, PageRecord>>,
}

impl InMemoryPageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing records, e.g. legacy documents
    pub fn with_records(records: impl IntoIterator<Item = PageRecord>) -> Self {
        let pages = records
            .into_iter()
            .map(|r| (r.slug.clone(), r))
            .collect();
        Self {
            pages: RwLock::new(pages),
        }
    }

    pub fn len(&self) -> usize {
        self.pages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.read().is_empty()
    }
}

#[async_trait]
impl PageRepository for InMemoryPageRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PageRecord>> {
        Ok(self.pages.read().get(slug).cloned())
    }

    async fn insert(&self, record: &PageRecord) -> Result<PageRecord> {
        let mut pages = self.pages.write();
        if pages.contains_key(&record.slug) {
            return Err(SlugTaken(record.slug.clone()).into());
        }
        pages.insert(record.slug.clone(), record.clone());
        Ok(record.clone())
    }

    async fn update(&self, record: &PageRecord) -> Result<PageRecord> {
        let mut pages = self.pages.write();
        match pages.get_mut(&record.slug) {
            Some(existing) => {
                *existing = record.clone();
                Ok(record.clone())
            }
            None => bail!("page '{}' does not exist", record.slug),
        }
    }

    async fn exists(&self, slug: &str) -> Result<bool> {
        Ok(self.pages.read().contains_key(slug))
    }

    async fn list_all(&self) -> Result<Vec<PageRecord>> {
        Ok(self.pages.read().values().cloned().collect())
    }
}
