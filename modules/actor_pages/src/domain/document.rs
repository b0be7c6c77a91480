//! Persisted page documents in either shape
//!
//! Storage may hand back a canonical or a legacy document. Classification is
//! by marker keys. Unknown or mistyped canonical fields fall back to their
//! defaults; a document with no usable shape at all reads as an empty config.

use serde_json::Value;

use crate::contract::{LegacyTenantConfig, TenantPageConfig};
use crate::domain::adapter;

const CANONICAL_KEYS: &[&str] = &["tier", "hero", "templateId"];
const LEGACY_KEYS: &[&str] = &["plan", "profile", "photos"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredPageDocument {
    Canonical(TenantPageConfig),
    Legacy(LegacyTenantConfig),
}

impl StoredPageDocument {
    /// Classify and decode a stored JSON document.
    ///
    /// Canonical documents decode field by field, so this only fails when the
    /// document as a whole has the wrong shape, e.g. it is not an object.
    pub fn decode(value: Value) -> Result<Self, serde_json::Error> {
        if looks_legacy(&value) {
            serde_json::from_value(value).map(StoredPageDocument::Legacy)
        } else {
            serde_json::from_value(value).map(StoredPageDocument::Canonical)
        }
    }

    /// Like [`StoredPageDocument::decode`], reading an undecodable document as
    /// an empty one of the same shape, logged at warn.
    pub fn from_value(value: Value) -> Self {
        let legacy = looks_legacy(&value);
        Self::decode(value).unwrap_or_else(|e| {
            tracing::warn!(error = %e, legacy, "Undecodable page document, using defaults");
            if legacy {
                StoredPageDocument::Legacy(LegacyTenantConfig::default())
            } else {
                StoredPageDocument::Canonical(TenantPageConfig::new_for_tier(
                    String::new(),
                    Default::default(),
                ))
            }
        })
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, StoredPageDocument::Legacy(_))
    }

    /// Canonical form; a canonical document passes through unchanged
    pub fn normalize(self) -> TenantPageConfig {
        match self {
            StoredPageDocument::Canonical(config) => config,
            StoredPageDocument::Legacy(legacy) => adapter::to_canonical(&legacy),
        }
    }
}

/// Carries a legacy marker key and no canonical one
fn looks_legacy(value: &Value) -> bool {
    let has_any = |keys: &[&str]| {
        value
            .as_object()
            .is_some_and(|obj| keys.iter().any(|k| obj.contains_key(*k)))
    };
    !has_any(CANONICAL_KEYS) && has_any(LEGACY_KEYS)
}

impl From<TenantPageConfig> for StoredPageDocument {
    fn from(config: TenantPageConfig) -> Self {
        StoredPageDocument::Canonical(config)
    }
}

impl From<LegacyTenantConfig> for StoredPageDocument {
    fn from(legacy: LegacyTenantConfig) -> Self {
        StoredPageDocument::Legacy(legacy)
    }
}
