//! Contract error types for actor pages
//!
//! These errors are transport-agnostic and used for inter-module communication.
//! Conversions, tier filtering and routing never fail; only the service
//! operations that touch persistence or authorization produce these.

/// Actor pages domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PagesError {
    /// No page stored for the slug
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (page)
        resource: String,
        /// Resource identifier
        id: String,
    },

    /// Slug already taken
    #[error("Conflict: {reason}")]
    Conflict { reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Caller may not perform the operation (e.g. tier change by non-admin)
    #[error("Forbidden: {reason}")]
    Forbidden { reason: String },

    #[error("Internal error")]
    Internal,
}

impl PagesError {
    pub fn page_not_found(slug: &str) -> Self {
        Self::NotFound {
            resource: "page".to_string(),
            id: slug.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
