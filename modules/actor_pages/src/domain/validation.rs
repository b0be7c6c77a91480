//! Slug and page configuration validation

use crate::contract::{PagesError, TenantPageConfig};

/// Longest slug that still fits in a DNS label
pub const MAX_SLUG_LEN: usize = 63;

/// Validate a tenant slug
///
/// Accepts DNS-label style slugs: lowercase ASCII letters, digits and `-`,
/// not starting or ending with `-`, at most 63 characters.
pub fn validate_slug(slug: &str) -> Result<(), PagesError> {
    if slug.is_empty() {
        return Err(PagesError::validation("slug cannot be empty"));
    }

    if slug.len() > MAX_SLUG_LEN {
        return Err(PagesError::validation(format!(
            "slug '{slug}' is longer than {MAX_SLUG_LEN} characters"
        )));
    }

    let is_valid = slug
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if !is_valid {
        return Err(PagesError::validation(format!(
            "slug '{slug}' contains invalid characters. Only lowercase letters, digits and '-' are allowed"
        )));
    }

    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(PagesError::validation(format!(
            "slug '{slug}' must not start or end with '-'"
        )));
    }

    Ok(())
}

/// Slug derived from a display name: lowercased, runs of anything other than
/// `a-z0-9` collapsed to `-`, leading and trailing dashes removed
pub fn generate_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.trim().to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug.truncate(MAX_SLUG_LEN);
    slug.trim_end_matches('-').to_string()
}

/// Checks applied to configurations submitted by owners
pub fn validate_page_config(config: &TenantPageConfig) -> Result<(), PagesError> {
    if config.hero.name.trim().is_empty() {
        return Err(PagesError::validation("hero name cannot be empty"));
    }

    if let Some(hex) = config.theme.as_ref().and_then(|t| t.accent_color_hex.as_deref()) {
        let digits = hex.strip_prefix('#').unwrap_or_default();
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PagesError::validation(format!(
                "accent color '{hex}' must be a #RRGGBB hex value"
            )));
        }
    }

    Ok(())
}
