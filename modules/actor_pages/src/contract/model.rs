//! Canonical page configuration models
//!
//! `TenantPageConfig` is the normalized shape used for rendering. Field names
//! serialize in camelCase to match the JSON documents held by persistence.

use super::lenient;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Standard,
    Premium,
}

impl Tier {
    /// All tiers, lowest first
    pub const ALL: [Tier; 3] = [Tier::Free, Tier::Standard, Tier::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Standard => "standard",
            Tier::Premium => "premium",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tier name is not one of free/standard/premium
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid subscription tier '{0}', must be: free, standard, or premium")]
pub struct ParseTierError(pub String);

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Tier::Free),
            "standard" => Ok(Tier::Standard),
            "premium" => Ok(Tier::Premium),
            _ => Err(ParseTierError(s.to_string())),
        }
    }
}

/// Visual template identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    #[default]
    MiniPortfolio,
    StandardShowcase,
    PremiumCinematic,
    /// Any template id this crate does not know about
    #[serde(other)]
    Other,
}

impl TemplateId {
    /// Template a page gets when created on `tier`
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Free => TemplateId::MiniPortfolio,
            Tier::Standard => TemplateId::StandardShowcase,
            Tier::Premium => TemplateId::PremiumCinematic,
        }
    }

    /// Whether this template is the one intended for `tier`.
    ///
    /// Mismatches are tolerated everywhere; this only exists for callers that
    /// want to flag them.
    pub fn matches_tier(&self, tier: Tier) -> bool {
        *self == Self::for_tier(tier)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::MiniPortfolio => "mini-portfolio",
            TemplateId::StandardShowcase => "standard-showcase",
            TemplateId::PremiumCinematic => "premium-cinematic",
            TemplateId::Other => "other",
        }
    }
}

impl FromStr for TemplateId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "mini-portfolio" => TemplateId::MiniPortfolio,
            "standard-showcase" => TemplateId::StandardShowcase,
            "premium-cinematic" => TemplateId::PremiumCinematic,
            _ => TemplateId::Other,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeId {
    #[default]
    HollywoodNight,
    SoftLilac,
    WarmSlate,
    TealStage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontPreset {
    #[default]
    Classic,
    Rounded,
    Serif,
    Condensed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconStyle {
    Hex,
    #[default]
    Circle,
    RoundedSquare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraElement {
    PressSection,
    ProjectGallery,
    BtsAlbums,
    CustomCta,
}

/// Styling choices for a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub theme_id: ThemeId,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub heading_font: FontPreset,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub body_font: FontPreset,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub icon_style: IconStyle,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub accent_color_hex: Option<String>,
    #[serde(default, deserialize_with = "lenient::known_items")]
    pub extras_enabled: Vec<ExtraElement>,
}

impl ThemeConfig {
    /// Theme with classic fonts, circle icons and no extras
    pub fn plain(theme_id: ThemeId) -> Self {
        Self {
            theme_id,
            heading_font: FontPreset::Classic,
            body_font: FontPreset::Classic,
            icon_style: IconStyle::Circle,
            accent_color_hex: None,
            extras_enabled: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Youtube,
    Tiktok,
    Imdb,
    Email,
    Website,
    #[default]
    #[serde(other)]
    Other,
}

impl SocialPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Tiktok => "tiktok",
            SocialPlatform::Imdb => "imdb",
            SocialPlatform::Email => "email",
            SocialPlatform::Website => "website",
            SocialPlatform::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub platform: SocialPlatform,
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_name: Option<String>,
}

/// Agent or manager contact
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepInfo {
    /// "Talent Agent", "Manager"
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroConfig {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub headshot_url: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub age_range: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub brand_line: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub casting_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub union_status: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::known_items",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub recent_credits: Vec<String>,
    #[serde(default, deserialize_with = "lenient::known_items")]
    pub social_links: Vec<SocialLink>,
    /// Only rendered when the tier is not free
    #[serde(
        default,
        deserialize_with = "lenient::known_items",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub reps: Vec<RepInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub alt: Option<String>,
}

/// Named headshot gallery ("Commercial", "Theatrical")
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadshotGallery {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::known_items")]
    pub images: Vec<ImageItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeadshotsConfig {
    #[serde(default, deserialize_with = "lenient::known_items")]
    pub galleries: Vec<HeadshotGallery>,
}

impl HeadshotsConfig {
    /// Every gallery image in stored order, galleries first to last
    pub fn images(&self) -> impl Iterator<Item = &ImageItem> {
        self.galleries.iter().flat_map(|g| g.images.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    /// Embeddable video URL
    #[serde(default, deserialize_with = "lenient::string")]
    pub vimeo_url: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub project_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReelsConfig {
    #[serde(default, deserialize_with = "lenient::known_items")]
    pub items: Vec<ReelItem>,
}

/// Behind-the-scenes album
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::known_items")]
    pub images: Vec<ImageItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BtsConfig {
    #[serde(default, deserialize_with = "lenient::known_items")]
    pub albums: Vec<Album>,
}

impl BtsConfig {
    pub fn images(&self) -> impl Iterator<Item = &ImageItem> {
        self.albums.iter().flat_map(|a| a.images.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectMedium {
    Film,
    Tv,
    Theatre,
    Commercial,
    #[default]
    #[serde(other)]
    Other,
}

impl ProjectMedium {
    /// Display order used when projects are grouped by medium
    pub const ALL: [ProjectMedium; 5] = [
        ProjectMedium::Film,
        ProjectMedium::Tv,
        ProjectMedium::Theatre,
        ProjectMedium::Commercial,
        ProjectMedium::Other,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub medium: ProjectMedium,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub platform_or_company: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub poster_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectsConfig {
    #[serde(default, deserialize_with = "lenient::known_items")]
    pub items: Vec<ProjectItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeMode {
    #[default]
    ExternalLink,
    PdfEmbed,
    Structured,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeConfig {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub mode: ResumeMode,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub external_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub pdf_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::known_items",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub film_tv_credits: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::known_items",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub theatre_credits: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::known_items",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub training: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::known_items",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub skills: Vec<String>,
}

impl ResumeConfig {
    pub fn has_structured_content(&self) -> bool {
        !(self.film_tv_credits.is_empty()
            && self.theatre_credits.is_empty()
            && self.training.is_empty()
            && self.skills.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactConfig {
    #[serde(default, deserialize_with = "lenient::string")]
    pub parent_email: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub show_reps: bool,
}

/// Named content block of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Hero,
    Headshots,
    Reels,
    Bts,
    Projects,
    Resume,
    Contact,
}

/// Order used when a page has no stored order or may not reorder
pub const DEFAULT_SECTION_ORDER: [SectionKey; 7] = [
    SectionKey::Hero,
    SectionKey::Headshots,
    SectionKey::Reels,
    SectionKey::Bts,
    SectionKey::Projects,
    SectionKey::Resume,
    SectionKey::Contact,
];

/// Canonical configuration of one tenant's page.
///
/// Decoding is field by field: values of the wrong type fall back to the
/// field default and unknown list entries (section keys included) are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantPageConfig {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub tier: Tier,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub template_id: TemplateId,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme: Option<ThemeConfig>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub hero: HeroConfig,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub headshots: HeadshotsConfig,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub reels: ReelsConfig,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub bts: BtsConfig,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub projects: ProjectsConfig,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub resume: ResumeConfig,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub contact: ContactConfig,
    #[serde(
        default,
        deserialize_with = "lenient::known_items_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub section_order: Option<Vec<SectionKey>>,
}

impl TenantPageConfig {
    /// Empty page for a newly created tenant
    pub fn new_for_tier(name: impl Into<String>, tier: Tier) -> Self {
        Self {
            tier,
            template_id: TemplateId::for_tier(tier),
            theme: Some(ThemeConfig {
                icon_style: IconStyle::Hex,
                ..ThemeConfig::plain(ThemeId::HollywoodNight)
            }),
            hero: HeroConfig {
                name: name.into(),
                ..HeroConfig::default()
            },
            headshots: HeadshotsConfig::default(),
            reels: ReelsConfig::default(),
            bts: BtsConfig::default(),
            projects: ProjectsConfig::default(),
            resume: ResumeConfig {
                mode: if tier == Tier::Free {
                    ResumeMode::ExternalLink
                } else {
                    ResumeMode::PdfEmbed
                },
                ..ResumeConfig::default()
            },
            contact: ContactConfig::default(),
            section_order: None,
        }
    }
}

/// Listing entry for a stored page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub slug: String,
    pub display_name: String,
    pub tier: Tier,
    pub template_id: TemplateId,
    pub is_published: bool,
    /// Stored document still uses the legacy shape
    pub is_legacy: bool,
}

/// Caller identity as resolved by the auth collaborator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthContext {
    /// Admins may override tier and template
    pub is_admin: bool,
    /// Optional user identifier for audit logging
    pub user_id: Option<String>,
    /// Set when the call carries a subscription change from the payments collaborator
    pub is_subscription_signal: bool,
}

impl AuthContext {
    /// Page owner or anonymous caller
    pub fn owner(user_id: Option<String>) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    pub fn admin(user_id: Option<String>) -> Self {
        Self {
            is_admin: true,
            user_id,
            is_subscription_signal: false,
        }
    }

    /// Context used when the payments collaborator reports a tier transition
    pub fn subscription() -> Self {
        Self {
            is_admin: false,
            user_id: None,
            is_subscription_signal: true,
        }
    }

    /// Whether this caller may change a page's tier
    pub fn may_change_tier(&self) -> bool {
        self.is_admin || self.is_subscription_signal
    }

    /// Whether this caller may edit a page owned by `owner_id`.
    ///
    /// Pages without an owner are admin-only.
    pub fn may_edit(&self, owner_id: Option<&str>) -> bool {
        match owner_id {
            _ if self.is_admin => true,
            Some(owner) => self.user_id.as_deref() == Some(owner),
            None => false,
        }
    }
}
