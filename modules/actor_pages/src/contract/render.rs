//! Rendered page models handed to the presentation layer
//!
//! A rendered page is the visible, tier-filtered and ordered view of a
//! `TenantPageConfig`. Nothing here is persisted.

use super::model::{
    Album, HeadshotGallery, ProjectItem, ProjectMedium, ReelItem, RepInfo, ResumeMode,
    SectionKey, SocialLink, TemplateId, Tier,
};
use serde::{Deserialize, Serialize};

/// Upsell card shown for a feature the tier does not include
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedCard {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    pub tier: Tier,
    pub template_id: TemplateId,
    /// Visible sections in display order
    pub sections: Vec<RenderedSection>,
    /// Sections hidden entirely by the tier
    pub locked_sections: Vec<SectionKey>,
    pub locked_cards: Vec<LockedCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_prompt: Option<String>,
}

impl RenderedPage {
    pub fn section(&self, key: SectionKey) -> Option<&RenderedSection> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn section_keys(&self) -> Vec<SectionKey> {
        self.sections.iter().map(|s| s.key).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSection {
    pub key: SectionKey,
    /// True when the tier withheld part of this section's content
    pub upsell: bool,
    pub content: SectionContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SectionContent {
    Hero(HeroContent),
    Headshots(HeadshotsContent),
    Reels(ReelsContent),
    Bts(BtsContent),
    Projects(ProjectsContent),
    Resume(ResumeContent),
    Contact(ContactContent),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headshot_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casting_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub union_status: Option<String>,
    pub recent_credits: Vec<String>,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadshotsContent {
    /// Hero headshot, counted toward the tier's headshot total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_url: Option<String>,
    /// Visible gallery images, still grouped by gallery
    pub galleries: Vec<HeadshotGallery>,
    /// Headshots stored, hero included
    pub total: usize,
    pub visible: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelsContent {
    pub items: Vec<ReelItem>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BtsContent {
    pub albums: Vec<Album>,
    pub total: usize,
    pub visible: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGroup {
    pub medium: ProjectMedium,
    pub items: Vec<ProjectItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsContent {
    pub groups: Vec<ProjectGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredResume {
    pub film_tv_credits: Vec<String>,
    pub theatre_credits: Vec<String>,
    pub training: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    /// Mode the page is displayed in, which may differ from the stored mode
    pub mode: ResumeMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured: Option<StructuredResume>,
    /// Credit list, limited by tier
    pub credits: Vec<ProjectItem>,
    pub credits_total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub parent_email: String,
    pub reps: Vec<RepInfo>,
}
