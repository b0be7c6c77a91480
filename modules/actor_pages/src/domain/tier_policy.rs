//! Tier policy - per-tier content limits and feature gates
//!
//! A `TierPolicy` is computed once per request from the page's tier and passed
//! to every filtering call. Every limit is a pure function of the tier.
//! Truncation is always a prefix-take in stored order; excess content is never
//! deleted, only hidden at read time.

use crate::contract::{
    ContactConfig, LockedCard, RepInfo, ResumeMode, SectionKey, Tier, DEFAULT_SECTION_ORDER,
};

/// Kind of content a tier limit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Hero headshot plus gallery images
    Headshots,
    Reels,
    /// Credits / projects listed on the resume
    Credits,
    BtsImages,
    /// Non-primary photos of a legacy photo list
    GalleryPhotos,
}

impl ContentKind {
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Headshots,
        ContentKind::Reels,
        ContentKind::Credits,
        ContentKind::BtsImages,
        ContentKind::GalleryPhotos,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Capped(usize),
    Unlimited,
}

impl Limit {
    /// How many of `len` stored items are visible
    pub fn visible_count(&self, len: usize) -> usize {
        match self {
            Limit::Capped(max) => len.min(*max),
            Limit::Unlimited => len,
        }
    }
}

/// Visible prefix of a stored collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visible<'a, T> {
    pub items: &'a [T],
    /// Number of items stored
    pub total: usize,
}

impl<'a, T> Visible<'a, T> {
    /// True when the tier hides some stored items
    pub fn more_available(&self) -> bool {
        self.items.len() < self.total
    }
}

/// Feature keys gated by tier outside the page itself
const STANDARD_FEATURES: &[&str] = &["vimeo_integration", "resume101"];
const PREMIUM_FEATURES: &[&str] = &[
    "vimeo_integration",
    "resume101",
    "audition_tracker",
    "advanced_analytics",
];

const FREE_LOCKED_CARDS: &[(&str, &str)] = &[
    (
        "Unlimited Headshots",
        "Showcase your full range with unlimited professional headshots.",
    ),
    (
        "Multiple Reels & Clips",
        "Upload multiple clips from different projects.",
    ),
    (
        "Behind-the-Scenes Albums",
        "Share your creative process with BTS photo albums.",
    ),
    ("PDF Resume Viewer", "Embed your resume directly on your site."),
    ("Rep Contact Info", "Display your agent and manager information."),
];

const STANDARD_LOCKED_CARDS: &[(&str, &str)] = &[
    (
        "Project Gallery",
        "Showcase all your film, TV, and theatre work with posters and details.",
    ),
    (
        "Structured Resume",
        "Full inline resume with credits, training, and skills beautifully formatted.",
    ),
    (
        "Unlimited BTS Albums",
        "Create multiple behind-the-scenes photo albums organized by project.",
    ),
    (
        "Unlimited Clips",
        "No limits on how many reels and clips you can showcase.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPolicy {
    tier: Tier,
}

impl TierPolicy {
    pub const fn for_tier(tier: Tier) -> Self {
        Self { tier }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn limit(&self, kind: ContentKind) -> Limit {
        use ContentKind::*;
        use Limit::*;

        match (self.tier, kind) {
            (Tier::Free, Headshots) => Capped(3),
            (Tier::Standard, Headshots) => Capped(6),
            (Tier::Premium, Headshots) => Unlimited,

            (Tier::Free, Reels) => Capped(1),
            (Tier::Standard, Reels) => Capped(4),
            (Tier::Premium, Reels) => Unlimited,

            (Tier::Free, Credits) => Capped(5),
            (Tier::Standard, Credits) => Capped(20),
            (Tier::Premium, Credits) => Unlimited,

            (Tier::Free, BtsImages) => Capped(0),
            (Tier::Standard, BtsImages) => Capped(6),
            (Tier::Premium, BtsImages) => Unlimited,

            (Tier::Free, GalleryPhotos) => Capped(2),
            (Tier::Standard, GalleryPhotos) => Capped(5),
            (Tier::Premium, GalleryPhotos) => Capped(10),
        }
    }

    /// First `limit(kind)` items of `items`, in stored order
    pub fn visible<'a, T>(&self, kind: ContentKind, items: &'a [T]) -> Visible<'a, T> {
        let count = self.limit(kind).visible_count(items.len());
        Visible {
            items: &items[..count],
            total: items.len(),
        }
    }

    /// Whether a section appears at all on this tier
    pub fn shows_section(&self, key: SectionKey) -> bool {
        match key {
            SectionKey::Bts => self.tier != Tier::Free,
            SectionKey::Projects => self.tier == Tier::Premium,
            _ => true,
        }
    }

    pub fn can_reorder_sections(&self) -> bool {
        self.tier != Tier::Free
    }

    /// Full display order of all sections.
    ///
    /// Free pages always get the default order. Otherwise the stored order is
    /// used with duplicates dropped, missing sections appended in default
    /// order, and the hero pinned first.
    pub fn section_order(&self, stored: Option<&[SectionKey]>) -> Vec<SectionKey> {
        let stored = match stored {
            Some(order) if self.can_reorder_sections() => order,
            _ => return DEFAULT_SECTION_ORDER.to_vec(),
        };

        let mut order = Vec::with_capacity(DEFAULT_SECTION_ORDER.len());
        order.push(SectionKey::Hero);
        for key in stored.iter().chain(DEFAULT_SECTION_ORDER.iter()) {
            if !order.contains(key) {
                order.push(*key);
            }
        }
        order
    }

    /// Reps are shown only above free, when enabled and present
    pub fn shows_reps(&self, contact: &ContactConfig, reps: &[RepInfo]) -> bool {
        self.tier != Tier::Free && contact.show_reps && !reps.is_empty()
    }

    pub fn allowed_resume_modes(&self) -> &'static [ResumeMode] {
        match self.tier {
            Tier::Free => &[ResumeMode::ExternalLink],
            Tier::Standard => &[ResumeMode::PdfEmbed],
            Tier::Premium => &[ResumeMode::PdfEmbed, ResumeMode::Structured],
        }
    }

    pub fn allows_resume_mode(&self, mode: ResumeMode) -> bool {
        self.allowed_resume_modes().contains(&mode)
    }

    /// Resume mode valid on this tier for a page stored with `mode`.
    ///
    /// Rendering uses this without touching storage; the editor stores the
    /// result when the tier changes.
    pub fn resume_mode_for(&self, mode: ResumeMode) -> ResumeMode {
        if self.allows_resume_mode(mode) {
            return mode;
        }
        match self.tier {
            Tier::Free => ResumeMode::ExternalLink,
            Tier::Standard | Tier::Premium => ResumeMode::PdfEmbed,
        }
    }

    /// Upsell cards for what this tier does not include
    pub fn locked_cards(&self) -> Vec<LockedCard> {
        let cards = match self.tier {
            Tier::Free => FREE_LOCKED_CARDS,
            Tier::Standard => STANDARD_LOCKED_CARDS,
            Tier::Premium => &[],
        };
        cards
            .iter()
            .map(|(title, description)| LockedCard {
                title: (*title).to_string(),
                description: (*description).to_string(),
            })
            .collect()
    }

    pub fn upgrade_prompt(&self) -> Option<&'static str> {
        match self.tier {
            Tier::Free => Some("Upgrade to Standard or Premium"),
            Tier::Standard => Some("Upgrade to Premium"),
            Tier::Premium => None,
        }
    }

    /// Account features (outside the page) available on this tier
    pub fn features(&self) -> &'static [&'static str] {
        match self.tier {
            Tier::Free => &[],
            Tier::Standard => STANDARD_FEATURES,
            Tier::Premium => PREMIUM_FEATURES,
        }
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features().contains(&feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capped(tier: Tier, kind: ContentKind) -> Option<usize> {
        match TierPolicy::for_tier(tier).limit(kind) {
            Limit::Capped(n) => Some(n),
            Limit::Unlimited => None,
        }
    }

    #[test]
    fn limits_match_product_table() {
        use ContentKind::*;
        let table = [
            (Headshots, [Some(3), Some(6), None]),
            (Reels, [Some(1), Some(4), None]),
            (Credits, [Some(5), Some(20), None]),
            (BtsImages, [Some(0), Some(6), None]),
            (GalleryPhotos, [Some(2), Some(5), Some(10)]),
        ];
        for (kind, expected) in table {
            for (tier, want) in Tier::ALL.into_iter().zip(expected) {
                assert_eq!(capped(tier, kind), want, "{tier} {kind:?}");
            }
        }
    }

    #[test]
    fn visible_is_a_prefix() {
        let reels = vec!["a", "b", "c"];
        let visible = TierPolicy::for_tier(Tier::Free).visible(ContentKind::Reels, &reels);
        assert_eq!(visible.items, &["a"]);
        assert_eq!(visible.total, 3);
        assert!(visible.more_available());

        let visible = TierPolicy::for_tier(Tier::Premium).visible(ContentKind::Reels, &reels);
        assert_eq!(visible.items, reels.as_slice());
        assert!(!visible.more_available());
    }

    #[test]
    fn empty_collection_yields_empty_visible_set() {
        let none: Vec<u8> = Vec::new();
        let visible = TierPolicy::for_tier(Tier::Standard).visible(ContentKind::Headshots, &none);
        assert!(visible.items.is_empty());
        assert!(!visible.more_available());
    }

    #[test]
    fn section_gates() {
        let free = TierPolicy::for_tier(Tier::Free);
        let standard = TierPolicy::for_tier(Tier::Standard);
        let premium = TierPolicy::for_tier(Tier::Premium);

        assert!(!free.shows_section(SectionKey::Bts));
        assert!(!free.shows_section(SectionKey::Projects));
        assert!(standard.shows_section(SectionKey::Bts));
        assert!(!standard.shows_section(SectionKey::Projects));
        assert!(premium.shows_section(SectionKey::Projects));
        assert!(free.shows_section(SectionKey::Resume));
    }

    #[test]
    fn free_tier_ignores_stored_order() {
        let stored = [SectionKey::Contact, SectionKey::Hero];
        let order = TierPolicy::for_tier(Tier::Free).section_order(Some(&stored));
        assert_eq!(order, DEFAULT_SECTION_ORDER.to_vec());
    }

    #[test]
    fn stored_order_is_sanitized() {
        let stored = [
            SectionKey::Reels,
            SectionKey::Contact,
            SectionKey::Hero,
            SectionKey::Reels,
        ];
        let order = TierPolicy::for_tier(Tier::Standard).section_order(Some(&stored));
        assert_eq!(
            order,
            vec![
                SectionKey::Hero,
                SectionKey::Reels,
                SectionKey::Contact,
                SectionKey::Headshots,
                SectionKey::Bts,
                SectionKey::Projects,
                SectionKey::Resume,
            ]
        );
    }

    #[test]
    fn absent_order_means_default() {
        let order = TierPolicy::for_tier(Tier::Premium).section_order(None);
        assert_eq!(order, DEFAULT_SECTION_ORDER.to_vec());
    }

    #[test]
    fn reps_need_paid_tier_and_opt_in() {
        let reps = vec![RepInfo {
            label: "Manager".into(),
            company: "Bohemia Group".into(),
            ..RepInfo::default()
        }];
        let shown = ContactConfig {
            parent_email: String::new(),
            show_reps: true,
        };
        let hidden = ContactConfig {
            show_reps: false,
            ..shown.clone()
        };

        assert!(!TierPolicy::for_tier(Tier::Free).shows_reps(&shown, &reps));
        assert!(TierPolicy::for_tier(Tier::Standard).shows_reps(&shown, &reps));
        assert!(!TierPolicy::for_tier(Tier::Premium).shows_reps(&hidden, &reps));
        assert!(!TierPolicy::for_tier(Tier::Premium).shows_reps(&shown, &[]));
    }

    #[test]
    fn resume_mode_coercion() {
        use ResumeMode::*;
        let free = TierPolicy::for_tier(Tier::Free);
        let standard = TierPolicy::for_tier(Tier::Standard);
        let premium = TierPolicy::for_tier(Tier::Premium);

        assert_eq!(free.resume_mode_for(Structured), ExternalLink);
        assert_eq!(free.resume_mode_for(PdfEmbed), ExternalLink);
        assert_eq!(standard.resume_mode_for(Structured), PdfEmbed);
        assert_eq!(standard.resume_mode_for(ExternalLink), PdfEmbed);
        assert_eq!(premium.resume_mode_for(ExternalLink), PdfEmbed);
        assert_eq!(premium.resume_mode_for(Structured), Structured);
        assert_eq!(premium.resume_mode_for(PdfEmbed), PdfEmbed);
    }

    #[test]
    fn locked_cards_per_tier() {
        let free = TierPolicy::for_tier(Tier::Free).locked_cards();
        assert_eq!(free.len(), 5);
        assert_eq!(free[0].title, "Unlimited Headshots");
        assert_eq!(free[4].title, "Rep Contact Info");

        let standard = TierPolicy::for_tier(Tier::Standard).locked_cards();
        assert_eq!(
            standard.iter().map(|c| c.title.as_str()).collect::<Vec<_>>(),
            vec![
                "Project Gallery",
                "Structured Resume",
                "Unlimited BTS Albums",
                "Unlimited Clips"
            ]
        );

        assert!(TierPolicy::for_tier(Tier::Premium).locked_cards().is_empty());
        assert_eq!(TierPolicy::for_tier(Tier::Premium).upgrade_prompt(), None);
    }

    #[test]
    fn account_features() {
        assert!(!TierPolicy::for_tier(Tier::Free).has_feature("resume101"));
        assert!(TierPolicy::for_tier(Tier::Standard).has_feature("resume101"));
        assert!(!TierPolicy::for_tier(Tier::Standard).has_feature("audition_tracker"));
        assert!(TierPolicy::for_tier(Tier::Premium).has_feature("audition_tracker"));
    }
}
