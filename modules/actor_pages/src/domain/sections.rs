//! Section renderer selector
//!
//! Turns a canonical config into the ordered, tier-filtered view the
//! presentation layer draws. Reading never mutates the stored config.

use crate::contract::{
    Album, BtsContent, ContactContent, HeadshotGallery, HeadshotsContent, HeroContent, ImageItem,
    ProjectGroup, ProjectMedium, ProjectsContent, ReelsContent, RenderedPage, RenderedSection,
    ResumeContent, ResumeMode, SectionContent, SectionKey, StructuredResume, Tier,
    TenantPageConfig,
};
use crate::domain::tier_policy::{ContentKind, TierPolicy};

/// Render `config` as seen on `policy`'s tier
pub fn render(config: &TenantPageConfig, policy: &TierPolicy) -> RenderedPage {
    let mut sections = Vec::new();
    let mut locked_sections = Vec::new();

    for key in policy.section_order(config.section_order.as_deref()) {
        if !policy.shows_section(key) {
            locked_sections.push(key);
            continue;
        }
        let section = render_section(key, config, policy);
        if section.upsell {
            tracing::debug!(
                section = ?key,
                tier = %policy.tier(),
                "Stored content exceeds what the tier displays"
            );
        }
        sections.push(section);
    }

    RenderedPage {
        tier: policy.tier(),
        template_id: config.template_id,
        sections,
        locked_sections,
        locked_cards: policy.locked_cards(),
        upgrade_prompt: policy.upgrade_prompt().map(str::to_string),
    }
}

fn render_section(key: SectionKey, config: &TenantPageConfig, policy: &TierPolicy) -> RenderedSection {
    let (upsell, content) = match key {
        SectionKey::Hero => (false, SectionContent::Hero(hero(config))),
        SectionKey::Headshots => {
            let content = headshots(config, policy);
            (content.visible < content.total, SectionContent::Headshots(content))
        }
        SectionKey::Reels => {
            let visible = policy.visible(ContentKind::Reels, &config.reels.items);
            (
                visible.more_available(),
                SectionContent::Reels(ReelsContent {
                    items: visible.items.to_vec(),
                    total: visible.total,
                }),
            )
        }
        SectionKey::Bts => {
            let content = bts(config, policy);
            (content.visible < content.total, SectionContent::Bts(content))
        }
        SectionKey::Projects => (false, SectionContent::Projects(projects(config))),
        SectionKey::Resume => {
            let content = resume(config, policy);
            (
                content.credits.len() < content.credits_total,
                SectionContent::Resume(content),
            )
        }
        SectionKey::Contact => {
            let reps = &config.hero.reps;
            let shown = policy.shows_reps(&config.contact, reps);
            (
                policy.tier() == Tier::Free && !reps.is_empty(),
                SectionContent::Contact(ContactContent {
                    parent_email: config.contact.parent_email.clone(),
                    reps: if shown { reps.clone() } else { Vec::new() },
                }),
            )
        }
    };

    RenderedSection { key, upsell, content }
}

fn hero(config: &TenantPageConfig) -> HeroContent {
    let hero = &config.hero;
    HeroContent {
        name: hero.name.clone(),
        headshot_url: Some(hero.headshot_url.clone()).filter(|u| !u.is_empty()),
        brand_line: hero.brand_line.clone(),
        casting_type: hero.casting_type.clone(),
        location: hero.location.clone(),
        age_range: hero.age_range.clone(),
        union_status: hero.union_status.clone(),
        recent_credits: hero.recent_credits.clone(),
        social_links: hero.social_links.clone(),
    }
}

/// The hero headshot counts toward the headshot limit ahead of any gallery
fn headshots(config: &TenantPageConfig, policy: &TierPolicy) -> HeadshotsContent {
    let primary_url = Some(config.hero.headshot_url.clone()).filter(|u| !u.is_empty());
    let hero_count = usize::from(primary_url.is_some());
    let total = hero_count + config.headshots.images().count();
    let visible = policy.limit(ContentKind::Headshots).visible_count(total);

    HeadshotsContent {
        primary_url: primary_url.filter(|_| visible > 0),
        galleries: take_grouped(&config.headshots.galleries, visible.saturating_sub(hero_count)),
        total,
        visible,
    }
}

fn bts(config: &TenantPageConfig, policy: &TierPolicy) -> BtsContent {
    let total = config.bts.images().count();
    let visible = policy.limit(ContentKind::BtsImages).visible_count(total);

    BtsContent {
        albums: take_grouped(&config.bts.albums, visible),
        total,
        visible,
    }
}

/// All projects grouped by medium, empty groups dropped
fn projects(config: &TenantPageConfig) -> ProjectsContent {
    let groups = ProjectMedium::ALL
        .into_iter()
        .filter_map(|medium| {
            let items: Vec<_> = config
                .projects
                .items
                .iter()
                .filter(|p| p.medium == medium)
                .cloned()
                .collect();
            (!items.is_empty()).then_some(ProjectGroup { medium, items })
        })
        .collect();

    ProjectsContent { groups }
}

fn resume(config: &TenantPageConfig, policy: &TierPolicy) -> ResumeContent {
    let stored = &config.resume;
    let mode = policy.resume_mode_for(stored.mode);
    let credits = policy.visible(ContentKind::Credits, &config.projects.items);

    ResumeContent {
        mode,
        external_url: stored
            .external_url
            .clone()
            .filter(|_| mode == ResumeMode::ExternalLink),
        pdf_url: stored.pdf_url.clone().filter(|_| mode == ResumeMode::PdfEmbed),
        structured: (mode == ResumeMode::Structured).then(|| StructuredResume {
            film_tv_credits: stored.film_tv_credits.clone(),
            theatre_credits: stored.theatre_credits.clone(),
            training: stored.training.clone(),
            skills: stored.skills.clone(),
        }),
        credits: credits.items.to_vec(),
        credits_total: credits.total,
    }
}

/// Image collection that keeps its grouping when truncated
trait ImageGroup: Sized {
    fn images(&self) -> &[ImageItem];
    fn with_images(&self, images: Vec<ImageItem>) -> Self;
}

impl ImageGroup for HeadshotGallery {
    fn images(&self) -> &[ImageItem] {
        &self.images
    }

    fn with_images(&self, images: Vec<ImageItem>) -> Self {
        HeadshotGallery {
            id: self.id.clone(),
            label: self.label.clone(),
            images,
        }
    }
}

impl ImageGroup for Album {
    fn images(&self) -> &[ImageItem] {
        &self.images
    }

    fn with_images(&self, images: Vec<ImageItem>) -> Self {
        Album {
            id: self.id.clone(),
            label: self.label.clone(),
            images,
        }
    }
}

/// First `allowance` images across groups in stored order; groups left
/// without images are dropped
fn take_grouped<G: ImageGroup>(groups: &[G], mut allowance: usize) -> Vec<G> {
    let mut out = Vec::new();
    for group in groups {
        if allowance == 0 {
            break;
        }
        let take = group.images().len().min(allowance);
        if take == 0 {
            continue;
        }
        allowance -= take;
        out.push(group.with_images(group.images()[..take].to_vec()));
    }
    out
}
