//! Legacy <-> canonical configuration adapter
//!
//! Both directions are total: missing or unknown fields default instead of
//! failing. The conversion is lossy in both directions, so
//! `to_legacy(to_canonical(x))` is not guaranteed to reproduce `x`:
//! - legacy `bio` lands in the short `castingType` field
//! - `Voiceover` credits become `commercial` projects, which come back as `Other`
//! - credit directors, reel project labels, BTS albums and the resume are one-sided
//! - every gallery collapses into a single "Gallery" on the way back

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::contract::{
    ContactConfig, CreditCategory, HeadshotGallery, HeadshotsConfig, HeroConfig, ImageItem,
    LegacyCredit, LegacyLink, LegacyPhoto, LegacyProfile, LegacyReel, LegacyTenantConfig,
    LegacyTheme, LinkType, ProjectItem, ProjectMedium, ProjectsConfig, ReelItem, ReelsConfig,
    RepInfo, ResumeConfig, ResumeMode, SocialLink, SocialPlatform, TemplateId, TenantPageConfig,
    ThemeConfig, ThemeId, VideoPlatform,
};
use crate::domain::tier_policy::{ContentKind, TierPolicy};

/// Id of the single gallery built from legacy photos
pub const LEGACY_GALLERY_ID: &str = "main";
pub const LEGACY_GALLERY_LABEL: &str = "Gallery";
pub const HERO_PHOTO_ID: &str = "hero-headshot";

static VIMEO_ID: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?:player\.vimeo\.com/video/|vimeo\.com/)(\d+)").ok());
static YOUTUBE_ID: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?(?:.*&)?v=|youtu\.be/|youtube\.com/embed/)([A-Za-z0-9_-]{6,})")
        .ok()
});

/// Convert a legacy document into the canonical shape
pub fn to_canonical(legacy: &LegacyTenantConfig) -> TenantPageConfig {
    let photos = normalize_primary(&legacy.photos);
    let (primary, gallery) = match photos.split_first() {
        Some((primary, rest)) => (Some(primary), rest),
        None => (None, &[][..]),
    };

    let galleries = if gallery.is_empty() {
        Vec::new()
    } else {
        vec![HeadshotGallery {
            id: LEGACY_GALLERY_ID.to_string(),
            label: LEGACY_GALLERY_LABEL.to_string(),
            images: gallery
                .iter()
                .map(|p| ImageItem {
                    id: p.id.clone(),
                    url: p.url.clone(),
                    alt: p.alt.clone(),
                })
                .collect(),
        }]
    };

    let (social_links, reps): (Vec<&LegacyLink>, Vec<&LegacyLink>) = legacy
        .links
        .iter()
        .partition(|l| l.link_type != Some(LinkType::Rep));
    let reps: Vec<RepInfo> = reps.into_iter().map(rep_from_link).collect();

    let profile = &legacy.profile;
    TenantPageConfig {
        tier: legacy.plan,
        template_id: TemplateId::for_tier(legacy.plan),
        theme: Some(ThemeConfig::plain(match legacy.theme {
            Some(LegacyTheme::ClassicLight) => ThemeId::SoftLilac,
            _ => ThemeId::HollywoodNight,
        })),
        hero: HeroConfig {
            name: profile.display_name.clone(),
            headshot_url: primary.map(|p| p.url.clone()).unwrap_or_default(),
            age_range: non_empty(&profile.age_range),
            location: non_empty(&profile.location),
            brand_line: non_empty(&profile.tagline),
            casting_type: non_empty(&profile.bio),
            union_status: non_empty(&profile.union_status),
            recent_credits: Vec::new(),
            social_links: social_links.into_iter().map(social_from_link).collect(),
            reps: reps.clone(),
        },
        headshots: HeadshotsConfig { galleries },
        reels: ReelsConfig {
            items: legacy.reels.iter().map(reel_from_legacy).collect(),
        },
        bts: Default::default(),
        projects: ProjectsConfig {
            items: legacy.credits.iter().map(project_from_credit).collect(),
        },
        resume: ResumeConfig {
            mode: ResumeMode::ExternalLink,
            ..ResumeConfig::default()
        },
        contact: ContactConfig {
            parent_email: String::new(),
            show_reps: !reps.is_empty(),
        },
        section_order: None,
    }
}

/// Convert a canonical config into the legacy shape
pub fn to_legacy(config: &TenantPageConfig) -> LegacyTenantConfig {
    let hero = &config.hero;

    let mut photos = Vec::new();
    if !hero.headshot_url.is_empty() {
        photos.push(LegacyPhoto {
            id: HERO_PHOTO_ID.to_string(),
            url: hero.headshot_url.clone(),
            alt: Some(format!("{} headshot", hero.name)),
            is_primary: true,
        });
    }
    for (g, gallery) in config.headshots.galleries.iter().enumerate() {
        for (i, image) in gallery.images.iter().enumerate() {
            photos.push(LegacyPhoto {
                id: format!("gallery-{g}-{i}"),
                url: image.url.clone(),
                alt: Some(
                    non_empty(&image.alt).unwrap_or_else(|| format!("{} photo", gallery.label)),
                ),
                is_primary: false,
            });
        }
    }

    let reels = config
        .reels
        .items
        .iter()
        .enumerate()
        .map(|(idx, reel)| reel_to_legacy(idx, reel))
        .collect();

    let credits = config
        .projects
        .items
        .iter()
        .enumerate()
        .map(|(idx, project)| LegacyCredit {
            id: if project.id.is_empty() {
                format!("credit-{idx}")
            } else {
                project.id.clone()
            },
            category: medium_to_category(project.medium),
            project: project.title.clone(),
            role: Some(project.role.clone()).filter(|r| !r.is_empty()),
            director: None,
            year: project.year.as_deref().and_then(parse_year),
        })
        .collect();

    let mut links: Vec<LegacyLink> = hero.social_links.iter().map(link_from_social).collect();
    links.extend(hero.reps.iter().map(|rep| LegacyLink {
        label: format!("{}: {}", rep.label, rep.company),
        url: match &rep.email {
            Some(email) if !email.is_empty() => format!("mailto:{email}"),
            _ => "#".to_string(),
        },
        link_type: Some(LinkType::Rep),
    }));

    let theme = match config.theme.as_ref().map(|t| t.theme_id) {
        Some(ThemeId::SoftLilac) | Some(ThemeId::WarmSlate) => LegacyTheme::ClassicLight,
        _ => LegacyTheme::ClassicDark,
    };

    LegacyTenantConfig {
        plan: config.tier,
        profile: LegacyProfile {
            display_name: hero.name.clone(),
            tagline: non_empty(&hero.brand_line),
            bio: non_empty(&hero.casting_type),
            location: non_empty(&hero.location),
            age_range: non_empty(&hero.age_range),
            union_status: non_empty(&hero.union_status),
        },
        photos,
        reels,
        credits,
        links,
        theme: Some(theme),
    }
}

/// Photos reordered so exactly one primary comes first.
///
/// The primary is the first photo marked primary, else the first photo. The
/// remaining photos keep their relative order and lose the primary flag.
pub fn normalize_primary(photos: &[LegacyPhoto]) -> Vec<LegacyPhoto> {
    let primary_idx = photos.iter().position(|p| p.is_primary).unwrap_or(0);

    let mut normalized = Vec::with_capacity(photos.len());
    if let Some(primary) = photos.get(primary_idx) {
        normalized.push(LegacyPhoto {
            is_primary: true,
            ..primary.clone()
        });
    }
    normalized.extend(
        photos
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != primary_idx)
            .map(|(_, p)| LegacyPhoto {
                is_primary: false,
                ..p.clone()
            }),
    );
    normalized
}

/// Legacy document reduced to what `tier` may display.
///
/// Keeps the primary photo plus the tier's gallery allowance, and the first
/// reels and credits up to the tier limits.
pub fn limit_legacy(legacy: &LegacyTenantConfig, policy: &TierPolicy) -> LegacyTenantConfig {
    let photos = normalize_primary(&legacy.photos);
    let photos = match photos.split_first() {
        Some((primary, gallery)) => std::iter::once(primary)
            .chain(policy.visible(ContentKind::GalleryPhotos, gallery).items)
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    LegacyTenantConfig {
        photos,
        reels: policy.visible(ContentKind::Reels, &legacy.reels).items.to_vec(),
        credits: policy
            .visible(ContentKind::Credits, &legacy.credits)
            .items
            .to_vec(),
        ..legacy.clone()
    }
}

pub fn extract_vimeo_id(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(caps) = VIMEO_ID.as_ref().and_then(|re| re.captures(trimmed)) {
        return caps.get(1).map(|m| m.as_str().to_string());
    }
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Some(trimmed.to_string());
    }
    None
}

pub fn extract_youtube_id(url: &str) -> Option<String> {
    YOUTUBE_ID
        .as_ref()
        .and_then(|re| re.captures(url.trim()))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn category_to_medium(category: CreditCategory) -> ProjectMedium {
    match category {
        CreditCategory::Film => ProjectMedium::Film,
        CreditCategory::Tv => ProjectMedium::Tv,
        CreditCategory::Theatre => ProjectMedium::Theatre,
        CreditCategory::Voiceover => ProjectMedium::Commercial,
        CreditCategory::Other => ProjectMedium::Other,
    }
}

pub fn medium_to_category(medium: ProjectMedium) -> CreditCategory {
    match medium {
        ProjectMedium::Film => CreditCategory::Film,
        ProjectMedium::Tv => CreditCategory::Tv,
        ProjectMedium::Theatre => CreditCategory::Theatre,
        ProjectMedium::Commercial | ProjectMedium::Other => CreditCategory::Other,
    }
}

/// Best-effort platform guess from a link's label, url and type
pub fn social_platform_for(link: &LegacyLink) -> SocialPlatform {
    let label = link.label.to_lowercase();
    let keywords = [
        ("imdb", SocialPlatform::Imdb),
        ("instagram", SocialPlatform::Instagram),
        ("youtube", SocialPlatform::Youtube),
        ("tiktok", SocialPlatform::Tiktok),
    ];
    if let Some((_, platform)) = keywords.iter().find(|(kw, _)| label.contains(kw)) {
        return *platform;
    }
    if label.contains("email") || link.url.starts_with("mailto:") {
        return SocialPlatform::Email;
    }
    if link.link_type == Some(LinkType::Website) {
        return SocialPlatform::Website;
    }
    SocialPlatform::Other
}

fn social_from_link(link: &LegacyLink) -> SocialLink {
    SocialLink {
        platform: social_platform_for(link),
        url: link.url.clone(),
        label: Some(link.label.clone()),
        icon_name: None,
    }
}

fn link_from_social(social: &SocialLink) -> LegacyLink {
    let label = match social.platform {
        SocialPlatform::Other => non_empty(&social.label).unwrap_or_else(|| "Link".to_string()),
        platform => capitalize(platform.as_str()).into_owned(),
    };
    LegacyLink {
        label,
        url: social.url.clone(),
        link_type: Some(if social.platform == SocialPlatform::Imdb {
            LinkType::Casting
        } else {
            LinkType::Social
        }),
    }
}

/// Rep from a `"<label>: <company>"` link
fn rep_from_link(link: &LegacyLink) -> RepInfo {
    let mut parts = link.label.split(':');
    let label = parts.next().unwrap_or_default();
    let company = parts.next().map(str::trim).unwrap_or_default();

    RepInfo {
        label: if label.is_empty() {
            "Representative".to_string()
        } else {
            label.to_string()
        },
        company: if company.is_empty() {
            link.label.clone()
        } else {
            company.to_string()
        },
        contact_name: None,
        email: link.url.strip_prefix("mailto:").map(str::to_string),
        phone: None,
    }
}

fn reel_from_legacy(reel: &LegacyReel) -> ReelItem {
    let video_id = reel.video_id.as_deref().filter(|id| !id.is_empty());
    let url = match (reel.platform, video_id) {
        (VideoPlatform::Youtube, Some(id)) => format!("https://www.youtube.com/watch?v={id}"),
        (_, Some(id)) => format!("https://vimeo.com/{id}"),
        (_, None) => reel.embed_url.clone().unwrap_or_default(),
    };
    ReelItem {
        id: reel.id.clone(),
        title: reel.title.clone().unwrap_or_default(),
        vimeo_url: url,
        project_label: None,
    }
}

fn reel_to_legacy(idx: usize, reel: &ReelItem) -> LegacyReel {
    let (platform, video_id, embed_url) = if let Some(id) = extract_vimeo_id(&reel.vimeo_url) {
        (VideoPlatform::Vimeo, Some(id), None)
    } else if let Some(id) = extract_youtube_id(&reel.vimeo_url) {
        (VideoPlatform::Youtube, Some(id), None)
    } else {
        (
            VideoPlatform::Other,
            None,
            Some(reel.vimeo_url.clone()).filter(|u| !u.is_empty()),
        )
    };

    LegacyReel {
        id: if reel.id.is_empty() {
            format!("reel-{idx}")
        } else {
            reel.id.clone()
        },
        title: Some(reel.title.clone()).filter(|t| !t.is_empty()),
        platform,
        video_id,
        embed_url,
    }
}

fn project_from_credit(credit: &LegacyCredit) -> ProjectItem {
    ProjectItem {
        id: credit.id.clone(),
        title: credit.project.clone(),
        role: credit.role.clone().unwrap_or_default(),
        year: credit.year.map(|y| y.to_string()),
        medium: category_to_medium(credit.category),
        platform_or_company: None,
        poster_url: None,
        description: None,
    }
}

/// Leading integer of a free-form year ("2023", "2023-24")
fn parse_year(year: &str) -> Option<i32> {
    let year = year.trim();
    let end = year
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(year.len(), |(i, _)| i);
    year[..end].parse().ok()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn capitalize(s: &str) -> Cow<'_, str> {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            Cow::Owned(first.to_uppercase().chain(chars).collect())
        }
        _ => Cow::Borrowed(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Tier;

    fn photo(id: &str, primary: bool) -> LegacyPhoto {
        LegacyPhoto {
            id: id.to_string(),
            url: format!("https://cdn.example/{id}.jpg"),
            alt: None,
            is_primary: primary,
        }
    }

    fn link(label: &str, url: &str, link_type: Option<LinkType>) -> LegacyLink {
        LegacyLink {
            label: label.to_string(),
            url: url.to_string(),
            link_type,
        }
    }

    #[test]
    fn primary_photo_becomes_hero_and_rest_form_gallery() {
        let legacy = LegacyTenantConfig {
            photos: vec![photo("a", false), photo("b", true), photo("c", false)],
            ..Default::default()
        };
        let config = to_canonical(&legacy);

        assert_eq!(config.hero.headshot_url, "https://cdn.example/b.jpg");
        let gallery = &config.headshots.galleries[0];
        assert_eq!(gallery.label, "Gallery");
        assert_eq!(
            gallery.images.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
    }

    #[test]
    fn no_primary_picks_first_and_many_primaries_pick_first_marked() {
        let none = normalize_primary(&[photo("a", false), photo("b", false)]);
        assert_eq!(none[0].id, "a");
        assert!(none[0].is_primary);
        assert!(!none[1].is_primary);

        let many = normalize_primary(&[photo("a", false), photo("b", true), photo("c", true)]);
        assert_eq!(
            many.iter().map(|p| (p.id.as_str(), p.is_primary)).collect::<Vec<_>>(),
            vec![("b", true), ("a", false), ("c", false)]
        );
        assert_eq!(normalize_primary(&many), many);
    }

    #[test]
    fn single_photo_yields_no_gallery() {
        let legacy = LegacyTenantConfig {
            photos: vec![photo("only", false)],
            ..Default::default()
        };
        let config = to_canonical(&legacy);
        assert_eq!(config.hero.headshot_url, "https://cdn.example/only.jpg");
        assert!(config.headshots.galleries.is_empty());
    }

    #[test]
    fn profile_maps_bio_into_casting_type() {
        let legacy = LegacyTenantConfig {
            plan: Tier::Premium,
            profile: LegacyProfile {
                display_name: "Jordan Avery".into(),
                tagline: Some("Comedic lead".into()),
                bio: Some("A long biography about Jordan".into()),
                location: Some(String::new()),
                ..Default::default()
            },
            ..Default::default()
        };
        let config = to_canonical(&legacy);

        assert_eq!(config.tier, Tier::Premium);
        assert_eq!(config.template_id, TemplateId::PremiumCinematic);
        assert_eq!(config.hero.name, "Jordan Avery");
        assert_eq!(config.hero.brand_line.as_deref(), Some("Comedic lead"));
        assert_eq!(
            config.hero.casting_type.as_deref(),
            Some("A long biography about Jordan")
        );
        assert_eq!(config.hero.location, None);
        assert_eq!(config.resume.mode, ResumeMode::ExternalLink);
    }

    #[test]
    fn voiceover_becomes_commercial_and_comes_back_as_other() {
        let legacy = LegacyTenantConfig {
            credits: vec![LegacyCredit {
                id: "c1".into(),
                category: CreditCategory::Voiceover,
                project: "Cartoon".into(),
                role: Some("Narrator".into()),
                director: Some("Sam".into()),
                year: Some(2022),
            }],
            ..Default::default()
        };
        let config = to_canonical(&legacy);
        let project = &config.projects.items[0];
        assert_eq!(project.medium, ProjectMedium::Commercial);
        assert_eq!(project.year.as_deref(), Some("2022"));

        let back = to_legacy(&config);
        assert_eq!(back.credits[0].category, CreditCategory::Other);
        assert_eq!(back.credits[0].director, None);
        assert_eq!(back.credits[0].year, Some(2022));
    }

    #[test]
    fn links_split_into_social_links_and_reps() {
        let legacy = LegacyTenantConfig {
            links: vec![
                link("My IMDb", "https://imdb.com/name/nm1", Some(LinkType::Casting)),
                link("Insta", "https://instagram.com/j", Some(LinkType::Social)),
                link("Instagram", "https://instagram.com/j", Some(LinkType::Social)),
                link("Write me", "mailto:j@example.com", None),
                link("Portfolio", "https://j.example", Some(LinkType::Website)),
                link(
                    "Talent Agent: CESD",
                    "mailto:agent@cesd.example",
                    Some(LinkType::Rep),
                ),
                link("Bohemia", "#", Some(LinkType::Rep)),
            ],
            ..Default::default()
        };
        let config = to_canonical(&legacy);

        let platforms: Vec<_> = config.hero.social_links.iter().map(|s| s.platform).collect();
        assert_eq!(
            platforms,
            vec![
                SocialPlatform::Imdb,
                SocialPlatform::Other,
                SocialPlatform::Instagram,
                SocialPlatform::Email,
                SocialPlatform::Website,
            ]
        );

        assert_eq!(config.hero.reps.len(), 2);
        assert_eq!(config.hero.reps[0].label, "Talent Agent");
        assert_eq!(config.hero.reps[0].company, "CESD");
        assert_eq!(
            config.hero.reps[0].email.as_deref(),
            Some("agent@cesd.example")
        );
        assert_eq!(config.hero.reps[1].label, "Bohemia");
        assert_eq!(config.hero.reps[1].company, "Bohemia");
        assert_eq!(config.hero.reps[1].email, None);
        assert!(config.contact.show_reps);
    }

    #[test]
    fn reels_convert_between_ids_and_urls() {
        let legacy = LegacyTenantConfig {
            reels: vec![
                LegacyReel {
                    id: "r1".into(),
                    title: Some("Drama".into()),
                    platform: VideoPlatform::Vimeo,
                    video_id: Some("76979871".into()),
                    embed_url: None,
                },
                LegacyReel {
                    id: "r2".into(),
                    platform: VideoPlatform::Youtube,
                    video_id: Some("dQw4w9WgXcQ".into()),
                    ..Default::default()
                },
                LegacyReel {
                    id: "r3".into(),
                    platform: VideoPlatform::Other,
                    embed_url: Some("https://cdn.example/reel.mp4".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let config = to_canonical(&legacy);
        let urls: Vec<_> = config.reels.items.iter().map(|r| r.vimeo_url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://vimeo.com/76979871",
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                "https://cdn.example/reel.mp4",
            ]
        );

        let back = to_legacy(&config);
        assert_eq!(back.reels[0].video_id.as_deref(), Some("76979871"));
        assert_eq!(back.reels[1].platform, VideoPlatform::Youtube);
        assert_eq!(back.reels[1].video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(back.reels[2].platform, VideoPlatform::Other);
        assert_eq!(
            back.reels[2].embed_url.as_deref(),
            Some("https://cdn.example/reel.mp4")
        );
    }

    #[test]
    fn vimeo_ids() {
        assert_eq!(
            extract_vimeo_id("https://player.vimeo.com/video/123456").as_deref(),
            Some("123456")
        );
        assert_eq!(extract_vimeo_id(" 987 ").as_deref(), Some("987"));
        assert_eq!(extract_vimeo_id("https://example.com/v/1"), None);
        assert_eq!(extract_vimeo_id(""), None);
    }

    #[test]
    fn youtube_ids() {
        assert_eq!(
            extract_youtube_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/embed/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(extract_youtube_id("https://vimeo.com/1"), None);
    }

    #[test]
    fn to_legacy_builds_photo_ids_links_and_theme() {
        let mut config = TenantPageConfig::new_for_tier("Jordan", Tier::Standard);
        config.hero.headshot_url = "https://cdn.example/hero.jpg".into();
        config.headshots.galleries = vec![
            HeadshotGallery {
                id: "com".into(),
                label: "Commercial".into(),
                images: vec![ImageItem {
                    id: "x".into(),
                    url: "https://cdn.example/x.jpg".into(),
                    alt: None,
                }],
            },
            HeadshotGallery {
                id: "th".into(),
                label: "Theatrical".into(),
                images: vec![ImageItem {
                    id: "y".into(),
                    url: "https://cdn.example/y.jpg".into(),
                    alt: Some("Moody".into()),
                }],
            },
        ];
        config.hero.social_links = vec![
            SocialLink {
                platform: SocialPlatform::Imdb,
                url: "https://imdb.com".into(),
                label: None,
                icon_name: None,
            },
            SocialLink {
                platform: SocialPlatform::Other,
                url: "https://linktr.ee/j".into(),
                label: None,
                icon_name: None,
            },
        ];
        config.hero.reps = vec![RepInfo {
            label: "Manager".into(),
            company: "Bohemia".into(),
            ..Default::default()
        }];
        config.theme = Some(ThemeConfig::plain(ThemeId::WarmSlate));

        let legacy = to_legacy(&config);
        let ids: Vec<_> = legacy.photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["hero-headshot", "gallery-0-0", "gallery-1-0"]);
        assert_eq!(legacy.photos[0].alt.as_deref(), Some("Jordan headshot"));
        assert_eq!(legacy.photos[1].alt.as_deref(), Some("Commercial photo"));
        assert_eq!(legacy.photos[2].alt.as_deref(), Some("Moody"));

        assert_eq!(legacy.links[0].label, "Imdb");
        assert_eq!(legacy.links[0].link_type, Some(LinkType::Casting));
        assert_eq!(legacy.links[1].label, "Link");
        assert_eq!(legacy.links[1].link_type, Some(LinkType::Social));
        assert_eq!(legacy.links[2].label, "Manager: Bohemia");
        assert_eq!(legacy.links[2].url, "#");
        assert_eq!(legacy.theme, Some(LegacyTheme::ClassicLight));
        assert_eq!(legacy.plan, Tier::Standard);
    }

    #[test]
    fn legacy_theme_maps_to_canonical_theme() {
        let light = LegacyTenantConfig {
            theme: Some(LegacyTheme::ClassicLight),
            ..Default::default()
        };
        assert_eq!(
            to_canonical(&light).theme.map(|t| t.theme_id),
            Some(ThemeId::SoftLilac)
        );
        let unset = LegacyTenantConfig::default();
        assert_eq!(
            to_canonical(&unset).theme.map(|t| t.theme_id),
            Some(ThemeId::HollywoodNight)
        );
    }

    #[test]
    fn limit_legacy_keeps_primary_plus_allowance() {
        let legacy = LegacyTenantConfig {
            plan: Tier::Free,
            photos: (0..6).map(|i| photo(&format!("p{i}"), i == 4)).collect(),
            reels: (0..3)
                .map(|i| LegacyReel {
                    id: format!("r{i}"),
                    ..Default::default()
                })
                .collect(),
            credits: (0..9)
                .map(|i| LegacyCredit {
                    id: format!("c{i}"),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };
        let limited = limit_legacy(&legacy, &TierPolicy::for_tier(Tier::Free));

        let ids: Vec<_> = limited.photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p4", "p0", "p1"]);
        assert_eq!(limited.reels.len(), 1);
        assert_eq!(limited.credits.len(), 5);
        assert_eq!(limited.credits[4].id, "c4");
    }

    #[test]
    fn empty_legacy_converts_without_content() {
        let config = to_canonical(&LegacyTenantConfig::default());
        assert_eq!(config.hero.headshot_url, "");
        assert!(config.headshots.galleries.is_empty());
        assert!(config.reels.items.is_empty());
        assert!(!config.contact.show_reps);

        let legacy = to_legacy(&config);
        assert!(legacy.photos.is_empty());
    }

    #[test]
    fn parse_year_takes_leading_digits() {
        assert_eq!(parse_year("2023"), Some(2023));
        assert_eq!(parse_year("2023-24"), Some(2023));
        assert_eq!(parse_year("TBA"), None);
    }
}
