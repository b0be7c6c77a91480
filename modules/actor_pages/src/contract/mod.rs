//! Contract layer - public API for inter-module communication
//!
//! This layer contains the page configuration shapes, the rendered view,
//! errors and the native client trait.

pub mod client;
pub mod error;
pub mod legacy;
pub mod lenient;
pub mod model;
pub mod render;
pub mod route;

pub use client::ActorPagesApi;
pub use error::PagesError;
pub use legacy::{
    CreditCategory, LegacyCredit, LegacyLink, LegacyPhoto, LegacyProfile, LegacyReel,
    LegacyTenantConfig, LegacyTheme, LinkType, VideoPlatform,
};
pub use model::{
    Album, AuthContext, BtsConfig, ContactConfig, ExtraElement, FontPreset, HeadshotGallery,
    HeadshotsConfig, HeroConfig, IconStyle, ImageItem, PageSummary, ParseTierError, ProjectItem,
    ProjectMedium, ProjectsConfig, ReelItem, ReelsConfig, RepInfo, ResumeConfig, ResumeMode,
    SectionKey, SocialLink, SocialPlatform, TemplateId, TenantPageConfig, ThemeConfig, ThemeId,
    Tier, DEFAULT_SECTION_ORDER,
};
pub use render::{
    BtsContent, ContactContent, HeadshotsContent, HeroContent, LockedCard, ProjectGroup,
    ProjectsContent, ReelsContent, RenderedPage, RenderedSection, ResumeContent, SectionContent,
    StructuredResume,
};
pub use route::RouteDecision;
