//! Catalog store: immutable project and design lists plus the page content
//! they are published with.

mod content;
mod models;
mod placeholder;
mod store;

pub use content::{About, ContactInfo, Hero, SiteContent, SiteInfo, SocialLink, Stat};
pub use models::{
    CaseStudy, DesignCategory, DesignDetails, DesignRecord, ItemKind, MediaDisplay, MediaItem,
    ProjectDetails, ProjectRecord,
};
pub use placeholder::{initials, Placeholder};
pub use store::{Catalog, CatalogKind, Category};
