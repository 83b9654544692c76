use std::path::Path;

use serde::Deserialize;

use super::models::{DesignRecord, MediaItem, ProjectRecord};
use super::store::{Catalog, CatalogKind};
use crate::Result;

const BUNDLED_CONTENT: &str = include_str!("../../content/portfolio.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub background_video: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    pub cta_text: String,
    pub cta_link: String,
}

/// One headline number in the about section
#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u64,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Counter targets animated when the stats scroll into view
    pub experience: u64,
    pub projects: u64,
    pub clients: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentDocument {
    site: SiteInfo,
    hero: Hero,
    about: About,
    contact: ContactInfo,
    #[serde(default)]
    projects: Vec<ProjectRecord>,
    #[serde(default)]
    designs: Vec<DesignRecord>,
}

/// Everything the portfolio page displays, loaded once at startup
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub site: SiteInfo,
    pub hero: Hero,
    pub about: About,
    pub contact: ContactInfo,
    pub projects: Catalog,
    pub designs: Catalog,
}

impl SiteContent {
    /// Parse and validate a content document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let document: ContentDocument = toml::from_str(source)?;

        let projects = document
            .projects
            .into_iter()
            .map(MediaItem::try_from)
            .collect::<Result<Vec<_>>>()?;
        let designs = document.designs.into_iter().map(MediaItem::from).collect();

        let content = Self {
            site: document.site,
            hero: document.hero,
            about: document.about,
            contact: document.contact,
            projects: Catalog::new(CatalogKind::Projects, projects)?,
            designs: Catalog::new(CatalogKind::Designs, designs)?,
        };

        for item in content.projects.items().iter().chain(content.designs.items()) {
            if item.image.is_none() {
                tracing::warn!("Item '{}' has no image, a placeholder will be shown", item.id);
            }
        }

        tracing::info!(
            "Loaded content: {} projects, {} designs",
            content.projects.len(),
            content.designs.len()
        );

        Ok(content)
    }

    /// Load a content document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Content shipped with the binary
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_CONTENT)
    }

    /// Load from `path` when given, otherwise use the bundled content
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_bundled_content_loads() {
        let content = SiteContent::bundled().unwrap();
        assert_eq!(content.projects.len(), 6);
        assert_eq!(content.designs.len(), 4);
        assert_eq!(content.about.stats.len(), 4);
        assert_eq!(content.about.projects, 150);

        let nebula = content.projects.find("1").unwrap();
        assert_eq!(nebula.case_study().unwrap().process.len(), 4);

        // Empty video strings are normalised away
        let aurora = content.projects.find("4").unwrap();
        assert!(aurora.video().is_none());
    }

    #[test]
    fn test_project_categories_in_first_appearance_order() {
        let content = SiteContent::bundled().unwrap();
        let ids: Vec<_> = content
            .projects
            .categories()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(
            ids,
            [
                "Web Experience",
                "Brand Identity",
                "Mobile App",
                "Motion Graphics",
                "Product Design"
            ]
        );
    }

    #[test]
    fn test_featured_partition() {
        let content = SiteContent::bundled().unwrap();
        let featured: Vec<_> = content.projects.featured().map(|p| p.id.as_str()).collect();
        let others: Vec<_> = content
            .projects
            .items()
            .iter()
            .filter(|p| !p.featured)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(featured, ["1", "2", "6"]);
        assert_eq!(others, ["3", "4", "5"]);
    }

    #[test]
    fn test_unknown_design_category_is_a_parse_error() {
        let source = BUNDLED_CONTENT.replace("category = \"3d\"", "category = \"sculpture\"");
        assert!(matches!(SiteContent::from_toml_str(&source), Err(Error::Toml(_))));
    }
}
