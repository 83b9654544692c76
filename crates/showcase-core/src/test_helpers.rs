//! Builders shared by unit tests across modules

use chrono::NaiveDate;

use crate::catalog::{
    Catalog, CatalogKind, DesignCategory, DesignDetails, ItemKind, MediaItem, ProjectDetails,
};

pub(crate) fn design(id: &str, title: &str, category: DesignCategory) -> MediaItem {
    MediaItem {
        id: id.into(),
        title: title.into(),
        description: String::new(),
        tags: vec![],
        image: Some(format!("/images/designs/{}.jpg", id)),
        featured: false,
        kind: ItemKind::Design(DesignDetails { category }),
    }
}

pub(crate) fn project(id: &str, category: &str, gallery: Option<&[&str]>) -> MediaItem {
    MediaItem {
        id: id.into(),
        title: format!("Project {}", id),
        description: String::new(),
        tags: vec![],
        image: Some(format!("/images/projects/{}.jpg", id)),
        featured: false,
        kind: ItemKind::Project(ProjectDetails {
            category: category.into(),
            video: None,
            gallery: gallery.map(|frames| frames.iter().map(|f| f.to_string()).collect()),
            client: None,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            technologies: vec![],
            slug: format!("project-{}", id),
            case_study: None,
        }),
    }
}

/// The four design pieces of the bundled portfolio
pub(crate) fn design_catalog() -> Catalog {
    Catalog::new(
        CatalogKind::Designs,
        vec![
            design("1", "Futuristic Dashboard UI", DesignCategory::UiUx),
            design("2", "Abstract Geometric Illustration", DesignCategory::Illustration),
            design("3", "Floating Island", DesignCategory::ThreeD),
            design("4", "Fluid Motion Graphics", DesignCategory::Motion),
        ],
    )
    .unwrap()
}
