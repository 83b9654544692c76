use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::placeholder::Placeholder;
use crate::{Error, Result};

/// Fixed category set for design pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignCategory {
    #[serde(rename = "ui-ux")]
    UiUx,
    #[serde(rename = "illustration")]
    Illustration,
    #[serde(rename = "3d")]
    ThreeD,
    #[serde(rename = "branding")]
    Branding,
    #[serde(rename = "motion")]
    Motion,
}

impl DesignCategory {
    pub const ALL: [DesignCategory; 5] = [
        DesignCategory::UiUx,
        DesignCategory::Illustration,
        DesignCategory::ThreeD,
        DesignCategory::Branding,
        DesignCategory::Motion,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DesignCategory::UiUx => "ui-ux",
            DesignCategory::Illustration => "illustration",
            DesignCategory::ThreeD => "3d",
            DesignCategory::Branding => "branding",
            DesignCategory::Motion => "motion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DesignCategory::UiUx => "UI/UX",
            DesignCategory::Illustration => "Illustration",
            DesignCategory::ThreeD => "3D Design",
            DesignCategory::Branding => "Branding",
            DesignCategory::Motion => "Motion",
        }
    }
}

impl FromStr for DesignCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| Error::InvalidCategory(s.to_string()))
    }
}

impl fmt::Display for DesignCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Long-form write-up attached to a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub overview: String,
    pub challenge: String,
    pub solution: String,
    pub results: String,
    #[serde(default)]
    pub process: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetails {
    /// Free-form category (e.g. "Mobile App")
    pub category: String,
    pub video: Option<String>,
    /// Non-empty when present
    pub gallery: Option<Vec<String>>,
    pub client: Option<String>,
    pub date: NaiveDate,
    pub technologies: Vec<String>,
    pub slug: String,
    pub case_study: Option<CaseStudy>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesignDetails {
    pub category: DesignCategory,
}

/// Variant-specific payload of a catalog entry
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Project(ProjectDetails),
    Design(DesignDetails),
}

/// One catalog entry. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Primary image locator; `None` renders a placeholder
    pub image: Option<String>,
    pub featured: bool,
    pub kind: ItemKind,
}

/// What the detail view should show for an item right now
#[derive(Debug, Clone, PartialEq)]
pub enum MediaDisplay<'a> {
    Video(&'a str),
    Image(&'a str),
    Placeholder(Placeholder),
}

impl MediaItem {
    pub fn is_project(&self) -> bool {
        matches!(self.kind, ItemKind::Project(_))
    }

    pub fn is_design(&self) -> bool {
        matches!(self.kind, ItemKind::Design(_))
    }

    /// Category id used by the filter engine
    pub fn category_id(&self) -> &str {
        match &self.kind {
            ItemKind::Project(p) => &p.category,
            ItemKind::Design(d) => d.category.id(),
        }
    }

    /// Human readable category
    pub fn category_label(&self) -> &str {
        match &self.kind {
            ItemKind::Project(p) => &p.category,
            ItemKind::Design(d) => d.category.label(),
        }
    }

    pub fn project(&self) -> Option<&ProjectDetails> {
        match &self.kind {
            ItemKind::Project(p) => Some(p),
            ItemKind::Design(_) => None,
        }
    }

    pub fn video(&self) -> Option<&str> {
        self.project().and_then(|p| p.video.as_deref())
    }

    pub fn gallery(&self) -> Option<&[String]> {
        self.project().and_then(|p| p.gallery.as_deref())
    }

    pub fn case_study(&self) -> Option<&CaseStudy> {
        self.project().and_then(|p| p.case_study.as_ref())
    }

    /// Frames the carousel can step through: the gallery when present,
    /// otherwise the primary image alone, otherwise nothing.
    pub fn frames(&self) -> Vec<String> {
        match (self.gallery(), self.image.as_ref()) {
            (Some(gallery), _) => gallery.to_vec(),
            (None, Some(image)) => vec![image.clone()],
            (None, None) => Vec::new(),
        }
    }

    /// Resolve the detail media: video, then the current carousel frame,
    /// then the primary image, then a placeholder.
    pub fn display<'a>(&'a self, frame: Option<&'a str>) -> MediaDisplay<'a> {
        if let Some(video) = self.video() {
            return MediaDisplay::Video(video);
        }
        if let Some(frame) = frame {
            return MediaDisplay::Image(frame);
        }
        match self.image.as_deref() {
            Some(image) => MediaDisplay::Image(image),
            None => MediaDisplay::Placeholder(self.placeholder()),
        }
    }

    pub fn placeholder(&self) -> Placeholder {
        Placeholder::new(&self.id, &self.title)
    }
}

/// Project entry as written in the content document
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub gallery: Option<Vec<String>>,
    #[serde(default)]
    pub client: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub slug: String,
    #[serde(default)]
    pub case_study: Option<CaseStudy>,
}

/// Design entry as written in the content document
#[derive(Debug, Clone, Deserialize)]
pub struct DesignRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: DesignCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Treat empty locators as missing
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<ProjectRecord> for MediaItem {
    type Error = Error;

    fn try_from(record: ProjectRecord) -> Result<Self> {
        let gallery = match record.gallery {
            Some(frames) => {
                let frames: Vec<String> =
                    frames.into_iter().filter(|f| !f.trim().is_empty()).collect();
                if frames.is_empty() {
                    return Err(Error::EmptyGallery(record.id));
                }
                Some(frames)
            }
            None => None,
        };

        Ok(MediaItem {
            id: record.id,
            title: record.title,
            description: record.description,
            tags: record.tags,
            image: non_empty(record.image),
            featured: record.featured,
            kind: ItemKind::Project(ProjectDetails {
                category: record.category,
                video: non_empty(record.video),
                gallery,
                client: non_empty(record.client),
                date: record.date,
                technologies: record.technologies,
                slug: record.slug,
                case_study: record.case_study,
            }),
        })
    }
}

impl From<DesignRecord> for MediaItem {
    fn from(record: DesignRecord) -> Self {
        MediaItem {
            id: record.id,
            title: record.title,
            description: record.description,
            tags: record.tags,
            image: non_empty(record.image),
            featured: record.featured,
            kind: ItemKind::Design(DesignDetails {
                category: record.category,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_record() -> ProjectRecord {
        ProjectRecord {
            id: "p1".into(),
            title: "Aurora - Motion Graphics".into(),
            description: "Launch sequence".into(),
            category: "Motion Graphics".into(),
            tags: vec!["Motion Design".into()],
            image: Some("/images/aurora.jpg".into()),
            video: Some(String::new()),
            gallery: None,
            client: None,
            date: NaiveDate::from_ymd_opt(2023, 7, 5).unwrap(),
            technologies: vec!["After Effects".into()],
            featured: false,
            slug: "aurora".into(),
            case_study: None,
        }
    }

    #[test]
    fn test_design_category_round_trip_ids() {
        for category in DesignCategory::ALL {
            assert_eq!(category.id().parse::<DesignCategory>().unwrap(), category);
        }
        assert!(matches!(
            "sculpture".parse::<DesignCategory>(),
            Err(Error::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_empty_video_is_absent() {
        let item = MediaItem::try_from(project_record()).unwrap();
        assert_eq!(item.video(), None);
        assert_eq!(item.display(None), MediaDisplay::Image("/images/aurora.jpg"));
    }

    #[test]
    fn test_empty_gallery_rejected() {
        let mut record = project_record();
        record.gallery = Some(vec![]);
        assert!(matches!(
            MediaItem::try_from(record),
            Err(Error::EmptyGallery(id)) if id == "p1"
        ));
    }

    #[test]
    fn test_frames_fall_back_to_primary_image() {
        let item = MediaItem::try_from(project_record()).unwrap();
        assert_eq!(item.frames(), vec!["/images/aurora.jpg".to_string()]);

        let mut record = project_record();
        record.image = None;
        let bare = MediaItem::try_from(record).unwrap();
        assert!(bare.frames().is_empty());
        assert!(matches!(bare.display(None), MediaDisplay::Placeholder(_)));
    }

    #[test]
    fn test_video_takes_precedence() {
        let mut record = project_record();
        record.video = Some("/videos/aurora.mp4".into());
        record.gallery = Some(vec!["a".into(), "b".into()]);
        let item = MediaItem::try_from(record).unwrap();
        assert_eq!(item.display(Some("b")), MediaDisplay::Video("/videos/aurora.mp4"));
    }
}
