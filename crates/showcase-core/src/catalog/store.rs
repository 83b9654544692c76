use std::collections::HashSet;
use std::sync::Arc;

use super::models::{DesignCategory, MediaItem};
use crate::{Error, Result};

/// Which variant a catalog holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Projects,
    Designs,
}

/// A filterable category: stable id plus display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub label: String,
}

/// Immutable, ordered list of media items with its category enumeration
#[derive(Debug, Clone)]
pub struct Catalog {
    kind: CatalogKind,
    items: Vec<Arc<MediaItem>>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, checking that ids (and project slugs) are unique
    /// and that every item matches the catalog's variant
    pub fn new(kind: CatalogKind, items: Vec<MediaItem>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();

        for item in &items {
            let matches_kind = match kind {
                CatalogKind::Projects => item.is_project(),
                CatalogKind::Designs => item.is_design(),
            };
            if !matches_kind {
                return Err(Error::Other(format!(
                    "item '{}' does not belong in a {:?} catalog",
                    item.id, kind
                )));
            }
            if !ids.insert(item.id.as_str()) {
                return Err(Error::DuplicateId {
                    kind: "id",
                    value: item.id.clone(),
                });
            }
            if let Some(project) = item.project() {
                if !slugs.insert(project.slug.as_str()) {
                    return Err(Error::DuplicateId {
                        kind: "slug",
                        value: project.slug.clone(),
                    });
                }
            }
        }

        let categories = match kind {
            CatalogKind::Designs => DesignCategory::ALL
                .iter()
                .map(|c| Category {
                    id: c.id().to_string(),
                    label: c.label().to_string(),
                })
                .collect(),
            CatalogKind::Projects => {
                let mut seen = HashSet::new();
                items
                    .iter()
                    .map(|item| item.category_id())
                    .filter(|id| seen.insert(*id))
                    .map(|id| Category {
                        id: id.to_string(),
                        label: id.to_string(),
                    })
                    .collect()
            }
        };

        Ok(Self {
            kind,
            items: items.into_iter().map(Arc::new).collect(),
            categories,
        })
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn items(&self) -> &[Arc<MediaItem>] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Arc<MediaItem>> {
        self.items.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Arc<MediaItem>> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Category enumeration, excluding the "all" sentinel
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Featured items in catalog order
    pub fn featured(&self) -> impl Iterator<Item = &Arc<MediaItem>> {
        self.items.iter().filter(|item| item.featured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::design;

    #[test]
    fn test_duplicate_ids_rejected() {
        let items = vec![
            design("1", "A", DesignCategory::UiUx),
            design("1", "B", DesignCategory::Motion),
        ];
        assert!(matches!(
            Catalog::new(CatalogKind::Designs, items),
            Err(Error::DuplicateId { kind: "id", .. })
        ));
    }

    #[test]
    fn test_design_categories_are_fixed() {
        let catalog =
            Catalog::new(CatalogKind::Designs, vec![design("1", "A", DesignCategory::UiUx)])
                .unwrap();
        let ids: Vec<_> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["ui-ux", "illustration", "3d", "branding", "motion"]);
    }

    #[test]
    fn test_wrong_variant_rejected() {
        let result = Catalog::new(
            CatalogKind::Projects,
            vec![design("1", "A", DesignCategory::UiUx)],
        );
        assert!(result.is_err());
    }
}
