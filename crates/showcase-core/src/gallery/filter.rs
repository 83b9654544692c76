use std::sync::Arc;

use crate::catalog::{Catalog, MediaItem};
use crate::{Error, Result};

/// Sentinel id that selects the whole catalog
pub const ALL_CATEGORIES: &str = "all";

/// Active category of a filter engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn id(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(id) => id,
        }
    }

    pub fn matches(&self, item: &MediaItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => item.category_id() == id,
        }
    }
}

/// Indices of the catalog entries that pass `filter`, in catalog order
pub fn filter_indices(catalog: &Catalog, filter: &CategoryFilter) -> Vec<usize> {
    catalog
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.matches(item))
        .map(|(idx, _)| idx)
        .collect()
}

/// Derives the visible subset of a catalog from the active category
#[derive(Debug, Clone)]
pub struct FilterEngine {
    catalog: Catalog,
    active: CategoryFilter,
    visible: Vec<usize>,
    featured_first: bool,
    featured_len: usize,
}

impl FilterEngine {
    pub fn new(catalog: Catalog) -> Self {
        let visible = (0..catalog.len()).collect();
        Self {
            catalog,
            active: CategoryFilter::All,
            visible,
            featured_first: false,
            featured_len: 0,
        }
    }

    /// Under the "all" filter, list featured items ahead of the others
    pub fn with_featured_first(mut self) -> Self {
        self.featured_first = true;
        self.recompute();
        self
    }

    fn recompute(&mut self) {
        self.visible = filter_indices(&self.catalog, &self.active);
        self.featured_len = 0;
        if self.featured_first && self.active == CategoryFilter::All {
            let items = self.catalog.items();
            // Stable, so both blocks keep catalog order
            self.visible.sort_by_key(|&idx| !items[idx].featured);
            self.featured_len = self.visible.iter().filter(|&&idx| items[idx].featured).count();
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active(&self) -> &CategoryFilter {
        &self.active
    }

    /// Resolve a category id against this catalog's enumeration
    pub fn parse_category(&self, id: &str) -> Result<CategoryFilter> {
        if id == ALL_CATEGORIES {
            return Ok(CategoryFilter::All);
        }
        self.catalog
            .categories()
            .iter()
            .find(|c| c.id == id)
            .map(|c| CategoryFilter::Only(c.id.clone()))
            .ok_or_else(|| Error::InvalidCategory(id.to_string()))
    }

    /// Switch the active category and recompute the visible set.
    ///
    /// Unknown ids are rejected and leave the current view untouched.
    /// Returns whether the active category changed.
    pub fn set_category(&mut self, id: &str) -> Result<bool> {
        let filter = self.parse_category(id)?;
        let changed = filter != self.active;
        self.active = filter;
        self.recompute();

        if changed {
            tracing::debug!(
                "Filter set to '{}': {} of {} items",
                self.active.id(),
                self.visible.len(),
                self.catalog.len()
            );
        }
        Ok(changed)
    }

    /// Selectable options as `(id, label)`, starting with "all"
    pub fn options(&self) -> Vec<(&str, &str)> {
        std::iter::once((ALL_CATEGORIES, "All"))
            .chain(
                self.catalog
                    .categories()
                    .iter()
                    .map(|c| (c.id.as_str(), c.label.as_str())),
            )
            .collect()
    }

    /// Move to the next (or previous) option, wrapping around
    pub fn cycle(&mut self, forward: bool) -> Result<bool> {
        let options: Vec<String> = self.options().iter().map(|(id, _)| id.to_string()).collect();
        let n = options.len();
        let current = options
            .iter()
            .position(|id| id == self.active.id())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % n
        } else {
            (current + n - 1) % n
        };
        self.set_category(&options[next])
    }

    /// Visible items in display order
    pub fn visible(&self) -> impl Iterator<Item = &Arc<MediaItem>> {
        self.visible.iter().filter_map(|&idx| self.catalog.get(idx))
    }

    /// Visible item at a grid position
    pub fn visible_item(&self, position: usize) -> Option<&Arc<MediaItem>> {
        self.visible
            .get(position)
            .and_then(|&idx| self.catalog.get(idx))
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Leading visible items that form the featured block (0 when not partitioned)
    pub fn featured_len(&self) -> usize {
        self.featured_len
    }

    /// True when the active category has no items (render the empty state)
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
