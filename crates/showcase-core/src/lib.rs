pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod preloader;
pub mod reveal;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use catalog::{Catalog, CatalogKind, MediaItem, SiteContent};
pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
