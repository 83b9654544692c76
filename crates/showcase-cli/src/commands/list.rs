use std::sync::Arc;

use anyhow::Result;

use showcase_core::catalog::{CatalogKind, MediaItem};
use showcase_core::gallery::{CategoryFilter, FilterEngine};
use showcase_core::SiteContent;

pub fn run(content: &SiteContent, designs: bool, category: Option<&str>) -> Result<()> {
    let catalog = if designs {
        &content.designs
    } else {
        &content.projects
    };
    let mut engine = match catalog.kind() {
        CatalogKind::Projects => FilterEngine::new(catalog.clone()).with_featured_first(),
        CatalogKind::Designs => FilterEngine::new(catalog.clone()),
    };
    if let Some(category) = category {
        engine.set_category(category)?;
    }

    let noun = match catalog.kind() {
        CatalogKind::Projects => "projects",
        CatalogKind::Designs => "designs",
    };

    if engine.is_empty() {
        println!("No {} found.", noun);
        println!("\nAvailable categories:");
        for (id, label) in engine.options() {
            println!("  {} ({})", id, label);
        }
        return Ok(());
    }

    println!("{} {} ({}):\n", capitalize(noun), filter_label(&engine), engine.visible_len());

    // Unfiltered projects list featured work first
    let split = engine.featured_len();
    if split > 0 {
        println!("Featured:\n");
        for item in engine.visible().take(split) {
            print_item(item);
        }
        println!("More work:\n");
        for item in engine.visible().skip(split) {
            print_item(item);
        }
    } else {
        for item in engine.visible() {
            print_item(item);
        }
    }

    Ok(())
}

fn print_item(item: &Arc<MediaItem>) {
    let featured = if item.featured { " ★" } else { "" };
    println!("  [{}] {}{} - {}", item.id, item.title, featured, item.category_label());
    println!("    {}", item.description);
    if let Some(project) = item.project() {
        let client = project
            .client
            .as_deref()
            .map(|c| format!(" for {}", c))
            .unwrap_or_default();
        println!("    {}{}", project.date.format("%B %Y"), client);
        if !project.technologies.is_empty() {
            println!("    Tech: {}", project.technologies.join(", "));
        }
    }
    if !item.tags.is_empty() {
        println!("    Tags: {}", item.tags.join(", "));
    }
    let frames = item.frames().len();
    if frames > 1 {
        println!("    Gallery: {} images", frames);
    }
    println!();
}

fn filter_label(engine: &FilterEngine) -> String {
    match engine.active() {
        CategoryFilter::All => "(all)".to_string(),
        CategoryFilter::Only(id) => format!("in '{}'", id),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_is_an_error() {
        let content = SiteContent::bundled().unwrap();
        assert!(run(&content, true, Some("sculpture")).is_err());
        assert!(run(&content, true, Some("3d")).is_ok());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("designs"), "Designs");
        assert_eq!(capitalize(""), "");
    }
}
