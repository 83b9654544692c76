use std::path::Path;

use anyhow::{Context, Result};

use showcase_core::catalog::Catalog;
use showcase_core::SiteContent;

pub fn run(path: &Path) -> Result<()> {
    let content = SiteContent::load(path)
        .with_context(|| format!("Invalid content document {}", path.display()))?;

    println!("{} is valid.\n", path.display());
    println!("Site: {}", content.site.name);
    summarize("Projects", &content.projects);
    summarize("Designs", &content.designs);

    let missing: Vec<&str> = content
        .projects
        .items()
        .iter()
        .chain(content.designs.items())
        .filter(|item| item.image.is_none())
        .map(|item| item.id.as_str())
        .collect();
    if !missing.is_empty() {
        println!("\nItems shown with a placeholder: {}", missing.join(", "));
    }

    Ok(())
}

fn summarize(name: &str, catalog: &Catalog) {
    let categories: Vec<&str> = catalog.categories().iter().map(|c| c.label.as_str()).collect();
    println!(
        "{}: {} ({} featured) in {}",
        name,
        catalog.len(),
        catalog.featured().count(),
        categories.join(", ")
    );
}
