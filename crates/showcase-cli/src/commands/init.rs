use std::path::Path;

use anyhow::{bail, Context, Result};

use showcase_core::AppConfig;

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    AppConfig::default()
        .save_to(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote default configuration to {}", path.display());
    println!("Wrote {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("showcase").join("config.toml");

        run(&path, false).unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.ui.theme.name, AppConfig::default().ui.theme.name);
    }

    #[test]
    fn test_init_keeps_existing_file_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[animation]\nspeed = 2.0\n").unwrap();

        assert!(run(&path, false).is_err());
        assert!(std::fs::read_to_string(&path).unwrap().contains("speed = 2.0"));

        run(&path, true).unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert!((config.animation.speed - AppConfig::default().animation.speed).abs() < 1e-9);
    }
}
