use crate::config::{Config, DEFAULT_CATALOG_NAME, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use aroi_composer::Catalog;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Output directory written into the config
    #[arg(short, long, default_value = "dist")]
    pub out_dir: String,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Aroi storefront...".bright_blue().bold());

    let catalog_path = PathBuf::from(cwd).join(DEFAULT_CATALOG_NAME);
    if !catalog_path.exists() || args.force {
        let catalog_json = serde_json::to_string_pretty(&Catalog::default())?;
        fs::write(&catalog_path, catalog_json)?;
        println!("  {} Created {}", "✓".green(), DEFAULT_CATALOG_NAME);
    }

    let config = Config {
        catalog: Some(DEFAULT_CATALOG_NAME.to_string()),
        out_dir: args.out_dir.clone(),
        ..Default::default()
    };
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Storefront initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} and {}", DEFAULT_CATALOG_NAME, DEFAULT_CONFIG_NAME);
    println!("  2. Run: aroi render");
    println!("  3. Check output in {}/", args.out_dir);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("aroi-init-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_init_writes_loadable_files() {
        let dir = scratch_dir("fresh");
        let cwd = dir.display().to_string();

        init(
            InitArgs {
                out_dir: "public".to_string(),
                force: false,
            },
            &cwd,
        )
        .unwrap();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.out_dir, "public");
        let catalog = Catalog::load(&config.catalog_path(&cwd).unwrap()).unwrap();
        assert_eq!(catalog, Catalog::default());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = scratch_dir("existing");
        let cwd = dir.display().to_string();
        fs::write(dir.join(DEFAULT_CONFIG_NAME), r#"{ "outDir": "mine" }"#).unwrap();

        init(
            InitArgs {
                out_dir: "dist".to_string(),
                force: false,
            },
            &cwd,
        )
        .unwrap();

        assert_eq!(Config::load(&cwd).unwrap().out_dir, "mine");
        assert!(!dir.join(DEFAULT_CATALOG_NAME).exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
