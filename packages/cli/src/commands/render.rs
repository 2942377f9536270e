use crate::config::Config;
use anyhow::{Context, Result};
use aroi_composer::{render_storefront, Catalog, MemorySession};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Catalog JSON file (overrides config)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Directory containing aroi.config.json (defaults to current directory)
    #[arg(long)]
    pub config: Option<String>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config_dir = args.config.as_deref().unwrap_or(cwd);
    let config = Config::load(config_dir)?;

    let catalog = match args.catalog.or_else(|| config.catalog_path(config_dir)) {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("Cannot load catalog {}", path.display()))?,
        None => Catalog::default(),
    };

    let mut session = MemorySession::new();
    let html = render_storefront(&catalog, &config.storefront, &config.shell, &mut session);

    if args.stdout {
        println!("{}", html);
        return Ok(());
    }

    let out_dir = match args.out_dir {
        Some(dir) => PathBuf::from(cwd).join(dir),
        None => config.out_dir(config_dir),
    };
    fs::create_dir_all(&out_dir)?;
    let output_path = out_dir.join("index.html");
    fs::write(&output_path, &html)?;

    println!(
        "  {} {} items → {}",
        "✓".green(),
        catalog.len(),
        output_path.display()
    );
    println!();
    println!(
        "Serve {} with the wasm client at {}",
        out_dir.display(),
        config.shell.client_module.bright_white()
    );

    Ok(())
}
