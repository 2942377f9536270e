mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{init, render, tree, InitArgs, RenderArgs, TreeArgs};

/// Aroi - renders the food-ordering storefront to static HTML
#[derive(Parser, Debug)]
#[command(name = "aroi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write aroi.config.json and catalog.json with the defaults
    Init(InitArgs),

    /// Render the storefront to index.html
    Render(RenderArgs),

    /// Render a JSON node tree to an HTML fragment
    Tree(TreeArgs),
}

fn main() {
    // Logs go to stderr so `--stdout` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Render(args) => render(args, &cwd),
                Command::Tree(args) => tree(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
