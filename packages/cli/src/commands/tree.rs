use anyhow::{Context, Result};
use aroi_components::{Node, Render};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// JSON file with a `{ "kind", "props", "children" }` node tree
    pub file: String,

    /// Output to stdout instead of a file next to the input
    #[arg(long)]
    pub stdout: bool,
}

pub fn tree(args: TreeArgs, cwd: &str) -> Result<()> {
    let input = PathBuf::from(cwd).join(&args.file);
    let source = fs::read_to_string(&input)
        .with_context(|| format!("Cannot read {}", input.display()))?;
    let html = render_tree(&source).with_context(|| format!("Invalid JSON in {}", input.display()))?;

    if args.stdout {
        println!("{}", html);
        return Ok(());
    }

    let output_path = output_path(&input);
    fs::write(&output_path, &html)?;
    println!("  {} {} → {}", "✓".green(), args.file, output_path.display());
    Ok(())
}

/// Malformed nodes render as inline error fragments; only invalid JSON fails.
fn render_tree(source: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    let node = Node::from_value(&value);
    tracing::debug!(?node, "Parsed node tree");
    Ok(node.render())
}

fn output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tree() {
        let html = render_tree(
            r#"{ "kind": "column", "props": { "id": "x" }, "children": [
                { "kind": "text", "props": { "text": "Hi" } },
                { "kind": "catalog-item" }
            ] }"#,
        )
        .unwrap();
        assert!(html.starts_with("<div id=\"x\""));
        assert!(html.contains(">Hi<"));
        assert!(html.contains("render-error"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(render_tree("{ kind: ").is_err());
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("/tmp/home.json")),
            PathBuf::from("/tmp/home.html")
        );
    }
}
