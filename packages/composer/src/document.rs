use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::pages::compose_app;
use crate::session::{ensure_cart_placeholder, SessionStore};
use aroi_components::{Markup, MarkupWriter, Node, Render};
use serde::{Deserialize, Serialize};

/// Operations the client module exposes on `window` for inline handlers.
pub const CLIENT_GLOBALS: &[&str] = &[
    "addToCart",
    "removeFromCart",
    "updateCartQuantity",
    "showPage",
    "showMobilePage",
    "filterByCategory",
    "searchFood",
    "toggleMobileMenu",
    "showModal",
    "hideModal",
];

const INLINE_STYLE: &str = r#"
body { font-family: 'Prompt', sans-serif; background-color: #f7f9fc; }
.fade-in { animation: fadeIn 0.3s ease-in-out; }
@keyframes fadeIn { from { opacity: 0; transform: translateY(10px); } to { opacity: 1; transform: translateY(0); } }
.grid-food-items { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }
.no-scrollbar::-webkit-scrollbar { display: none; }
"#;

/// Head and bootstrap settings of the generated page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellOptions {
    pub title: String,
    /// Path of the wasm-bindgen JS glue, relative to the page.
    pub client_module: String,
    pub stylesheet_script: String,
    pub font_stylesheet: String,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            title: "Food Delivery App".to_string(),
            client_module: "./pkg/aroi_wasm.js".to_string(),
            stylesheet_script: "https://cdn.tailwindcss.com".to_string(),
            font_stylesheet:
                "https://fonts.googleapis.com/css2?family=Prompt:wght@300;400;500;600;700&display=swap"
                    .to_string(),
        }
    }
}

/// Wraps a rendered tree in the full HTML document.
pub fn render_document(tree: &Node, options: &ShellOptions) -> String {
    let mut w = MarkupWriter::new();
    w.raw(&Markup::trusted("<!DOCTYPE html>"));
    w.open("html", &[("lang", "th")]);

    w.open("head", &[]);
    w.open("meta", &[("charset", "UTF-8")]);
    w.open(
        "meta",
        &[
            ("name", "viewport"),
            ("content", "width=device-width, initial-scale=1.0"),
        ],
    );
    w.element("title", &[], &options.title);
    w.element("script", &[("src", options.stylesheet_script.as_str())], "");
    w.open(
        "link",
        &[("href", options.font_stylesheet.as_str()), ("rel", "stylesheet")],
    );
    w.open("style", &[]);
    w.raw(&Markup::trusted(INLINE_STYLE));
    w.close("style");
    w.close("head");

    w.open("body", &[("class", "min-h-screen")]);
    tree.render_into(&mut w);
    w.open("script", &[("type", "module")]);
    w.raw(&bootstrap_script(&options.client_module));
    w.close("script");
    w.close("body");

    w.close("html");
    w.finish()
}

fn bootstrap_script(module: &str) -> Markup {
    let path = serde_json::to_string(module)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/");
    let globals = CLIENT_GLOBALS.join(", ");
    Markup::trusted(format!(
        "\nimport init, {{ {globals}, boot }} from {path};\nawait init();\nObject.assign(window, {{ {globals} }});\nboot();\n"
    ))
}

/// Session check, composition and a single render of the whole page.
pub fn render_storefront(
    catalog: &Catalog,
    config: &StorefrontConfig,
    shell: &ShellOptions,
    session: &mut dyn SessionStore,
) -> String {
    ensure_cart_placeholder(session);
    let tree = compose_app(catalog, config);
    let html = render_document(&tree, shell);
    tracing::info!(
        items = catalog.len(),
        bytes = html.len(),
        "Rendered storefront"
    );
    html
}
