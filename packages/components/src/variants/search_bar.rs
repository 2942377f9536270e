use crate::dom;
use crate::error::RenderError;
use crate::html::{Handler, MarkupWriter};
use crate::icons;
use crate::node::Render;
use crate::props::{FromProps, Properties, PropertiesExt};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchBar {
    pub placeholder: String,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            placeholder: "ค้นหาอาหาร...".to_string(),
        }
    }
}

impl FromProps for SearchBar {
    fn from_props(props: &Properties) -> Result<Self, RenderError> {
        Ok(Self {
            placeholder: props
                .string("placeholder")
                .unwrap_or_else(|| Self::default().placeholder),
        })
    }
}

impl Render for SearchBar {
    fn render_into(&self, w: &mut MarkupWriter) {
        let on_key_up = Handler::call("window.searchFood", &[]);
        w.open("div", &[("class", "relative")]);
        w.open(
            "input",
            &[
                ("type", "text"),
                ("id", dom::SEARCH_INPUT),
                ("placeholder", self.placeholder.as_str()),
                ("onkeyup", on_key_up.as_str()),
                ("class", "w-full py-3 px-4 pl-12 rounded-full bg-white shadow-md focus:outline-none focus:ring-2 focus:ring-indigo-500"),
            ],
        );
        w.close("input");
        w.open("div", &[("class", "absolute left-4 top-1/2 transform -translate-y-1/2 text-gray-400")]);
        icons::write(w, icons::SEARCH, "h-5 w-5");
        w.close("div");
        w.close("div");
    }
}
