use crate::dom;
use crate::error::RenderError;
use crate::html::{Handler, JsArg, MarkupWriter};
use crate::node::Render;
use crate::props::{FromProps, Properties, PropertiesExt};

/// Pill label that disables category filtering.
pub const SHOW_ALL_CATEGORY: &str = "ทั้งหมด";

const BASE_CLASS: &str = "px-4 py-2 rounded-full font-medium text-sm shadow-md";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPill {
    pub text: String,
    pub active: bool,
}

impl CategoryPill {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            active: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// State-dependent style classes.
    pub fn classes(active: bool) -> &'static [&'static str] {
        if active {
            dom::PILL_ACTIVE
        } else {
            dom::PILL_INACTIVE
        }
    }

    /// Full class list for the given state. Active and inactive style sets
    /// never appear together.
    pub fn class_for(active: bool) -> String {
        format!(
            "{} {} {}",
            dom::CATEGORY_PILL_CLASS,
            BASE_CLASS,
            Self::classes(active).join(" ")
        )
    }
}

impl Default for CategoryPill {
    fn default() -> Self {
        Self::new("Category")
    }
}

impl FromProps for CategoryPill {
    fn from_props(props: &Properties) -> Result<Self, RenderError> {
        let defaults = Self::default();
        Ok(Self {
            text: props.string("text").unwrap_or(defaults.text),
            active: props.flag("active").unwrap_or(false),
        })
    }
}

impl Render for CategoryPill {
    fn render_into(&self, w: &mut MarkupWriter) {
        let class = Self::class_for(self.active);
        let on_click = Handler::call("window.filterByCategory", &[JsArg::Str(&self.text)]);
        w.element(
            "button",
            &[
                ("class", class.as_str()),
                (dom::DATA_CATEGORY, self.text.as_str()),
                ("onclick", on_click.as_str()),
            ],
            &self.text,
        );
    }
}
