use crate::error::RenderError;
use crate::html::MarkupWriter;
use crate::node::Render;
use crate::props::{FromProps, Properties, PropertiesExt};

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub class: String,
    pub id: String,
}

impl Text {
    pub const DEFAULT_TEXT: &'static str = "Default Text";
    pub const DEFAULT_CLASS: &'static str = "text-lg text-gray-800";

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl Default for Text {
    fn default() -> Self {
        Self {
            text: Self::DEFAULT_TEXT.to_string(),
            class: Self::DEFAULT_CLASS.to_string(),
            id: String::new(),
        }
    }
}

impl FromProps for Text {
    fn from_props(props: &Properties) -> Result<Self, RenderError> {
        let defaults = Self::default();
        Ok(Self {
            text: props.string("text").unwrap_or(defaults.text),
            class: props.string("class").unwrap_or(defaults.class),
            id: props.string("id").unwrap_or(defaults.id),
        })
    }
}

impl Render for Text {
    fn render_into(&self, w: &mut MarkupWriter) {
        w.element(
            "span",
            &[("id", self.id.as_str()), ("class", self.class.as_str())],
            &self.text,
        );
    }
}
