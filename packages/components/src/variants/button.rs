use crate::error::RenderError;
use crate::html::{Handler, MarkupWriter};
use crate::node::Render;
use crate::props::{FromProps, Properties, PropertiesExt};

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub text: String,
    pub on_click: Handler,
    pub class: String,
    /// Icon class name, rendered as a leading `<i>`.
    pub icon: Option<String>,
}

impl Button {
    pub const DEFAULT_TEXT: &'static str = "Click me";
    pub const DEFAULT_CLASS: &'static str = "bg-gradient-to-r from-blue-500 to-indigo-600 text-white font-medium py-2 px-4 rounded-lg shadow-md hover:shadow-lg transform hover:-translate-y-0.5 transition-all";

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn on_click(mut self, handler: Handler) -> Self {
        self.on_click = handler;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl Default for Button {
    fn default() -> Self {
        Self {
            text: Self::DEFAULT_TEXT.to_string(),
            on_click: Handler::new(),
            class: Self::DEFAULT_CLASS.to_string(),
            icon: None,
        }
    }
}

impl FromProps for Button {
    fn from_props(props: &Properties) -> Result<Self, RenderError> {
        let defaults = Self::default();
        Ok(Self {
            text: props.string("text").unwrap_or(defaults.text),
            on_click: props.string("onClick").map(Handler::script).unwrap_or_default(),
            class: props.string("class").unwrap_or(defaults.class),
            icon: props.string("icon").filter(|icon| !icon.is_empty()),
        })
    }
}

impl Render for Button {
    fn render_into(&self, w: &mut MarkupWriter) {
        w.open(
            "button",
            &[("class", self.class.as_str()), ("onclick", self.on_click.as_str())],
        );
        if let Some(icon) = &self.icon {
            let class = format!("{} mr-2", icon);
            w.open("i", &[("class", class.as_str())]);
            w.close("i");
        }
        w.text(&self.text);
        w.close("button");
    }
}

/// Pinned round button in the bottom-right corner.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingAction {
    pub on_click: Handler,
    pub icon: String,
    pub text: String,
}

impl FloatingAction {
    pub const CLASS: &'static str = "fixed bottom-6 right-6 bg-gradient-to-r from-indigo-600 to-blue-500 text-white py-3 px-6 rounded-full flex items-center justify-center shadow-lg hover:shadow-xl transition-all transform hover:-translate-y-1 z-30";

    pub fn new(on_click: Handler) -> Self {
        Self {
            on_click,
            ..Default::default()
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

impl Default for FloatingAction {
    fn default() -> Self {
        Self {
            on_click: Handler::new(),
            icon: "+".to_string(),
            text: String::new(),
        }
    }
}

impl FromProps for FloatingAction {
    fn from_props(props: &Properties) -> Result<Self, RenderError> {
        let defaults = Self::default();
        Ok(Self {
            on_click: props.string("onClick").map(Handler::script).unwrap_or_default(),
            icon: props.string("icon").unwrap_or(defaults.icon),
            text: props.string("text").unwrap_or(defaults.text),
        })
    }
}

impl Render for FloatingAction {
    fn render_into(&self, w: &mut MarkupWriter) {
        w.open(
            "button",
            &[("class", Self::CLASS), ("onclick", self.on_click.as_str())],
        );
        w.element("span", &[("class", "text-xl mr-1")], &self.icon);
        w.text(&self.text);
        w.close("button");
    }
}
