use crate::dom;
use crate::error::RenderError;
use crate::html::MarkupWriter;
use crate::node::Render;
use crate::props::{FromProps, Properties, PropertiesExt};

/// Notification banner, hidden until the client engine posts a message.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub class: String,
}

impl Default for Toast {
    fn default() -> Self {
        Self {
            class: format!(
                "{} fixed top-20 left-1/2 transform -translate-x-1/2 bg-gray-800 text-white px-4 py-2 rounded-lg shadow-lg z-50 fade-in",
                dom::HIDDEN
            ),
        }
    }
}

impl FromProps for Toast {
    fn from_props(props: &Properties) -> Result<Self, RenderError> {
        Ok(Self {
            class: props.string("class").unwrap_or_else(|| Self::default().class),
        })
    }
}

impl Render for Toast {
    fn render_into(&self, w: &mut MarkupWriter) {
        w.open(
            "div",
            &[("id", dom::TOAST), ("class", self.class.as_str()), ("role", "status")],
        );
        w.close("div");
    }
}
