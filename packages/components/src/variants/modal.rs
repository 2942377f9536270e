use crate::dom;
use crate::error::RenderError;
use crate::html::{Handler, MarkupWriter};
use crate::icons;
use crate::node::Render;
use crate::props::{FromProps, Properties, PropertiesExt};
use crate::variants::Button;
use serde_json::Value;

/// Confirmation dialog, hidden until `window.showModal()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    pub title: String,
    pub content: String,
    /// Extra action buttons, placed before the close button.
    pub actions: Vec<Button>,
    pub close_label: String,
}

impl Modal {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_action(mut self, action: Button) -> Self {
        self.actions.push(action);
        self
    }
}

impl Default for Modal {
    fn default() -> Self {
        Self {
            title: "Modal".to_string(),
            content: "Content goes here".to_string(),
            actions: Vec::new(),
            close_label: "ปิด".to_string(),
        }
    }
}

impl FromProps for Modal {
    fn from_props(props: &Properties) -> Result<Self, RenderError> {
        let defaults = Self::default();
        let actions = match props.get("actions") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::Object(action) => Button::from_props(action).ok(),
                    _ => None,
                })
                .collect(),
            _ => defaults.actions,
        };
        Ok(Self {
            title: props.string("title").unwrap_or(defaults.title),
            content: props.string("content").unwrap_or(defaults.content),
            actions,
            close_label: props.string("closeLabel").unwrap_or(defaults.close_label),
        })
    }
}

impl Render for Modal {
    fn render_into(&self, w: &mut MarkupWriter) {
        let hide = Handler::call("window.hideModal", &[]);
        let class = format!(
            "{} fixed inset-0 bg-black bg-opacity-60 flex justify-center items-center z-50",
            dom::HIDDEN
        );

        w.open("div", &[("id", dom::QUICK_ORDER_MODAL), ("class", class.as_str())]);
        w.open("div", &[("class", "bg-white p-6 rounded-xl shadow-2xl max-w-md w-full transform transition-all")]);

        w.open("div", &[("class", "flex justify-between items-center mb-4")]);
        w.element("h2", &[("class", "text-xl font-bold text-gray-800")], &self.title);
        w.open(
            "button",
            &[("class", "text-gray-500 hover:text-gray-700"), ("onclick", hide.as_str())],
        );
        icons::write(w, icons::CLOSE, "h-6 w-6");
        w.close("button");
        w.close("div");

        w.element("div", &[("class", "mb-6 text-gray-600")], &self.content);

        w.open("div", &[("class", "flex justify-end gap-3")]);
        for action in &self.actions {
            action.render_into(w);
        }
        w.element(
            "button",
            &[
                ("class", "bg-gray-200 text-gray-800 font-medium py-2 px-4 rounded-lg hover:bg-gray-300 transition-all"),
                ("onclick", hide.as_str()),
            ],
            &self.close_label,
        );
        w.close("div");

        w.close("div");
        w.close("div");
    }
}
