use crate::html::MarkupWriter;
use thiserror::Error;

/// Faults a node can carry instead of its normal output.
///
/// Neither aborts rendering: [`RenderError::write_fragment`] substitutes a
/// visible inline fragment in the node's place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("{variant} {property} is required")]
    MissingRequiredProperty {
        variant: &'static str,
        property: &'static str,
    },

    #[error("Invalid child component: {found}")]
    InvalidChild { found: String },
}

impl RenderError {
    pub fn missing(variant: &'static str, property: &'static str) -> Self {
        RenderError::MissingRequiredProperty { variant, property }
    }

    pub fn invalid_child(found: impl Into<String>) -> Self {
        RenderError::InvalidChild {
            found: found.into(),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            RenderError::MissingRequiredProperty { .. } => "missing-required-property",
            RenderError::InvalidChild { .. } => "invalid-child",
        }
    }

    pub(crate) fn write_fragment(&self, w: &mut MarkupWriter) {
        tracing::warn!(code = self.code(), error = %self, "Rendering inline error fragment");
        w.open(
            "div",
            &[("class", "render-error text-red-500"), ("data-error", self.code())],
        );
        w.text(&format!("Error: {}", self));
        w.close("div");
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("Empty price")]
    Empty,

    #[error("Invalid price: {0}")]
    Invalid(String),

    #[error("Price has more than two decimal places: {0}")]
    TooPrecise(String),

    #[error("Price out of range: {0}")]
    OutOfRange(String),
}
