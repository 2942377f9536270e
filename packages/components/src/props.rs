use crate::error::RenderError;
use crate::price::Price;
use serde_json::Value;

/// Untyped property bag, as authored in JSON trees and config.
pub type Properties = serde_json::Map<String, Value>;

/// Build a typed props struct from an untyped bag.
///
/// Keys the variant does not understand are ignored. Missing optional keys
/// fall back to the variant's defaults; a missing required key is a
/// [`RenderError::MissingRequiredProperty`].
pub trait FromProps: Sized {
    fn from_props(props: &Properties) -> Result<Self, RenderError>;
}

pub(crate) trait PropertiesExt {
    fn string(&self, key: &str) -> Option<String>;
    fn flag(&self, key: &str) -> Option<bool>;
    fn price(&self, variant: &str, key: &str) -> Option<Price>;
    fn int(&self, key: &str) -> Option<i64>;
}

impl PropertiesExt for Properties {
    /// Strings as-is, numbers and booleans in their JSON spelling.
    fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn flag(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => Some(s == "true"),
            Value::Number(n) => Some(n.as_f64().is_some_and(|v| v != 0.0)),
            _ => None,
        }
    }

    /// An unreadable price is logged and treated as absent.
    fn price(&self, variant: &str, key: &str) -> Option<Price> {
        let value = self.get(key)?;
        Price::read_or_warn(value, variant)
    }

    fn int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
