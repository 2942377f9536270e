use serde_json::Value;
use std::collections::HashMap;

/// Key under which a visit's cart placeholder is kept.
pub const CART_SESSION_KEY: &str = "cart";

/// Per-visit key-value store owned by the host. The composer only checks
/// for keys and seeds placeholders; it never reads values back.
pub trait SessionStore {
    fn contains(&self, key: &str) -> bool;
    fn insert(&mut self, key: &str, value: Value);
}

#[derive(Debug, Default, Clone)]
pub struct MemorySession {
    values: HashMap<String, Value>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

impl SessionStore for MemorySession {
    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn insert(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }
}

/// Seeds an empty cart placeholder unless the visit already has one.
/// Returns true when a placeholder was created.
pub fn ensure_cart_placeholder(session: &mut dyn SessionStore) -> bool {
    if session.contains(CART_SESSION_KEY) {
        return false;
    }
    session.insert(CART_SESSION_KEY, Value::Array(Vec::new()));
    tracing::debug!(key = CART_SESSION_KEY, "Seeded session cart placeholder");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholder_seeded_once() {
        let mut session = MemorySession::new();
        assert!(ensure_cart_placeholder(&mut session));
        assert_eq!(session.get(CART_SESSION_KEY), Some(&json!([])));
        assert!(!ensure_cart_placeholder(&mut session));
    }

    #[test]
    fn test_existing_value_is_left_alone() {
        let mut session = MemorySession::new();
        session.insert(CART_SESSION_KEY, json!(["kept"]));
        assert!(!ensure_cart_placeholder(&mut session));
        assert_eq!(session.get(CART_SESSION_KEY), Some(&json!(["kept"])));
    }
}
