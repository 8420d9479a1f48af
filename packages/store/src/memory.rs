use std::sync::{Arc, Mutex};

use crate::tokens::TokenStore;

/// In-memory TokenStore for testing and native fallback.
///
/// Clones share the same slot, so a client and a session constructed from the
/// same instance observe each other's writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokens {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokens {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokens {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_by_default() {
        let tokens = MemoryTokens::new();
        assert_eq!(tokens.get(), None);
    }

    #[test]
    fn test_set_then_get() {
        let tokens = MemoryTokens::new();
        tokens.set("abc123");
        assert_eq!(tokens.get(), Some("abc123".to_string()));

        tokens.set("def456");
        assert_eq!(tokens.get(), Some("def456".to_string()));
    }

    #[test]
    fn test_clear() {
        let tokens = MemoryTokens::new();
        tokens.set("abc123");
        tokens.clear();
        assert_eq!(tokens.get(), None);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let tokens = MemoryTokens::new();
        let other = tokens.clone();

        tokens.set("shared");
        assert_eq!(other.get(), Some("shared".to_string()));

        other.clear();
        assert_eq!(tokens.get(), None);
    }
}
