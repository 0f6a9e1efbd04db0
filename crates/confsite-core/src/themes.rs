//! Research theme cards with single-expansion accordion behaviour

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// At most one theme is expanded at a time
#[derive(Debug, Clone)]
pub struct ThemeExplorer {
    themes: Vec<Theme>,
    active: Option<usize>,
}

impl ThemeExplorer {
    pub fn new(themes: Vec<Theme>) -> Self {
        Self {
            themes,
            active: None,
        }
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Expand `id`, or collapse it if it is already expanded.
    /// Returns the expanded theme afterwards. Unknown ids change nothing.
    pub fn toggle(&mut self, id: &str) -> Option<&Theme> {
        if let Some(index) = self.themes.iter().position(|t| t.id == id) {
            self.active = if self.active == Some(index) {
                None
            } else {
                Some(index)
            };
        }
        self.active()
    }

    pub fn active(&self) -> Option<&Theme> {
        self.active.and_then(|i| self.themes.get(i))
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.active().is_some_and(|t| t.id == id)
    }

    pub fn collapse_all(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn test_toggle_switches_and_collapses() {
        let mut explorer = ThemeExplorer::new(builtin::themes());
        assert!(explorer.active().is_none());

        assert_eq!(explorer.toggle("ai").map(|t| t.id.as_str()), Some("ai"));
        assert_eq!(
            explorer.toggle("symbolic").map(|t| t.id.as_str()),
            Some("symbolic")
        );
        assert!(!explorer.is_expanded("ai"));

        assert!(explorer.toggle("symbolic").is_none());
    }

    #[test]
    fn test_unknown_id_keeps_state() {
        let mut explorer = ThemeExplorer::new(builtin::themes());
        explorer.toggle("it");
        assert_eq!(explorer.toggle("astrology").map(|t| t.id.as_str()), Some("it"));
        explorer.collapse_all();
        assert!(explorer.active().is_none());
    }
}
