use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Ask before quitting while the list still has tasks
    #[serde(default = "default_true")]
    pub confirm_exit: bool,
    /// Ask before deleting more than one task at once
    #[serde(default = "default_true")]
    pub confirm_multi_delete: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            confirm_exit: true,
            confirm_multi_delete: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint line under the list
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot (e.g. `highlight = "#FB4196"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.behavior.confirm_exit);
        assert!(config.behavior.confirm_multi_delete);
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            r##"[behavior]
confirm_exit = false

[ui.colors]
highlight = "#112233"
"##,
        )
        .unwrap();
        assert!(!config.behavior.confirm_exit);
        assert!(config.behavior.confirm_multi_delete);
        assert_eq!(
            config.ui.colors.get("highlight").map(String::as_str),
            Some("#112233")
        );
    }
}
