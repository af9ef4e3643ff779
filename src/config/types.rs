// Configuration type definitions

use serde::Deserialize;

use crate::autocomplete::AutocompleteOptions;

fn default_max_visible() -> usize {
    10
}

/// Picker configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickerConfig {
    /// Rows shown in the menu before it scrolls
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            max_visible: default_max_visible(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub autocomplete: AutocompleteOptions,
    #[serde(default)]
    pub picker: PickerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        assert!(config.autocomplete.close_on_select);
        assert_eq!(config.picker.max_visible, 10);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("[picker]\n").unwrap();
        assert_eq!(config.picker.max_visible, 10);

        let config: Config =
            toml::from_str("[autocomplete]\nshould_select_with_tab = false\n").unwrap();
        assert!(!config.autocomplete.should_select_with_tab);
        assert!(config.autocomplete.should_select_with_enter);
    }
}
