use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogueConfig {
    pub viewport: ViewportConfig,
    pub gestures: GestureConfig,
    pub categories: CategoryConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ViewportConfig {
    /// Минимальная ширина (px), с которой показываются два листа рядом
    pub spread_breakpoint_px: u32,
    pub resize_debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GestureConfig {
    pub swipe_threshold_px: f64,
}

/// Category presentation: loaded once at start-up, never mutated.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CategoryConfig {
    /// Label for products without a category
    pub uncategorized_label: String,
    pub default_color: String,
    pub preferred_order: Vec<String>,
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl CategoryConfig {
    pub fn color_for(&self, category: &str) -> &str {
        self.colors
            .get(category)
            .map(String::as_str)
            .unwrap_or(self.default_color.as_str())
    }

    /// Configured label, otherwise the key upper-cased.
    pub fn label_for(&self, category: &str) -> String {
        self.labels
            .get(category)
            .cloned()
            .unwrap_or_else(|| category.to_uppercase())
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r##"
[viewport]
spread_breakpoint_px = 1024
resize_debounce_ms = 150

[gestures]
swipe_threshold_px = 40.0

[categories]
uncategorized_label = "Non classé"
default_color = "#e5813e"
preferred_order = [
    "Nos incontournables",
    "Vente à emporter",
    "Bar / Brasserie",
    "Traiteur / Laboratoire",
    "Couverts",
    "Gobelets / accessoires",
]

[categories.colors]
"Nos incontournables" = "#E5813E"
"Vente à emporter" = "#F59E0B"
"Bar / Brasserie" = "#22C55E"
"Traiteur / Laboratoire" = "#3B82F6"
"Couverts" = "#EF4444"
"Gobelets / accessoires" = "#8B5CF6"
"##;

impl CatalogueConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("invalid catalogue configuration")
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }
}

/// Load the catalogue configuration.
///
/// Search order:
/// 1. The bundled override, when given and valid
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<CatalogueConfig> {
    if let Some(contents) = override_toml {
        match CatalogueConfig::from_toml_str(contents) {
            Ok(config) => {
                log::info!("Loaded bundled catalogue configuration");
                return Ok(config);
            }
            Err(e) => {
                log::warn!("Bundled catalogue configuration rejected: {e:#}");
            }
        }
    }

    log::info!("Using default embedded configuration");
    CatalogueConfig::embedded()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = CatalogueConfig::embedded().unwrap();
        assert_eq!(config.viewport.spread_breakpoint_px, 1024);
        assert_eq!(config.gestures.swipe_threshold_px, 40.0);
        assert_eq!(config.categories.uncategorized_label, "Non classé");
        assert_eq!(config.categories.preferred_order.len(), 6);
        assert_eq!(config.categories.color_for("Couverts"), "#EF4444");
    }

    #[test]
    fn test_color_and_label_fallbacks() {
        let mut config = CatalogueConfig::embedded().unwrap().categories;
        assert_eq!(config.color_for("Emballages"), "#e5813e");
        assert_eq!(config.label_for("Couverts"), "COUVERTS");

        config
            .labels
            .insert("Couverts".to_string(), "Couverts & kits".to_string());
        assert_eq!(config.label_for("Couverts"), "Couverts & kits");
    }

    #[test]
    fn test_override_is_used_when_valid() {
        let custom = DEFAULT_CONFIG.replace("spread_breakpoint_px = 1024", "spread_breakpoint_px = 768");
        let config = load_config(Some(&custom)).unwrap();
        assert_eq!(config.viewport.spread_breakpoint_px, 768);
    }

    #[test]
    fn test_invalid_override_falls_back_to_default() {
        let config = load_config(Some("[viewport]\nspread_breakpoint_px = \"wide\"")).unwrap();
        assert_eq!(config, CatalogueConfig::embedded().unwrap());
    }

    #[test]
    fn test_colors_and_labels_are_optional() {
        let minimal = r##"
[viewport]
spread_breakpoint_px = 900
resize_debounce_ms = 0

[gestures]
swipe_threshold_px = 30.0

[categories]
uncategorized_label = "Autres"
default_color = "#000000"
preferred_order = []
"##;
        let config = CatalogueConfig::from_toml_str(minimal).unwrap();
        assert!(config.categories.colors.is_empty());
        assert_eq!(config.categories.color_for("X"), "#000000");
    }
}
