use contracts::shared::config::{load_config, CatalogueConfig};

/// Конфигурация, собранная вместе с приложением
const BUNDLED_CONFIG: &str = include_str!("../../catalogue.toml");

pub fn bundled_config() -> Result<CatalogueConfig, String> {
    load_config(Some(BUNDLED_CONFIG)).map_err(|e| format!("{e:#}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_is_valid() {
        let config = CatalogueConfig::from_toml_str(BUNDLED_CONFIG)
            .expect("catalogue.toml must parse");
        assert!(config.viewport.spread_breakpoint_px > 0);
        assert!(config.gestures.swipe_threshold_px > 0.0);
    }
}
