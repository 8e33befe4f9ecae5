use super::config::bundled_config;
use contracts::domain::a002_catalogue_book::Catalogue;
use contracts::shared::config::CatalogueConfig;

/// Исходные данные каталога, вшитые в бандл
const PRODUCTS_JSON: &str = include_str!("../../data/products.json");

/// Parses the bundled products and configuration once, at start-up.
pub fn load_bundle() -> Result<(Catalogue, CatalogueConfig), String> {
    let config = bundled_config()?;
    let catalogue = Catalogue::from_json(PRODUCTS_JSON).map_err(|e| e.to_string())?;
    if catalogue.is_empty() {
        log::warn!("Catalogue has no products, only the table of contents will be shown");
    }
    Ok((catalogue, config))
}
