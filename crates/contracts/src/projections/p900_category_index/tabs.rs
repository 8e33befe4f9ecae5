use super::index::{CategoryIndex, CategorySpan};
use crate::shared::config::CategoryConfig;
use serde::Serialize;

/// Вкладка боковой навигации по категориям
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTab {
    /// Ключ категории, например "Couverts"
    pub key: String,
    /// Отображаемый текст, например "COUVERTS"
    pub label: String,
    pub color: String,
    /// Первая страница категории в книге
    pub target_index: usize,
}

/// Preferred categories first (in configured order, when present), then the
/// rest in first-seen order.
pub fn ordered_tabs(index: &CategoryIndex, config: &CategoryConfig) -> Vec<CategoryTab> {
    ordered_spans(index, config)
        .into_iter()
        .map(|span| CategoryTab {
            key: span.key.clone(),
            label: config.label_for(&span.key),
            color: config.color_for(&span.key).to_string(),
            target_index: span.first_index,
        })
        .collect()
}

pub(super) fn ordered_spans<'a>(
    index: &'a CategoryIndex,
    config: &CategoryConfig,
) -> Vec<&'a CategorySpan> {
    let mut ordered: Vec<&CategorySpan> = Vec::with_capacity(index.len());
    for key in &config.preferred_order {
        if let Some(span) = index.span(key) {
            if !ordered.iter().any(|s| s.key == span.key) {
                ordered.push(span);
            }
        }
    }
    for span in index.spans() {
        if !config.preferred_order.contains(&span.key) {
            ordered.push(span);
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalogue_product::ProductRecord;
    use crate::domain::a002_catalogue_book::Catalogue;
    use crate::shared::config::CatalogueConfig;

    fn index_for(categories: &[Option<&str>], config: &CategoryConfig) -> CategoryIndex {
        let records = categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let record = ProductRecord::new(format!("p{i}"), "Produit");
                match category {
                    Some(c) => record.with_category(*c),
                    None => record,
                }
            })
            .collect();
        let catalogue = Catalogue::from_records(records);
        CategoryIndex::build(&catalogue.pages(), &config.uncategorized_label)
    }

    #[test]
    fn test_preferred_order_then_first_seen() {
        let config = CatalogueConfig::embedded().unwrap().categories;
        let index = index_for(
            &[
                Some("Emballages"),
                Some("Couverts"),
                None,
                Some("Vente à emporter"),
                Some("Couverts"),
            ],
            &config,
        );

        let tabs = ordered_tabs(&index, &config);
        let keys: Vec<&str> = tabs.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["Vente à emporter", "Couverts", "Emballages", "Non classé"]
        );

        let targets: Vec<usize> = tabs.iter().map(|t| t.target_index).collect();
        assert_eq!(targets, vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_tab_colors_and_labels() {
        let config = CatalogueConfig::embedded().unwrap().categories;
        let index = index_for(&[Some("Couverts"), Some("Emballages")], &config);
        let tabs = ordered_tabs(&index, &config);

        assert_eq!(tabs[0].label, "COUVERTS");
        assert_eq!(tabs[0].color, "#EF4444");
        assert_eq!(tabs[1].label, "EMBALLAGES");
        assert_eq!(tabs[1].color, config.default_color);
    }

    #[test]
    fn test_absent_preferred_categories_are_skipped() {
        let config = CatalogueConfig::embedded().unwrap().categories;
        let index = index_for(&[Some("Bar / Brasserie")], &config);
        let tabs = ordered_tabs(&index, &config);
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].target_index, 1);
    }

    #[test]
    fn test_duplicate_preferred_entries_yield_one_tab() {
        let mut config = CatalogueConfig::embedded().unwrap().categories;
        config.preferred_order = vec!["X".to_string(), "X".to_string()];
        let index = index_for(&[Some("X")], &config);
        assert_eq!(ordered_tabs(&index, &config).len(), 1);
    }
}
