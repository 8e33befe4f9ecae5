use crate::domain::a002_catalogue_book::Page;
use crate::shared::navigation::NavigationState;
use std::collections::HashMap;

/// Диапазон страниц одной категории
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpan {
    pub key: String,
    pub first_index: usize,
    pub last_index: usize,
    pub page_count: usize,
}

/// Category -> first page index, built by one left-to-right scan.
///
/// Products without a category are grouped under the sentinel label given
/// at build time. Categories keep their first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIndex {
    spans: Vec<CategorySpan>,
    positions: HashMap<String, usize>,
    uncategorized_label: String,
}

impl CategoryIndex {
    pub fn build(pages: &[Page], uncategorized_label: &str) -> Self {
        let mut spans: Vec<CategorySpan> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (index, page) in pages.iter().enumerate() {
            let Some(product) = page.product() else {
                continue;
            };
            let key = product.category_key().unwrap_or(uncategorized_label);

            match positions.get(key).copied() {
                Some(position) => {
                    let span = &mut spans[position];
                    span.last_index = index;
                    span.page_count += 1;
                }
                None => {
                    positions.insert(key.to_string(), spans.len());
                    spans.push(CategorySpan {
                        key: key.to_string(),
                        first_index: index,
                        last_index: index,
                        page_count: 1,
                    });
                }
            }
        }

        Self {
            spans,
            positions,
            uncategorized_label: uncategorized_label.to_string(),
        }
    }

    /// First page index of the category.
    pub fn get(&self, category: &str) -> Option<usize> {
        self.span(category).map(|span| span.first_index)
    }

    pub fn span(&self, category: &str) -> Option<&CategorySpan> {
        self.positions.get(category).map(|&i| &self.spans[i])
    }

    pub fn contains(&self, category: &str) -> bool {
        self.positions.contains_key(category)
    }

    /// Spans in first-seen order.
    pub fn spans(&self) -> &[CategorySpan] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn uncategorized_label(&self) -> &str {
        &self.uncategorized_label
    }

    /// Category to highlight for the current spread.
    ///
    /// Looks at the left page, then at the page after it when the left one
    /// is the table of contents. Never mutates anything.
    pub fn active_category(&self, pages: &[Page], state: &NavigationState) -> Option<String> {
        let cursor = state.cursor();
        [cursor, cursor + 1]
            .into_iter()
            .filter_map(|index| pages.get(index).and_then(Page::product))
            .next()
            .map(|product| {
                product
                    .category_key()
                    .unwrap_or(self.uncategorized_label.as_str())
                    .to_string()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalogue_product::ProductRecord;
    use crate::domain::a002_catalogue_book::Catalogue;
    use crate::shared::navigation::SpreadEngine;

    const SENTINEL: &str = "Non classé";

    fn catalogue(entries: &[(&str, Option<&str>)]) -> Catalogue {
        Catalogue::from_records(
            entries
                .iter()
                .map(|(slug, category)| {
                    let record = ProductRecord::new(*slug, slug.to_uppercase());
                    match category {
                        Some(c) => record.with_category(*c),
                        None => record,
                    }
                })
                .collect(),
        )
    }

    #[test]
    fn test_first_index_per_category() {
        let catalogue = catalogue(&[("a", Some("X")), ("b", Some("X")), ("c", Some("Y"))]);
        let pages = catalogue.pages();
        assert_eq!(pages.len(), 4);

        let index = CategoryIndex::build(&pages, SENTINEL);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("X"), Some(1));
        assert_eq!(index.get("Y"), Some(3));
        assert_eq!(index.get("Z"), None);
    }

    #[test]
    fn test_later_occurrences_do_not_move_first_index() {
        let catalogue = catalogue(&[
            ("a", Some("Vente à emporter")),
            ("b", Some("Vente à emporter")),
            ("c", Some("Bar / Brasserie")),
            ("d", Some("Bar / Brasserie")),
            ("e", Some("Couverts")),
            ("f", Some("Bar / Brasserie")),
            ("g", Some("Couverts")),
        ]);
        let index = CategoryIndex::build(&catalogue.pages(), SENTINEL);
        assert_eq!(index.get("Couverts"), Some(5));

        let span = index.span("Couverts").unwrap();
        assert_eq!(span.last_index, 7);
        assert_eq!(span.page_count, 2);
    }

    #[test]
    fn test_first_seen_order() {
        let catalogue = catalogue(&[("a", Some("B")), ("b", Some("A")), ("c", Some("B"))]);
        let index = CategoryIndex::build(&catalogue.pages(), SENTINEL);
        let keys: Vec<&str> = index.spans().iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["B", "A"]);
    }

    #[test]
    fn test_missing_category_uses_sentinel() {
        let catalogue = catalogue(&[("a", None), ("b", Some("X")), ("c", None)]);
        let index = CategoryIndex::build(&catalogue.pages(), SENTINEL);
        assert_eq!(index.get(SENTINEL), Some(1));
        assert_eq!(index.span(SENTINEL).unwrap().page_count, 2);
    }

    #[test]
    fn test_active_category_skips_toc() {
        let catalogue = catalogue(&[("a", Some("X")), ("b", Some("Y")), ("c", None)]);
        let pages = catalogue.pages();
        let index = CategoryIndex::build(&pages, SENTINEL);
        let mut engine = SpreadEngine::from_catalogue(&catalogue);

        assert_eq!(index.active_category(&pages, &engine.state()), Some("X".to_string()));

        engine.next();
        assert_eq!(index.active_category(&pages, &engine.state()), Some("X".to_string()));

        engine.next();
        assert_eq!(index.active_category(&pages, &engine.state()), Some("Y".to_string()));

        engine.next();
        assert_eq!(
            index.active_category(&pages, &engine.state()),
            Some(SENTINEL.to_string())
        );
    }

    #[test]
    fn test_active_category_of_empty_catalogue() {
        let catalogue = catalogue(&[]);
        let pages = catalogue.pages();
        let index = CategoryIndex::build(&pages, SENTINEL);
        let engine = SpreadEngine::from_catalogue(&catalogue);
        assert!(index.is_empty());
        assert_eq!(index.active_category(&pages, &engine.state()), None);
    }
}
