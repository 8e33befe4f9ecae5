use super::aggregate::{build_pages, Page};
use crate::domain::a001_catalogue_product::{parse_products, ProductRecord};
use crate::shared::error::CatalogueError;
use std::sync::Arc;

/// Загруженный каталог: товары и производная последовательность страниц.
///
/// Built once per session; clones share the same records.
#[derive(Debug, Clone)]
pub struct Catalogue {
    products: Arc<[Arc<ProductRecord>]>,
    pages: Arc<[Page]>,
}

impl Catalogue {
    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        let products: Arc<[Arc<ProductRecord>]> = records.into_iter().map(Arc::new).collect();
        let pages = build_pages(&products).into();
        Self { products, pages }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        Ok(Self::from_records(parse_products(json)?))
    }

    pub fn products(&self) -> &[Arc<ProductRecord>] {
        &self.products
    }

    pub fn pages(&self) -> Arc<[Page]> {
        Arc::clone(&self.pages)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<Arc<ProductRecord>> {
        let slug = slug.trim();
        self.products.iter().find(|p| p.slug == slug).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_builds_pages() {
        let catalogue =
            Catalogue::from_json(r#"[ { "slug": "a", "category": "X" }, { "slug": "b" } ]"#).unwrap();
        assert_eq!(catalogue.products().len(), 2);
        assert_eq!(catalogue.pages().len(), 3);
        assert!(catalogue.pages()[0].is_toc());
    }

    #[test]
    fn test_find_by_slug() {
        let catalogue = Catalogue::from_records(vec![
            ProductRecord::new("pailles", "Pailles"),
            ProductRecord::new("film-etirable", "Film étirable"),
        ]);
        assert_eq!(
            catalogue.find_by_slug(" film-etirable ").map(|p| p.title.clone()),
            Some("Film étirable".to_string())
        );
        assert!(catalogue.find_by_slug("inconnu").is_none());
    }

    #[test]
    fn test_clones_share_records() {
        let catalogue = Catalogue::from_records(vec![ProductRecord::new("a", "A")]);
        let copy = catalogue.clone();
        assert!(Arc::ptr_eq(&catalogue.products()[0], &copy.products()[0]));
        assert!(Arc::ptr_eq(&catalogue.pages(), &copy.pages()));
    }
}
