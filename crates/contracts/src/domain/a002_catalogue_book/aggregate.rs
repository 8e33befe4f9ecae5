use crate::domain::a001_catalogue_product::ProductRecord;
use std::sync::Arc;

/// Страница книги каталога.
///
/// `pages[0]` is always the table of contents; `pages[1..]` follow the
/// product list one-to-one, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Toc,
    Product(Arc<ProductRecord>),
}

impl Page {
    pub fn is_toc(&self) -> bool {
        matches!(self, Page::Toc)
    }

    pub fn product(&self) -> Option<&ProductRecord> {
        match self {
            Page::Toc => None,
            Page::Product(product) => Some(product),
        }
    }
}

pub fn build_pages(products: &[Arc<ProductRecord>]) -> Vec<Page> {
    std::iter::once(Page::Toc)
        .chain(products.iter().cloned().map(Page::Product))
        .collect()
}
