use super::index::CategoryIndex;
use super::tabs::ordered_spans;
use crate::shared::config::CategoryConfig;

/// Строка оглавления
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub key: String,
    pub color: String,
    /// 1-based page numbers, as printed
    pub first_page: usize,
    pub last_page: usize,
    pub target_index: usize,
}

impl TocEntry {
    /// "Page 3" or "Page 4 - 5"
    pub fn pages_label(&self) -> String {
        if self.last_page > self.first_page {
            format!("Page {} - {}", self.first_page, self.last_page)
        } else {
            format!("Page {}", self.first_page)
        }
    }
}

/// Table-of-contents rows, in tab order.
pub fn toc_entries(index: &CategoryIndex, config: &CategoryConfig) -> Vec<TocEntry> {
    ordered_spans(index, config)
        .into_iter()
        .map(|span| TocEntry {
            key: span.key.clone(),
            color: config.color_for(&span.key).to_string(),
            first_page: span.first_index + 1,
            last_page: span.last_index + 1,
            target_index: span.first_index,
        })
        .collect()
}
