use thiserror::Error;

/// Ошибки загрузки данных каталога
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("Invalid catalogue JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate product slug: {0}")]
    DuplicateSlug(String),
}
