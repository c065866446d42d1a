use crate::types::Category;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Catalog has no equipment ids for category: {0}")]
    EmptyCategory(Category),

    #[error("Validation failed: {0}")]
    Validation(String),
}
