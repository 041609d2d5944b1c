use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("No product is currently selected")]
    NoCurrentProduct,

    #[error("At least two products are required for a comparison")]
    NotEnoughProducts,

    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
