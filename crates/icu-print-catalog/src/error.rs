use thiserror::Error;

#[derive(Debug, Error)]
pub enum AstError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown element type {0}")]
    UnknownElementType(u8),
    #[error("unknown skeleton type {0}")]
    UnknownSkeletonType(u8),
    #[error("unknown plural type {0}")]
    UnknownPluralType(String),
    #[error("{element} element is missing {field}")]
    MissingField {
        element: &'static str,
        field: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("parse error for {id}: {message}")]
    Parse { id: String, message: String },
    #[error("invalid ast for {id}: {source}")]
    Ast { id: String, source: AstError },
    #[error("description error for {id}: {source}")]
    Description {
        id: String,
        source: serde_json::Error,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
