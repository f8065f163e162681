use crate::helpers::JsonResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};

/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Failures of the catalog core. Status mapping lives in the `ResponseError` impl only.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Request body missing required fields or holding out-of-range values
    #[error("Some errors occurred in request body")]
    ValidationFailed(Vec<FieldError>),
    /// Product or review id does not resolve
    #[error("{0}")]
    NotFound(String),
    /// Catalog file missing, corrupt or unwritable
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl CatalogError {
    pub fn product_not_found(id: &str) -> Self {
        Self::NotFound(format!("Product with id {} not found", id))
    }

    pub fn review_not_found(product_id: &str, review_id: &str) -> Self {
        Self::NotFound(format!(
            "Review with id {} not found for product {}",
            review_id, product_id
        ))
    }
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::ValidationFailed(errors) => JsonResponse::<()>::build()
                .set_errors(errors.clone())
                .to_response(self.status_code(), &self.to_string()),
            Self::NotFound(msg) => {
                JsonResponse::<()>::build().to_response(self.status_code(), msg)
            }
            Self::StorageUnavailable(reason) => {
                // details stay in the log, the client gets a generic message
                tracing::error!("Catalog storage failure: {}", reason);
                JsonResponse::<()>::build()
                    .to_response(self.status_code(), "Internal server error")
            }
        }
    }
}
