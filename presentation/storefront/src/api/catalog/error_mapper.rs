use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            CatalogError::ProducerNotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "catalog.producer_not_found",
            ),
            CatalogError::Gateway(err) => err.into_error_response(),
        }
    }
}
