use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            CartError::InvalidQuantity => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.invalid_quantity",
            ),
            CartError::NegativePrice => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.negative_price",
            ),
            CartError::ProductNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "cart.product_not_found")
            }
            CartError::ProducerNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "cart.producer_not_found")
            }
            CartError::Gateway(err) => err.into_error_response(),
        }
    }
}
