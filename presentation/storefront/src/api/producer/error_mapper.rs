use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::producer::errors::ProducerError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ProducerError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            ProducerError::NameEmpty
            | ProducerError::NegativePrice
            | ProducerError::NegativeStock => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            ProducerError::ProductNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", &message)
            }
            ProducerError::Gateway(err) => err.into_error_response(),
        }
    }
}
