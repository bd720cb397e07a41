use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;
use business::domain::rating::errors::RatingError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            OrderError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "order.not_found")
            }
            OrderError::InvalidStatusTransition { from, to } => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new(
                    "Conflict",
                    &format!("order.invalid_status_transition: {from} -> {to}"),
                )),
            ),
            OrderError::Gateway(err) => err.into_error_response(),
        }
    }
}

impl IntoErrorResponse for RatingError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            RatingError::ScoreRequired | RatingError::ScoreOutOfRange => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            RatingError::ClientInfoMissing => {
                error_response(StatusCode::BAD_REQUEST, "ClientInfoMissing", &message)
            }
            RatingError::Gateway(err) => err.into_error_response(),
        }
    }
}
