use poem::http::StatusCode;

use business::domain::relay::errors::RelayError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RelayError {
    fn into_error_response(self) -> (StatusCode, ErrorResponse) {
        let (status, error, message) = match &self {
            RelayError::OriginNotAllowed => {
                (StatusCode::FORBIDDEN, "Forbidden", "Origin not permitted.")
            }
            RelayError::EmptyMessages => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                "Messages list is missing, empty, or invalid.",
            ),
            RelayError::UpstreamTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "Gateway Timeout",
                "Request to AI service timed out.",
            ),
            RelayError::UpstreamUnreachable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Service Unavailable",
                "Network error connecting to AI service.",
            ),
        };

        (status, ErrorResponse::new(error, message))
    }
}
