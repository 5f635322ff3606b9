use std::sync::Arc;

use poem::http::StatusCode;
use poem::web::Data;
use poem::{Body, Request, Response, handler};

use business::domain::relay::errors::RelayError;
use business::domain::relay::origin::{OriginDecision, OriginPolicy};
use business::domain::relay::use_cases::forward::ForwardChatUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::relay::dto::ChatCompletionRequestDto;
use crate::api::security::{apply_cors, request_origin};

fn json_error(status: StatusCode, error: ErrorResponse) -> Response {
    Response::builder()
        .status(status)
        .content_type("application/json")
        .body(serde_json::to_vec(&error).unwrap_or_default())
}

/// Main relay endpoint.
///
/// Checks the request origin against the allow-list before touching the
/// body, validates the chat payload, forwards it upstream with the
/// server-held credential and relays the upstream reply verbatim.
#[handler]
pub async fn relay(
    req: &Request,
    body: Body,
    Data(use_case): Data<&Arc<dyn ForwardChatUseCase>>,
    Data(policy): Data<&OriginPolicy>,
) -> Response {
    let origin = request_origin(req);
    let decision = policy.evaluate(origin.as_deref());

    if decision == OriginDecision::Denied {
        tracing::warn!("POST /lucid denied for origin {:?}", origin);
        let (status, error) = RelayError::OriginNotAllowed.into_error_response();
        return json_error(status, error);
    }

    let bytes = match body.into_bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("Failed to read request body: {}", err);
            let error = ErrorResponse::new("Bad Request", "Could not read request body.");
            return apply_cors(json_error(StatusCode::BAD_REQUEST, error), &decision);
        }
    };

    let dto: ChatCompletionRequestDto = match serde_json::from_slice(&bytes) {
        Ok(dto) => dto,
        Err(err) => {
            tracing::warn!("Invalid JSON received from client: {}", err);
            let error = ErrorResponse::new("Bad Request", "Invalid JSON format in request body.");
            return apply_cors(json_error(StatusCode::BAD_REQUEST, error), &decision);
        }
    };

    match use_case.execute(dto.into_domain()).await {
        Ok(reply) => {
            let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
            let response = Response::builder()
                .status(status)
                .content_type("application/json")
                .body(reply.body);
            apply_cors(response, &decision)
        }
        Err(err) => {
            let (status, error) = err.into_error_response();
            apply_cors(json_error(status, error), &decision)
        }
    }
}

/// CORS preflight for the relay endpoint.
#[handler]
pub async fn preflight(req: &Request, Data(policy): Data<&OriginPolicy>) -> Response {
    let origin = request_origin(req);

    match policy.evaluate(origin.as_deref()) {
        OriginDecision::Denied => {
            tracing::warn!("Preflight denied for origin {:?}", origin);
            Response::builder()
                .status(StatusCode::FORBIDDEN)
                .body("Origin not permitted for CORS preflight")
        }
        decision => {
            let response = Response::builder()
                .status(StatusCode::NO_CONTENT)
                .header("Access-Control-Allow-Methods", "POST, OPTIONS")
                .header("Access-Control-Allow-Headers", "Content-Type")
                .header("Access-Control-Max-Age", "86400")
                .finish();
            apply_cors(response, &decision)
        }
    }
}
