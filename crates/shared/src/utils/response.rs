use crate::errors::ErrorResponse;
use axum::{
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

const APPLICATION_JSON: &str = "application/json";

/// Serializes `payload` as the JSON body of a response with `status`.
///
/// A payload that fails to serialize is answered with a 500 carrying the
/// serializer's message, whatever status was asked for.
pub fn send_response<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => (status, [(CONTENT_TYPE, APPLICATION_JSON)], body).into_response(),
        Err(err) => {
            error!("❌ Failed to serialize response payload: {err}");

            let fallback = serde_json::to_vec(&ErrorResponse::new(err.to_string()))
                .unwrap_or_default();

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(CONTENT_TYPE, APPLICATION_JSON)],
                fallback,
            )
                .into_response()
        }
    }
}

pub fn send_error(status: StatusCode, message: &str) -> Response {
    send_response(status, &ErrorResponse::new(message))
}
