use crate::{errors::repository::RepositoryError, utils::send_error};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Storage failures reach the client with the driver's text unchanged.
impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
            RepositoryError::Sqlx(err) => HttpError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            HttpError::BadRequest(msg) | HttpError::NotFound(msg) | HttpError::Internal(msg) => msg,
        };

        send_error(status, &message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use axum::body::to_bytes;

    async fn body_of(err: HttpError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn bad_request_uses_error_envelope() {
        let (status, body) = body_of(HttpError::BadRequest("invalid product id".into())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "invalid product id");
    }

    #[tokio::test]
    async fn sqlx_error_text_is_passed_through() {
        let expected = sqlx::Error::RowNotFound.to_string();
        let err = HttpError::from(RepositoryError::Sqlx(sqlx::Error::RowNotFound));

        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, expected);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = HttpError::from(RepositoryError::NotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
