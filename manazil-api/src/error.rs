use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use manazil_catalog::CatalogError;
use manazil_core::CoreError;
use manazil_shared::CodeError;
use manazil_store::StoreError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    BadRequestError(String),
    ValidationError(String),
    NotFoundError(String),
    UnavailableError(String),
    InternalServerError(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequestError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ValidationError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::UnavailableError(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::SessionNotFound(_) => AppError::NotFoundError(err.to_string()),
            StoreError::CapacityReached(_) => AppError::UnavailableError(err.to_string()),
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            // Sessions in the registry are always started; reaching this is a wiring bug
            CoreError::NotInitialized => AppError::InternalServerError(err.to_string()),
            CoreError::UnknownHotel(_) => AppError::NotFoundError(err.to_string()),
            CoreError::Serialization(_) => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::NotFoundError(err.to_string())
    }
}

impl From<CodeError> for AppError {
    fn from(err: CodeError) -> Self {
        AppError::BadRequestError(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Anyhow(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Anyhow(err.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON with the wrong shape or out-of-range values
            JsonRejection::JsonDataError(err) => AppError::ValidationError(err.body_text()),
            other => AppError::BadRequestError(other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequestError(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequestError(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_serialization_failure_is_internal() {
        let err: AppError = CoreError::Serialization("key must be a string".to_string()).into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal Server Error");
    }

    #[tokio::test]
    async fn test_unknown_hotel_is_not_found() {
        let (status, body) = render(CoreError::UnknownHotel("nope".to_string()).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Unknown hotel: nope");
    }
}
