use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("No player ID provided.")]
    MissingPlayerId,
    #[error("Number ID invalid.")]
    InvalidPlayerId,
    #[error("Player not found.")]
    PlayerNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingPlayerId | ApiError::InvalidPlayerId => StatusCode::BAD_REQUEST,
            ApiError::PlayerNotFound => StatusCode::NOT_FOUND,
        }
    }
}

// Body is the bare message encoded as a JSON string.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_string())).into_response()
    }
}
