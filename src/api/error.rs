use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::{management::TokenError, types::ErrorResponse};

// Boundary between the lifecycle manager's error taxonomy and HTTP status
// codes. Every handler funnels failures through here, so no error reaches
// a client unclassified.
impl IntoResponse for TokenError {
    fn into_response(self) -> Response {
        let status = match &self {
            TokenError::Configuration(_) | TokenError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            TokenError::MissingCode => StatusCode::BAD_REQUEST,
            TokenError::Exchange(_) => StatusCode::BAD_GATEWAY,
            TokenError::NoToken => StatusCode::UNAUTHORIZED,
        };

        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Maps a failed upstream data call to a bad-gateway response carrying the
/// upstream detail. Query failures are never retried.
pub fn upstream_error(err: reqwest::Error) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            detail: format!("Spotify API error: {}", err),
        }),
    )
        .into_response()
}
