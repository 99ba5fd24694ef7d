use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{management::TokenManager, success, warning};

/// `GET /` - sends the browser to Spotify's authorization page to start
/// the OAuth flow.
pub async fn index(Extension(manager): Extension<Arc<TokenManager>>) -> Response {
    match manager.authorize_url() {
        Ok(url) => (StatusCode::FOUND, [(header::LOCATION, url)]).into_response(),
        Err(e) => e.into_response(),
    }
}

/// `GET /callback?code=` - the redirect target Spotify calls after the user
/// authorizes. Exchanges the code for a token record, persists it and sends
/// the browser on to the endpoint overview.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(manager): Extension<Arc<TokenManager>>,
) -> Response {
    let code = params.get("code").map(String::as_str).unwrap_or_default();

    match manager.complete_authorization(code).await {
        Ok(()) => {
            success!("Authorization complete; token stored.");
            (StatusCode::FOUND, [(header::LOCATION, "/docs".to_string())]).into_response()
        }
        Err(e) => {
            warning!("Authorization callback failed: {}", e);
            e.into_response()
        }
    }
}
