use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config, error, info, management::TokenManager};

pub async fn start_api_server(manager: Arc<TokenManager>) {
    let app = Router::new()
        .route("/", get(api::index))
        .route("/callback", get(api::callback))
        .route("/currently-playing", get(api::currently_playing))
        .route(
            "/currently-playing-verbose",
            get(api::currently_playing_verbose),
        )
        .route("/user-info", get(api::user_info))
        .route("/top-five", get(api::top_five))
        .route("/top-five-artists", get(api::top_five_artists))
        .route("/recently-played", get(api::recently_played))
        .route("/docs", get(api::docs))
        .route("/health", get(api::health))
        .layer(Extension(manager));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
