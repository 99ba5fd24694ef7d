use std::sync::Arc;

use axum::{
    Extension,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::{
    api::error::upstream_error,
    management::TokenManager,
    spotify,
    types::{ArtistInfo, FullArtist, PrivateUser, TopTracks, UserInfo},
};

/// `GET /user-info` - profile of the authorized user.
pub async fn user_info(Extension(manager): Extension<Arc<TokenManager>>) -> Response {
    let token = match manager.get_valid_token().await {
        Ok(token) => token,
        Err(e) => return e.into_response(),
    };

    match spotify::user::me(manager.config(), &token).await {
        Ok(user) => (StatusCode::OK, Json(user_profile(&user))).into_response(),
        Err(e) => upstream_error(e),
    }
}

/// `GET /top-five` - the user's top five tracks of the short-term range,
/// passed through from Spotify field-for-field.
pub async fn top_five(Extension(manager): Extension<Arc<TokenManager>>) -> Response {
    let token = match manager.get_valid_token().await {
        Ok(token) => token,
        Err(e) => return e.into_response(),
    };

    match spotify::user::top_tracks(manager.config(), &token, 5, "short_term").await {
        Ok(page) => (
            StatusCode::OK,
            Json(TopTracks {
                top_tracks: page.items,
            }),
        )
            .into_response(),
        Err(e) => upstream_error(e),
    }
}

/// `GET /top-five-artists` - the user's top five artists of the short-term
/// range, mapped to the artist DTO.
pub async fn top_five_artists(Extension(manager): Extension<Arc<TokenManager>>) -> Response {
    let token = match manager.get_valid_token().await {
        Ok(token) => token,
        Err(e) => return e.into_response(),
    };

    match spotify::user::top_artists(manager.config(), &token, 5, "short_term").await {
        Ok(page) => {
            let artists: Vec<ArtistInfo> = page.items.iter().map(artist_info).collect();
            (StatusCode::OK, Json(artists)).into_response()
        }
        Err(e) => upstream_error(e),
    }
}

/// Shapes the upstream profile into the response DTO. Absent images and
/// follower counts stay absent; no placeholder values are invented.
pub fn user_profile(user: &PrivateUser) -> UserInfo {
    let image = user.images.first();

    UserInfo {
        display_name: user.display_name.clone(),
        uri: user.uri.clone(),
        image: image.map(|i| i.url.clone()),
        height: image.and_then(|i| i.height),
        width: image.and_then(|i| i.width),
        followers: user.followers.as_ref().map(|f| f.total),
    }
}

/// Maps a full artist object to the response DTO.
pub fn artist_info(artist: &FullArtist) -> ArtistInfo {
    ArtistInfo {
        id: artist.id.clone(),
        name: artist.name.clone(),
        uri: artist.uri.clone(),
        spotify_url: artist.external_urls.spotify.clone(),
        image_url: artist.images.first().map(|image| image.url.clone()),
        followers: artist.followers.as_ref().map(|f| f.total).unwrap_or(0),
    }
}
