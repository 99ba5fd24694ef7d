use axum::response::Html;

// Landing page the callback redirects to once authorization succeeded.
pub async fn docs() -> Html<&'static str> {
    Html(
        r#"<h2>Spotcast API</h2>
<p>Authorization complete. Available endpoints:</p>
<ul>
  <li><code>GET /currently-playing</code> - artist and track of the playing song</li>
  <li><code>GET /currently-playing-verbose</code> - playing song with album, artwork and progress</li>
  <li><code>GET /user-info</code> - profile of the authorized user</li>
  <li><code>GET /top-five</code> - top five tracks, short term</li>
  <li><code>GET /top-five-artists</code> - top five artists, short term</li>
  <li><code>GET /recently-played?limit=5</code> - play history, newest first</li>
  <li><code>GET /health</code> - service status</li>
</ul>"#,
    )
}
