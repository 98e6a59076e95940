use reqwest::{Client, Url};

use crate::{
    config::{Config, SPOTIFY_AUTH_SCOPE},
    types::{Token, TokenResponse},
    utils,
};

use super::{SpotifyError, check_status};

/// Builds the URL the browser is sent to for signing in.
///
/// The query carries `response_type=code`, the client id, the fixed scope set,
/// the configured redirect URI and the `state` that ties the callback back to
/// this login. Values are form-encoded, so spaces in the scope become `+`.
///
/// # Example
///
/// ```
/// let url = authorize_url(&config, "k2V9...");
/// // https://accounts.spotify.com/authorize?response_type=code&client_id=...
/// ```
pub fn authorize_url(config: &Config, state: &str) -> Url {
    let mut url = config.auth_url.clone();
    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", &config.client_id)
        .append_pair("scope", SPOTIFY_AUTH_SCOPE)
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("state", state);
    url
}

/// Exchanges an authorization code for an access token.
///
/// Completes the authorization-code flow by posting the code together with the
/// client credentials to the token endpoint.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `config` - Token endpoint, redirect URI and client credentials
/// * `code` - Authorization code received on the callback
///
/// # Errors
///
/// Returns [`SpotifyError::Status`] when Spotify rejects the exchange, e.g. for
/// an expired or already used code, and [`SpotifyError::Http`] for network
/// failures or a malformed token body.
pub async fn exchange_code(
    client: &Client,
    config: &Config,
    code: &str,
) -> Result<Token, SpotifyError> {
    let response = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ])
        .send()
        .await?;

    let json: TokenResponse = check_status(response).await?.json().await?;

    Ok(Token {
        access_token: json.access_token,
        expires_in: json.expires_in,
        obtained_at: utils::now(),
    })
}
