use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{
    config::Config,
    types::{FullStats, TopItemsResponse},
    warning,
};

use super::{SpotifyError, check_status};

/// Kinds of items served by `/me/top/{type}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopItemKind {
    Tracks,
    Artists,
}

impl TopItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopItemKind::Tracks => "tracks",
            TopItemKind::Artists => "artists",
        }
    }
}

/// Fetches the user's single most played item of `kind` over the short term
/// (roughly the last four weeks).
///
/// Returns `Ok(None)` when Spotify has no listening history to rank.
pub async fn get_top_item(
    client: &Client,
    config: &Config,
    token: &str,
    kind: TopItemKind,
) -> Result<Option<Value>, SpotifyError> {
    let api_url = format!(
        "{uri}/me/top/{kind}?limit=1&time_range=short_term",
        uri = config.api_url,
        kind = kind.as_str()
    );

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    let res = check_status(response)
        .await?
        .json::<TopItemsResponse>()
        .await?;

    Ok(res.items.into_iter().next())
}

/// Fetches what the user is listening to right now.
///
/// Spotify answers `204 No Content` when nothing is playing, which maps to
/// `Ok(None)`.
pub async fn get_currently_playing(
    client: &Client,
    config: &Config,
    token: &str,
) -> Result<Option<Value>, SpotifyError> {
    let api_url = format!("{uri}/me/player/currently-playing", uri = config.api_url);

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    let response = check_status(response).await?;

    if response.status() == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let body = response.bytes().await?;
    if body.is_empty() {
        return Ok(None);
    }

    match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Null) => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warning!("Unreadable currently playing response: {}", e);
            Ok(None)
        }
    }
}

/// Collects top track, top artist and now playing for one user.
///
/// The three requests run concurrently. A failure of either top item request
/// fails the whole collection; a failure of the now playing request is logged
/// and reported as nothing playing.
///
/// # Example
///
/// ```
/// let stats = get_stats(&client, &config, &token.access_token).await?;
/// println!("{:?}", stats.top_track);
/// ```
pub async fn get_stats(
    client: &Client,
    config: &Config,
    token: &str,
) -> Result<FullStats, SpotifyError> {
    let (top_track, top_artist, now_playing) = tokio::join!(
        get_top_item(client, config, token, TopItemKind::Tracks),
        get_top_item(client, config, token, TopItemKind::Artists),
        get_currently_playing(client, config, token),
    );

    let now_playing = now_playing.unwrap_or_else(|e| {
        warning!("Ignoring currently playing failure: {}", e);
        None
    });

    Ok(FullStats {
        top_track: top_track?,
        top_artist: top_artist?,
        now_playing,
    })
}
