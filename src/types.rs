use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    /// A token is expired once `expires_in` seconds have passed since it was
    /// obtained. Tokens are never refreshed, so expired means signed out.
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.obtained_at.saturating_add(self.expires_in)
    }
}

/// Body returned by the token endpoint. Refresh token and scope are not
/// kept since tokens are never refreshed.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Paged response of `/me/top/{type}`. Items are kept as raw JSON so they
/// can be handed back to the caller unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct TopItemsResponse {
    #[serde(default)]
    pub items: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullStats {
    pub top_track: Option<Value>,
    pub top_artist: Option<Value>,
    pub now_playing: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub top_track: Option<Value>,
    pub top_artist: Option<Value>,
    pub now_playing: Option<Value>,
    pub full_stats: FullStats,
}

impl From<FullStats> for StatsResponse {
    fn from(stats: FullStats) -> Self {
        Self {
            top_track: stats.top_track.clone(),
            top_artist: stats.top_artist.clone(),
            now_playing: stats.now_playing.clone(),
            full_stats: stats,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
