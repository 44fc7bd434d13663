//! Model-backend connection settings and the user's own identity.

use serde::{Deserialize, Serialize};

/// Connection settings for the chat model backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

/// Named saved connection preset.
///
/// Presets are keyed by `id`; `name` uniqueness is a UI convention only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPreset {
    pub id: String,
    pub name: String,
    pub config: ApiConfig,
}

/// The human user's own identity. One instance per installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    /// Avatar reference (asset id or URL).
    pub avatar: String,
    pub bio: String,
}
