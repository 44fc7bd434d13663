//! Chat message record and display ordering.
//!
//! # Responsibility
//! - Define one chat turn as stored per character.
//! - Keep the metadata escape hatch open without losing type information on
//!   the fixed fields.
//!
//! # Invariants
//! - `id` is unique within one character's message stream (not enforced here;
//!   the storage layer owns uniqueness).
//! - Display order is timestamp ascending, message id as tiebreak.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::character::CharacterId;

/// Author of one chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// Rendering category of one chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Plain text bubble.
    Text,
    /// In-chat money transfer card. Metadata: `amount`, `note`.
    Transfer,
    /// Scripted interaction event. Metadata: `action`, `target`.
    Interaction,
    /// Voice clip. Metadata: `duration` (seconds), `url`.
    Voice,
    /// Sticker/emoji bubble. Metadata: `url`.
    Emoji,
    /// Image bubble. Metadata: `url`.
    Image,
}

/// Open key-value payload carried by non-text message types.
///
/// Keys are documented per [`MessageType`] variant but intentionally not
/// closed: the application round-trips metadata it does not interpret.
pub type MessageMetadata = BTreeMap<String, serde_json::Value>;

/// One chat turn owned by a character's message stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique within the owning character's stream.
    pub id: i64,
    /// Weak reference to `CharacterProfile.id`.
    pub char_id: CharacterId,
    pub role: MessageRole,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

impl Message {
    /// Creates a plain text turn with no metadata.
    pub fn text(
        id: i64,
        char_id: impl Into<CharacterId>,
        role: MessageRole,
        content: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            id,
            char_id: char_id.into(),
            role,
            kind: MessageType::Text,
            content: content.into(),
            metadata: None,
            timestamp,
        }
    }
}

/// Sorts a message slice into display order.
///
/// # Contract
/// - Primary key: `timestamp` ascending.
/// - Tiebreak: `id` ascending, so ordering is total and stable across runs.
pub fn sort_for_display(messages: &mut [Message]) {
    messages.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.id.cmp(&b.id))
    });
}
