//! Canonical data schema for the Sully companion application.
//!
//! # Responsibility
//! - Define every persisted shape: characters, messages, themes, diaries,
//!   schedule items and the full-backup envelope.
//! - Keep wire names stable so exported JSON stays readable by older builds.
//!
//! # Invariants
//! - `CharacterProfile.id` is the stable foreign key for all `charId`-bearing
//!   records. References are weak: no cascade lives at this layer.
//! - Timestamps are epoch milliseconds; calendar dates are `YYYY-MM-DD`.
//! - This layer validates shapes and ranges only, never referential integrity.

pub mod app;
pub mod backup;
pub mod card;
pub mod character;
pub mod diary;
pub mod gallery;
pub mod message;
pub mod schedule;
pub mod settings;
pub mod theme;
pub mod timefmt;

use uuid::Uuid;

/// Mints a fresh string identifier for a newly created record.
///
/// Entity ids are strings on the wire; UUIDv4 keeps them collision-free
/// across devices without coordination.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
