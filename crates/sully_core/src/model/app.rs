//! App-surface identifiers and shell-level appearance state.
//!
//! # Responsibility
//! - Enumerate the closed set of app surfaces the launcher can route to.
//! - Describe static launcher entries and the global OS-style theme.
//!
//! # Invariants
//! - `AppId` is a closed enumeration; unknown surface ids do not deserialize.
//! - `OsTheme` is a singleton per user session; `VirtualTime` is decorative
//!   and never compared against wall-clock time.

use serde::{Deserialize, Serialize};

/// Identifier for one application surface inside the companion shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    Launcher,
    Settings,
    Character,
    Chat,
    Gallery,
    Music,
    Browser,
    ThemeMaker,
    Appearance,
    Date,
    User,
    Journal,
    Schedule,
}

/// Static launcher descriptor for one app surface. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub id: AppId,
    /// Display name shown under the launcher icon.
    pub name: String,
    /// Icon reference (asset id or URL).
    pub icon: String,
    /// Accent color for the launcher tile, CSS color string.
    pub color: String,
}

/// Global appearance state for the shell. One instance per user session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsTheme {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    /// Wallpaper reference (asset id or URL).
    pub wallpaper: String,
    pub dark_mode: bool,
    /// Custom color for status bar and widgets, CSS color string.
    pub content_color: String,
}

/// Simulated in-app clock shown by the shell. Decorative state only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualTime {
    pub hours: u8,
    pub minutes: u8,
    /// Free-form day label, e.g. a weekday name.
    pub day: String,
}

/// Severity of an ephemeral toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Ephemeral UI notification. Transient, never persisted or backed up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ToastKind,
}
