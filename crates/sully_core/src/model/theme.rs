//! Chat bubble styling and named theme bundles.
//!
//! # Responsibility
//! - Describe per-side bubble appearance including optional sticker and
//!   avatar decorations.
//! - Bundle a user-side and AI-side style into one named theme.
//!
//! # Invariants
//! - `opacity` and `background_image_opacity` lie in `[0, 1]`.
//! - Decoration scales lie in `[0.5, 2.0]` when present.
//! - Preset themes are read-only reference data by application policy; the
//!   schema does not distinguish them structurally beyond `kind`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Visual styling for one side (user or AI) of the chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleStyle {
    pub text_color: String,
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    /// In `[0, 1]`, independent of the container `opacity`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image_opacity: Option<f64>,
    /// Corner radius in pixels.
    pub border_radius: f64,
    /// Container opacity in `[0, 1]`.
    pub opacity: f64,
    /// Decorative sticker pinned to the bubble.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration: Option<String>,
    /// Sticker offset in percent of bubble size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration_y: Option<f64>,
    /// In `[0.5, 2.0]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration_scale: Option<f64>,
    /// Sticker rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration_rotate: Option<f64>,
    /// Frame or sticker drawn over the avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_decoration: Option<String>,
    /// Offset in percent relative to the avatar center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_decoration_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_decoration_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_decoration_scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_decoration_rotate: Option<f64>,
}

impl BubbleStyle {
    /// Creates an opaque style with no image, sticker or avatar decoration.
    pub fn solid(text_color: impl Into<String>, background_color: impl Into<String>) -> Self {
        Self {
            text_color: text_color.into(),
            background_color: background_color.into(),
            background_image: None,
            background_image_opacity: None,
            border_radius: 16.0,
            opacity: 1.0,
            decoration: None,
            decoration_x: None,
            decoration_y: None,
            decoration_scale: None,
            decoration_rotate: None,
            avatar_decoration: None,
            avatar_decoration_x: None,
            avatar_decoration_y: None,
            avatar_decoration_scale: None,
            avatar_decoration_rotate: None,
        }
    }

    /// Checks the opacity and decoration-scale range invariants.
    pub fn validate(&self) -> Result<(), ThemeValidationError> {
        if !(0.0..=1.0).contains(&self.opacity) || !self.opacity.is_finite() {
            return Err(ThemeValidationError::OpacityOutOfRange {
                field: "opacity",
                value: self.opacity,
            });
        }
        if let Some(value) = self.background_image_opacity {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(ThemeValidationError::OpacityOutOfRange {
                    field: "backgroundImageOpacity",
                    value,
                });
            }
        }
        for (field, scale) in [
            ("decorationScale", self.decoration_scale),
            ("avatarDecorationScale", self.avatar_decoration_scale),
        ] {
            if let Some(value) = scale {
                if !(0.5..=2.0).contains(&value) || !value.is_finite() {
                    return Err(ThemeValidationError::DecorationScaleOutOfRange {
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Origin of a chat theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Shipped with the application, read-only.
    Preset,
    /// Authored by the user in the theme maker.
    Custom,
}

/// Named theme bundling a bubble style per chat side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTheme {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ThemeKind,
    pub user: BubbleStyle,
    pub ai: BubbleStyle,
    /// Raw CSS override for advanced customization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}

impl ChatTheme {
    /// Checks range invariants on both bubble styles.
    pub fn validate(&self) -> Result<(), ThemeValidationError> {
        self.user.validate()?;
        self.ai.validate()
    }
}

/// Range violation inside a bubble style.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeValidationError {
    OpacityOutOfRange { field: &'static str, value: f64 },
    DecorationScaleOutOfRange { field: &'static str, value: f64 },
}

impl Display for ThemeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpacityOutOfRange { field, value } => {
                write!(f, "bubble style {field} {value} is outside [0, 1]")
            }
            Self::DecorationScaleOutOfRange { field, value } => {
                write!(f, "bubble style {field} {value} is outside [0.5, 2.0]")
            }
        }
    }
}

impl Error for ThemeValidationError {}
