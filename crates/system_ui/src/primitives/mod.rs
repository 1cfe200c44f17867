//! Shared shell, control, and data-display primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod shell;

pub use controls::{Button, IconButton, Switch, TextArea, TextField};
pub use data_display::{Avatar, EmptyState, ListRow, ListSurface, PanelHeader, Text};
pub use shell::{
    AppIconButton, AppIconGrid, AppWindowLayer, DeviceFrame, DeviceScreen, DrawerSheet,
    HomeIndicator, Notch, StatusBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/transparent button.
    Quiet,
    /// Translucent button drawn over media (camera shutter, overlays).
    Glass,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Glass => "glass",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared control sizes.
pub enum ButtonSize {
    /// Compact.
    Sm,
    /// Default.
    #[default]
    Md,
    /// Large touch target.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Text input appearance.
pub enum FieldVariant {
    /// Rectangular field.
    #[default]
    Standard,
    /// Fully rounded pill (search, address bar, chat input).
    Pill,
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Pill => "pill",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Text emphasis.
pub enum TextTone {
    /// Body text.
    #[default]
    Primary,
    /// De-emphasized text.
    Secondary,
    /// Error text.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
