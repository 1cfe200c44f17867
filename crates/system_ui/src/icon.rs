//! Centralized icon catalog and SVG renderer.
//!
//! Components refer to icons by semantic [`IconName`] and never embed raw SVG. All glyphs are
//! drawn on a 24px grid with `currentColor` strokes.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by the shell and panels.
pub enum IconName {
    /// Camera app.
    Camera,
    /// Assistant app.
    Chat,
    /// Browser app.
    Globe,
    /// Settings app.
    Settings,
    /// Gallery app.
    Image,
    /// Clock app.
    Clock,
    /// Phone dialer.
    Phone,
    /// Mail app.
    Mail,
    /// Calendar app.
    Calendar,
    /// Map app.
    Map,
    /// Calculator app.
    Calculator,
    /// Contacts app.
    Person,
    /// Notes app.
    Note,
    /// Search field glyph.
    Search,
    /// Drawer collapse affordance.
    ChevronDown,
    /// Back/close affordance.
    ChevronLeft,
    /// Send button.
    Send,
    /// Upload/import button.
    Upload,
    /// Cellular signal.
    Signal,
    /// Wi-Fi.
    Wifi,
    /// Battery.
    Battery,
    /// Bluetooth.
    Bluetooth,
    /// Airplane mode.
    Airplane,
    /// Info row.
    Info,
    /// Assistant avatar default glyph.
    Sparkle,
    /// Dismiss/reset.
    Dismiss,
}

impl IconName {
    /// Stable token used for manifests, CSS hooks, and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Chat => "chat",
            Self::Globe => "globe",
            Self::Settings => "settings",
            Self::Image => "image",
            Self::Clock => "clock",
            Self::Phone => "phone",
            Self::Mail => "mail",
            Self::Calendar => "calendar",
            Self::Map => "map",
            Self::Calculator => "calculator",
            Self::Person => "person",
            Self::Note => "note",
            Self::Search => "search",
            Self::ChevronDown => "chevron-down",
            Self::ChevronLeft => "chevron-left",
            Self::Send => "send",
            Self::Upload => "upload",
            Self::Signal => "signal",
            Self::Wifi => "wifi",
            Self::Battery => "battery",
            Self::Bluetooth => "bluetooth",
            Self::Airplane => "airplane",
            Self::Info => "info",
            Self::Sparkle => "sparkle",
            Self::Dismiss => "dismiss",
        }
    }

    /// Every icon, in declaration order.
    pub const ALL: [Self; 26] = [
        Self::Camera,
        Self::Chat,
        Self::Globe,
        Self::Settings,
        Self::Image,
        Self::Clock,
        Self::Phone,
        Self::Mail,
        Self::Calendar,
        Self::Map,
        Self::Calculator,
        Self::Person,
        Self::Note,
        Self::Search,
        Self::ChevronDown,
        Self::ChevronLeft,
        Self::Send,
        Self::Upload,
        Self::Signal,
        Self::Wifi,
        Self::Battery,
        Self::Bluetooth,
        Self::Airplane,
        Self::Info,
        Self::Sparkle,
        Self::Dismiss,
    ];

    /// Looks up an icon by [`IconName::token`].
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.token() == token)
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Camera => {
                r#"<path d="M8.5 5.5 9.8 3.5h4.4l1.3 2H19a2 2 0 0 1 2 2V18a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V7.5a2 2 0 0 1 2-2h3.5Z"/><circle cx="12" cy="12.75" r="3.75"/>"#
            }
            Self::Chat => {
                r#"<path d="M5 4h14a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2H9l-5 4v-4.2A2 2 0 0 1 3 15V6a2 2 0 0 1 2-2Z"/>"#
            }
            Self::Globe => {
                r#"<circle cx="12" cy="12" r="9"/><path d="M3 12h18M12 3c2.5 2.6 3.75 5.6 3.75 9S14.5 18.4 12 21c-2.5-2.6-3.75-5.6-3.75-9S9.5 5.6 12 3Z"/>"#
            }
            Self::Settings => {
                r#"<circle cx="12" cy="12" r="3"/><path d="M12 2.75v2.5M12 18.75v2.5M21.25 12h-2.5M5.25 12h-2.5M18.54 5.46l-1.77 1.77M7.23 16.77l-1.77 1.77M18.54 18.54l-1.77-1.77M7.23 7.23 5.46 5.46"/>"#
            }
            Self::Image => {
                r#"<rect x="3" y="4" width="18" height="16" rx="2"/><circle cx="8.5" cy="9.5" r="1.5"/><path d="m21 16-5-5-9 9"/>"#
            }
            Self::Clock => r#"<circle cx="12" cy="12" r="9"/><path d="M12 7v5l3 2"/>"#,
            Self::Phone => {
                r#"<path d="M6.6 3.5h2.3l1.6 4-2 1.3a11 11 0 0 0 6.7 6.7l1.3-2 4 1.6v2.3a2 2 0 0 1-2.2 2A16.5 16.5 0 0 1 4.6 5.7a2 2 0 0 1 2-2.2Z"/>"#
            }
            Self::Mail => {
                r#"<rect x="3" y="5" width="18" height="14" rx="2"/><path d="m3.5 6.5 8.5 6.5 8.5-6.5"/>"#
            }
            Self::Calendar => {
                r#"<rect x="3.5" y="5" width="17" height="15.5" rx="2"/><path d="M3.5 9.5h17M8 3v4M16 3v4"/>"#
            }
            Self::Map => {
                r#"<path d="m9 4-5.5 2v14L9 18l6 2 5.5-2V4L15 6 9 4ZM9 4v14M15 6v14"/>"#
            }
            Self::Calculator => {
                r#"<rect x="5" y="2.5" width="14" height="19" rx="2"/><path d="M8 6.5h8M8.5 11h.01M12 11h.01M15.5 11h.01M8.5 14.5h.01M12 14.5h.01M15.5 14.5h.01M8.5 18h.01M12 18h.01M15.5 18h.01"/>"#
            }
            Self::Person => {
                r#"<circle cx="12" cy="8" r="4"/><path d="M4.5 20.5a7.5 7.5 0 0 1 15 0"/>"#
            }
            Self::Note => {
                r#"<path d="M6 3h8.5L19 7.5V19a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2Z"/><path d="M14 3v5h5M8 12.5h8M8 16h6"/>"#
            }
            Self::Search => r#"<circle cx="10.5" cy="10.5" r="6.5"/><path d="m20 20-4.8-4.8"/>"#,
            Self::ChevronDown => r#"<path d="m5 9 7 7 7-7"/>"#,
            Self::ChevronLeft => r#"<path d="m15 5-7 7 7 7"/>"#,
            Self::Send => r#"<path d="M21 3 3 10.5l7.5 3L21 3Zm0 0-7.5 18-3-7.5"/>"#,
            Self::Upload => r#"<path d="M12 16V4m0 0-5 5m5-5 5 5M4 16v3a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-3"/>"#,
            Self::Signal => r#"<path d="M4 20v-3M9 20v-7M14 20V9M19 20V4"/>"#,
            Self::Wifi => {
                r#"<path d="M2.5 8.5a13.5 13.5 0 0 1 19 0M5.5 12a9 9 0 0 1 13 0M8.5 15.5a4.5 4.5 0 0 1 7 0"/><circle cx="12" cy="19" r="1"/>"#
            }
            Self::Battery => {
                r#"<rect x="2.5" y="7" width="17" height="10" rx="2"/><path d="M21.5 10.5v3M5 9.5h10v5H5z"/>"#
            }
            Self::Bluetooth => r#"<path d="m7 7 10 10-5 4V3l5 4L7 17"/>"#,
            Self::Airplane => {
                r#"<path d="M21 15.5v-2l-8-5V4a1 1 0 0 0-2 0v4.5l-8 5v2l8-2.5v4.5l-2 1.5V21l3-1 3 1v-2l-2-1.5V13l8 2.5Z"/>"#
            }
            Self::Info => r#"<circle cx="12" cy="12" r="9"/><path d="M12 11v6M12 7.5h.01"/>"#,
            Self::Sparkle => {
                r#"<path d="M12 3.5 13.9 10l6.6 2-6.6 2L12 20.5 10.1 14l-6.6-2 6.6-2L12 3.5Z"/>"#
            }
            Self::Dismiss => r#"<path d="m5 5 14 14M19 5 5 19"/>"#,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px, status bar glyphs.
    Xs,
    /// 18px, inline controls.
    #[default]
    Sm,
    /// 22px, toolbar actions.
    Md,
    /// 30px, home-screen launchers.
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 18,
            Self::Md => 22,
            Self::Lg => 30,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon from the centralized catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="none"
            stroke="currentColor"
            stroke-width="1.75"
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip_and_are_unique() {
        for icon in IconName::ALL {
            assert_eq!(IconName::from_token(icon.token()), Some(icon));
        }
        let mut tokens = IconName::ALL.map(IconName::token).to_vec();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), IconName::ALL.len());
        assert_eq!(IconName::from_token("rocket"), None);
    }
}
