use phone_app_contract::{ApplicationId, ImageRef, Wallpaper};

use crate::gesture::GestureClassifier;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Which surface owns the screen. Exactly one case is ever active.
pub enum NavigationState {
    /// Home grid.
    #[default]
    Home,
    /// Full app list with its search field.
    Drawer {
        /// Current search input.
        search_term: String,
    },
    /// A single panel fills the window region.
    AppOpen {
        /// Mounted panel.
        app_id: ApplicationId,
    },
}

impl NavigationState {
    pub fn is_home(&self) -> bool {
        matches!(self, Self::Home)
    }

    pub fn is_drawer_open(&self) -> bool {
        matches!(self, Self::Drawer { .. })
    }

    pub fn open_app_id(&self) -> Option<&ApplicationId> {
        match self {
            Self::AppOpen { app_id } => Some(app_id),
            _ => None,
        }
    }

    /// Drawer search input; empty outside the drawer.
    pub fn search_term(&self) -> &str {
        match self {
            Self::Drawer { search_term } => search_term,
            _ => "",
        }
    }

    /// Stable token for `data-*` hooks.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Drawer { .. } => "drawer",
            Self::AppOpen { .. } => "app",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// State shared by every panel.
pub struct DeviceState {
    /// Most recent first.
    pub photos: Vec<ImageRef>,
    pub wallpaper: Wallpaper,
    pub assistant_icon: Option<ImageRef>,
}

impl DeviceState {
    /// Prepends a photo. No dedup, no cap.
    pub fn append_photo(&mut self, image: ImageRef) {
        self.photos.insert(0, image);
    }

    pub fn set_wallpaper(&mut self, wallpaper: Wallpaper) {
        self.wallpaper = wallpaper;
    }

    pub fn set_assistant_icon(&mut self, icon: Option<ImageRef>) {
        self.assistant_icon = icon;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhoneState {
    pub navigation: NavigationState,
    pub device: DeviceState,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Transient pointer state, kept apart from [`PhoneState`] so gesture tracking does not
/// re-render the shell.
pub struct InteractionState {
    pub gesture: GestureClassifier,
}

#[cfg(test)]
mod tests {
    use phone_app_contract::WallpaperPreset;
    use pretty_assertions::assert_eq;

    use super::*;

    fn image(raw: &str) -> ImageRef {
        ImageRef::new(raw).expect("image")
    }

    #[test]
    fn photos_are_most_recent_first_without_dedup() {
        let mut device = DeviceState::default();
        device.append_photo(image("data:a"));
        device.append_photo(image("data:b"));
        device.append_photo(image("data:a"));
        assert_eq!(
            device.photos,
            vec![image("data:a"), image("data:b"), image("data:a")]
        );
    }

    #[test]
    fn wallpaper_and_icon_replace_atomically() {
        let mut device = DeviceState::default();
        assert_eq!(device.wallpaper, Wallpaper::Preset(WallpaperPreset::Aurora));

        device.set_wallpaper(Wallpaper::Image(image("blob:w")));
        assert_eq!(device.wallpaper, Wallpaper::Image(image("blob:w")));
        device.set_wallpaper(Wallpaper::Preset(WallpaperPreset::Midnight));
        assert_eq!(device.wallpaper, Wallpaper::Preset(WallpaperPreset::Midnight));

        device.set_assistant_icon(Some(image("data:icon")));
        assert_eq!(device.assistant_icon, Some(image("data:icon")));
        device.set_assistant_icon(None);
        assert_eq!(device.assistant_icon, None);
    }

    #[test]
    fn navigation_accessors_follow_active_case() {
        let drawer = NavigationState::Drawer {
            search_term: "ca".to_string(),
        };
        assert!(drawer.is_drawer_open());
        assert_eq!(drawer.search_term(), "ca");
        assert_eq!(drawer.open_app_id(), None);

        let open = NavigationState::AppOpen {
            app_id: ApplicationId::trusted("camera"),
        };
        assert_eq!(open.search_term(), "");
        assert_eq!(open.open_app_id().map(ApplicationId::as_str), Some("camera"));
        assert_eq!(open.token(), "app");
        assert!(NavigationState::default().is_home());
    }
}
