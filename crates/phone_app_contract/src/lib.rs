//! Shared contract types between the phone shell runtime and mounted app panels.
//!
//! Panels never touch runtime state directly. Each mount receives an [`AppMountContext`] whose
//! [`AppServices`] expose navigation requests, the shared device state (photos, wallpaper,
//! assistant icon) as read signals plus setters, and the host service bundle. Every mutation a
//! panel requests travels back to the runtime as an [`AppCommand`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::{Callable, Callback, ReadSignal, View};
use platform_host::{HostError, HostServices, ImagePickerService};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APPLICATION_ID_MAX_LEN: usize = 32;

/// Rejected application id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid application id `{0}`; expected a lowercase ascii slug")]
pub struct InvalidApplicationId(pub String);

/// Stable identifier for an app panel (`camera`, `ai`, `settings`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` is a lowercase ascii slug.
    ///
    /// Slugs start with a letter, contain only `a-z`, `0-9` and `-`, do not end with `-`, and
    /// are at most 32 bytes long.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidApplicationId> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(InvalidApplicationId(raw))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for build-time trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let Some(first) = bytes.first() else {
        return false;
    };
    bytes.len() <= APPLICATION_ID_MAX_LEN
        && first.is_ascii_lowercase()
        && !raw.ends_with('-')
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

/// Non-empty image reference (a `data:` or object URL).
///
/// The URL is shared, so clones of a captured frame never copy its payload.
#[derive(Debug, Clone, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageRef(Rc<str>);

impl ImageRef {
    /// Wraps `raw`, rejecting blank strings.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(Rc::from(raw)))
        }
    }

    /// Whether both references share one allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// URL form usable as an `<img src>` or CSS `url(...)`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImageRef {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("image reference must not be empty")
    }
}

impl PartialEq for ImageRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        value.0.to_string()
    }
}

/// Built-in gradient wallpapers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallpaperPreset {
    /// Indigo to purple with blue/pink glows.
    #[default]
    Aurora,
    /// Teal to deep blue.
    Ocean,
    /// Orange to rose.
    Sunset,
    /// Green to slate.
    Forest,
    /// Near-black.
    Midnight,
}

impl WallpaperPreset {
    /// Every preset in picker order.
    pub const ALL: [Self; 5] = [
        Self::Aurora,
        Self::Ocean,
        Self::Sunset,
        Self::Forest,
        Self::Midnight,
    ];

    /// Stable token, used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Aurora => "aurora",
            Self::Ocean => "ocean",
            Self::Sunset => "sunset",
            Self::Forest => "forest",
            Self::Midnight => "midnight",
        }
    }

    /// Label shown in settings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aurora => "オーロラ",
            Self::Ocean => "オーシャン",
            Self::Sunset => "サンセット",
            Self::Forest => "フォレスト",
            Self::Midnight => "ミッドナイト",
        }
    }
}

/// Home-screen background: a preset gradient or a user image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Wallpaper {
    /// Built-in gradient.
    Preset(WallpaperPreset),
    /// User-supplied image.
    Image(ImageRef),
}

impl Default for Wallpaper {
    fn default() -> Self {
        Self::Preset(WallpaperPreset::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Transport commands emitted by app services to the phone runtime.
pub enum AppCommand {
    /// Close the panel identified by `app_id` and return home.
    CloseApp {
        /// Panel requesting the close.
        app_id: ApplicationId,
    },
    /// Switch to another panel.
    OpenApp {
        /// Target panel.
        app_id: ApplicationId,
    },
    /// Prepend a photo to the shared gallery.
    AppendPhoto {
        /// Captured or imported image.
        image: ImageRef,
    },
    /// Replace the wallpaper.
    SetWallpaper {
        /// New background.
        wallpaper: Wallpaper,
    },
    /// Replace or clear the assistant avatar.
    SetAssistantIcon {
        /// New avatar; `None` restores the default glyph.
        icon: Option<ImageRef>,
    },
}

#[derive(Clone)]
/// Panel-scoped navigation requests.
pub struct NavigationService {
    sender: Callback<AppCommand>,
    app_id: ApplicationId,
}

impl NavigationService {
    /// Closes this panel.
    pub fn close(&self) {
        self.sender.call(AppCommand::CloseApp {
            app_id: self.app_id.clone(),
        });
    }

    /// Opens another panel by id.
    pub fn open_app(&self, app_id: ApplicationId) {
        self.sender.call(AppCommand::OpenApp { app_id });
    }
}

#[derive(Clone, Copy)]
/// Shared device state readable by every panel.
pub struct DeviceStateService {
    sender: Callback<AppCommand>,
    /// Photos, most recent first.
    pub photos: ReadSignal<Vec<ImageRef>>,
    /// Current wallpaper.
    pub wallpaper: ReadSignal<Wallpaper>,
    /// Custom assistant avatar.
    pub assistant_icon: ReadSignal<Option<ImageRef>>,
}

impl DeviceStateService {
    /// Prepends `image` to the photo list.
    pub fn append_photo(&self, image: ImageRef) {
        self.sender.call(AppCommand::AppendPhoto { image });
    }

    /// Replaces the wallpaper.
    pub fn set_wallpaper(&self, wallpaper: Wallpaper) {
        self.sender.call(AppCommand::SetWallpaper { wallpaper });
    }

    /// Replaces or clears the assistant avatar.
    pub fn set_assistant_icon(&self, icon: Option<ImageRef>) {
        self.sender.call(AppCommand::SetAssistantIcon { icon });
    }
}

#[derive(Clone)]
/// Injected app services bundle.
pub struct AppServices {
    /// Navigation requests scoped to the mounted panel.
    pub navigation: NavigationService,
    /// Shared device state.
    pub device: DeviceStateService,
    /// Host capabilities (image picker, chat completion, timers).
    pub host: HostServices,
    sender: Callback<AppCommand>,
}

impl AppServices {
    /// Creates service handles from the runtime command callback.
    pub fn new(
        app_id: ApplicationId,
        sender: Callback<AppCommand>,
        photos: ReadSignal<Vec<ImageRef>>,
        wallpaper: ReadSignal<Wallpaper>,
        assistant_icon: ReadSignal<Option<ImageRef>>,
        host: HostServices,
    ) -> Self {
        Self {
            navigation: NavigationService { sender, app_id },
            device: DeviceStateService {
                sender,
                photos,
                wallpaper,
                assistant_icon,
            },
            host,
            sender,
        }
    }

    /// Low-level transport send.
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }
}

#[derive(Clone)]
/// Mount context injected by the runtime each time a panel opens.
pub struct AppMountContext {
    /// Stable app id from the catalog.
    pub app_id: ApplicationId,
    /// Display name from the catalog.
    pub display_name: String,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable panel capability stored in each catalog descriptor.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the panel view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

/// Runs the host image picker and wraps the result as an [`ImageRef`].
///
/// A dismissed picker resolves to `Ok(None)`; an empty payload is reported as
/// [`HostError::Decode`].
pub async fn import_image(picker: &dyn ImagePickerService) -> Result<Option<ImageRef>, HostError> {
    match picker.pick_image().await {
        Ok(picked) => ImageRef::new(picked.data_url)
            .map(Some)
            .ok_or_else(|| HostError::Decode(format!("`{}` produced no image data", picked.name))),
        Err(HostError::Cancelled(_)) => Ok(None),
        Err(err) => Err(err),
    }
}
