//! App catalog and registry.
//!
//! The catalog is generated at build time from `app.manifest.toml` files and parsed once on first
//! use. Each entry is paired with the [`AppModule`] that mounts its panel, so the navigation core
//! only ever deals in [`ApplicationId`]s.

mod placeholders;

use std::sync::OnceLock;

use leptos::*;
use phone_app_assistant::AssistantApp;
use phone_app_browser::BrowserApp;
use phone_app_camera::CameraApp;
use phone_app_contract::{AppModule, AppMountContext, ApplicationId, InvalidApplicationId};
use phone_app_gallery::GalleryApp;
use phone_app_settings::SettingsApp;
use serde::Deserialize;
use system_ui::IconName;
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Launcher tile color.
pub enum AppAccent {
    Yellow,
    Blue,
    Green,
    Slate,
    Pink,
    Indigo,
    Emerald,
    Sky,
    Red,
    Teal,
    Orange,
    Violet,
    Amber,
}

impl AppAccent {
    const ALL: [Self; 13] = [
        Self::Yellow,
        Self::Blue,
        Self::Green,
        Self::Slate,
        Self::Pink,
        Self::Indigo,
        Self::Emerald,
        Self::Sky,
        Self::Red,
        Self::Teal,
        Self::Orange,
        Self::Violet,
        Self::Amber,
    ];

    /// Token used in manifests and as `data-ui-accent`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Slate => "slate",
            Self::Pink => "pink",
            Self::Indigo => "indigo",
            Self::Emerald => "emerald",
            Self::Sky => "sky",
            Self::Red => "red",
            Self::Teal => "teal",
            Self::Orange => "orange",
            Self::Violet => "violet",
            Self::Amber => "amber",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|accent| accent.token() == token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// One row of the generated catalog.
pub struct CatalogEntry {
    pub schema_version: u32,
    pub app_id: String,
    pub display_name: String,
    pub icon: String,
    pub accent: String,
    pub in_home: bool,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Catalog rejected while building the registry.
pub enum CatalogError {
    #[error("catalog json is malformed: {0}")]
    Parse(String),
    #[error(transparent)]
    InvalidAppId(#[from] InvalidApplicationId),
    #[error("app `{app_id}` uses unknown icon `{icon}`")]
    UnknownIcon { app_id: String, icon: String },
    #[error("app `{app_id}` uses unknown accent `{accent}`")]
    UnknownAccent { app_id: String, accent: String },
    #[error("app `{0}` is listed more than once")]
    DuplicateApp(String),
    #[error("app `{0}` has no panel module")]
    MissingModule(String),
}

#[derive(Debug, Clone)]
/// Immutable catalog record for one app.
pub struct AppDescriptor {
    pub app_id: ApplicationId,
    pub name: String,
    pub icon: IconName,
    pub accent: AppAccent,
    pub in_home: bool,
    pub module: AppModule,
}

#[derive(Debug, Clone, Default)]
/// Ordered app catalog.
pub struct AppRegistry {
    apps: Vec<AppDescriptor>,
}

impl AppRegistry {
    /// Parses generated catalog JSON and builds descriptors in `order`.
    pub fn from_catalog_json(
        json: &str,
        module_for: impl Fn(&ApplicationId) -> Option<AppModule>,
    ) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(json).map_err(|err| CatalogError::Parse(err.to_string()))?;
        Self::from_entries(entries, module_for)
    }

    /// Builds descriptors from catalog rows, sorting by `order`.
    pub fn from_entries(
        mut entries: Vec<CatalogEntry>,
        module_for: impl Fn(&ApplicationId) -> Option<AppModule>,
    ) -> Result<Self, CatalogError> {
        entries.sort_by_key(|entry| entry.order);
        let mut apps: Vec<AppDescriptor> = Vec::with_capacity(entries.len());
        for entry in entries {
            let app_id = ApplicationId::new(entry.app_id)?;
            if apps.iter().any(|existing| existing.app_id == app_id) {
                return Err(CatalogError::DuplicateApp(app_id.to_string()));
            }
            let icon = IconName::from_token(&entry.icon).ok_or_else(|| CatalogError::UnknownIcon {
                app_id: app_id.to_string(),
                icon: entry.icon.clone(),
            })?;
            let accent =
                AppAccent::from_token(&entry.accent).ok_or_else(|| CatalogError::UnknownAccent {
                    app_id: app_id.to_string(),
                    accent: entry.accent.clone(),
                })?;
            let module =
                module_for(&app_id).ok_or_else(|| CatalogError::MissingModule(app_id.to_string()))?;
            apps.push(AppDescriptor {
                app_id,
                name: entry.display_name,
                icon,
                accent,
                in_home: entry.in_home,
                module,
            });
        }
        Ok(Self { apps })
    }

    /// Home-screen apps in registry order.
    pub fn home_apps(&self) -> Vec<&AppDescriptor> {
        self.apps.iter().filter(|app| app.in_home).collect()
    }

    /// Every app in registry order.
    pub fn all_apps(&self) -> &[AppDescriptor] {
        &self.apps
    }

    /// Case-insensitive substring match on the display name, in registry order.
    ///
    /// The term is trimmed first, so surrounding whitespace never affects the match and a blank
    /// term matches everything.
    pub fn search(&self, term: &str) -> Vec<&AppDescriptor> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.apps.iter().collect();
        }
        self.apps
            .iter()
            .filter(|app| app.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn resolve(&self, app_id: &ApplicationId) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| &app.app_id == app_id)
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

/// Registry built from the generated catalog and the built-in panels.
///
/// A catalog that fails validation is logged and replaced with an empty registry.
pub fn builtin_registry() -> &'static AppRegistry {
    static REGISTRY: OnceLock<AppRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        AppRegistry::from_catalog_json(APP_MANIFEST_CATALOG_JSON, builtin_module).unwrap_or_else(
            |err| {
                logging::error!("app catalog rejected: {err}");
                AppRegistry::default()
            },
        )
    })
}

fn builtin_module(app_id: &ApplicationId) -> Option<AppModule> {
    let mount_fn: fn(AppMountContext) -> View = match app_id.as_str() {
        "camera" => mount_camera_app,
        "ai" => mount_assistant_app,
        "browser" => mount_browser_app,
        "settings" => mount_settings_app,
        "gallery" => mount_gallery_app,
        other => placeholders::mount_fn(other)?,
    };
    Some(AppModule::new(mount_fn))
}

fn mount_camera_app(context: AppMountContext) -> View {
    view! { <CameraApp context=context /> }.into_view()
}

fn mount_assistant_app(context: AppMountContext) -> View {
    view! { <AssistantApp context=context /> }.into_view()
}

fn mount_browser_app(context: AppMountContext) -> View {
    view! { <BrowserApp context=context /> }.into_view()
}

fn mount_settings_app(context: AppMountContext) -> View {
    view! { <SettingsApp context=context /> }.into_view()
}

fn mount_gallery_app(context: AppMountContext) -> View {
    view! { <GalleryApp context=context /> }.into_view()
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn noop_mount(_: AppMountContext) -> View {
        ().into_view()
    }

    pub(crate) fn any_module(_: &ApplicationId) -> Option<AppModule> {
        Some(AppModule::new(noop_mount))
    }

    fn entry(app_id: &str, name: &str, in_home: bool, order: u32) -> CatalogEntry {
        CatalogEntry {
            schema_version: 1,
            app_id: app_id.to_string(),
            display_name: name.to_string(),
            icon: "camera".to_string(),
            accent: "blue".to_string(),
            in_home,
            order,
        }
    }

    pub(crate) fn sample_registry() -> AppRegistry {
        AppRegistry::from_entries(
            vec![
                entry("gallery", "ギャラリー", true, 50),
                entry("camera", "カメラ", true, 10),
                entry("ai", "AIアシスタント", true, 20),
                entry("mail", "メール", false, 80),
                entry("map", "Maps", false, 100),
            ],
            any_module,
        )
        .expect("sample registry")
    }

    fn ids(apps: &[&AppDescriptor]) -> Vec<String> {
        apps.iter().map(|app| app.app_id.to_string()).collect()
    }

    #[test]
    fn registry_orders_by_catalog_order_and_filters_home() {
        let registry = sample_registry();
        let all: Vec<&AppDescriptor> = registry.all_apps().iter().collect();
        assert_eq!(ids(&all), vec!["camera", "ai", "gallery", "mail", "map"]);
        assert_eq!(ids(&registry.home_apps()), vec!["camera", "ai", "gallery"]);
    }

    #[test]
    fn search_is_case_insensitive_and_blank_returns_all() {
        let registry = sample_registry();
        assert_eq!(registry.search("").len(), registry.len());
        assert_eq!(registry.search("   ").len(), registry.len());
        assert!(registry.search("xyz-no-match").is_empty());
        assert_eq!(ids(&registry.search("AI")), vec!["ai"]);
        assert_eq!(ids(&registry.search("ai")), vec!["ai"]);
        assert_eq!(ids(&registry.search("MAPS")), vec!["map"]);
        assert_eq!(ids(&registry.search("メ")), vec!["camera", "mail"]);
        assert_eq!(ids(&registry.search("メール")), vec!["mail"]);
        assert_eq!(ids(&registry.search(" カメラ ")), vec!["camera"]);
    }

    #[test]
    fn resolve_never_panics_on_unknown_ids() {
        let registry = sample_registry();
        assert_eq!(
            registry
                .resolve(&ApplicationId::trusted("camera"))
                .map(|app| app.name.as_str()),
            Some("カメラ")
        );
        assert!(registry.resolve(&ApplicationId::trusted("nope")).is_none());
    }

    #[test]
    fn invalid_catalog_rows_are_rejected() {
        let mut bad_icon = entry("camera", "カメラ", true, 10);
        bad_icon.icon = "rocket".to_string();
        assert_eq!(
            AppRegistry::from_entries(vec![bad_icon], any_module).unwrap_err(),
            CatalogError::UnknownIcon {
                app_id: "camera".to_string(),
                icon: "rocket".to_string(),
            }
        );

        let mut bad_accent = entry("camera", "カメラ", true, 10);
        bad_accent.accent = "plaid".to_string();
        assert!(matches!(
            AppRegistry::from_entries(vec![bad_accent], any_module),
            Err(CatalogError::UnknownAccent { .. })
        ));

        assert_eq!(
            AppRegistry::from_entries(
                vec![entry("camera", "A", true, 1), entry("camera", "B", true, 2)],
                any_module,
            )
            .unwrap_err(),
            CatalogError::DuplicateApp("camera".to_string())
        );

        assert!(matches!(
            AppRegistry::from_entries(vec![entry("Camera", "A", true, 1)], any_module),
            Err(CatalogError::InvalidAppId(_))
        ));

        assert_eq!(
            AppRegistry::from_entries(vec![entry("camera", "A", true, 1)], |_| None).unwrap_err(),
            CatalogError::MissingModule("camera".to_string())
        );

        assert!(matches!(
            AppRegistry::from_catalog_json("{", any_module),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn generated_catalog_builds_with_builtin_panels() {
        let registry = builtin_registry();
        let all: Vec<&AppDescriptor> = registry.all_apps().iter().collect();
        assert_eq!(
            ids(&all),
            vec![
                "camera",
                "ai",
                "browser",
                "settings",
                "gallery",
                "clock",
                "phone",
                "mail",
                "calendar",
                "map",
                "calculator",
                "contacts",
                "notes",
            ]
        );
        assert_eq!(
            ids(&registry.home_apps()),
            vec!["camera", "ai", "browser", "settings", "gallery", "clock"]
        );
        assert_eq!(ids(&registry.search("AI")), vec!["ai"]);
        let ai = registry
            .resolve(&ApplicationId::trusted("ai"))
            .expect("assistant registered");
        assert_eq!(ai.name, "AIアシスタント");
        assert_eq!(ai.icon, IconName::Chat);
        assert_eq!(ai.accent, AppAccent::Blue);
    }
}
