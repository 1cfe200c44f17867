//! Host-side runtime helpers for executing reducer effects.

use leptos::logging;
use platform_host::HostServices;

use crate::{reducer::RuntimeEffect, runtime_context::PhoneRuntimeContext};

const DOCUMENT_TITLE: &str = "WebOS";

#[derive(Clone)]
/// Host service bundle held by the runtime for effect execution and panel injection.
pub struct PhoneHostContext {
    services: HostServices,
}

impl PhoneHostContext {
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Services handed to every mounted panel.
    pub fn services(&self) -> HostServices {
        self.services.clone()
    }

    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: PhoneRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::AppOpened(app_id) => {
                let title = runtime
                    .registry
                    .resolve(&app_id)
                    .map(|app| format!("{} - {DOCUMENT_TITLE}", app.name))
                    .unwrap_or_else(|| DOCUMENT_TITLE.to_string());
                logging::log!("app opened: {app_id}");
                set_document_title(&title);
            }
            RuntimeEffect::AppClosed(app_id) => {
                logging::log!("app closed: {app_id}");
                set_document_title(DOCUMENT_TITLE);
            }
            RuntimeEffect::UnknownAppIgnored(app_id) => {
                logging::warn!("ignoring open request for unknown app `{app_id}`");
            }
        }
    }
}

fn set_document_title(title: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            document.set_title(title);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = title;
    }
}
