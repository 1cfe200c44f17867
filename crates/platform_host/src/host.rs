//! Shared host-bundle and capability models for browser and native runtime composition.

use std::rc::Rc;

use crate::{
    ChatCompletionService, DelayService, ImagePickerService, NoopChatCompletionService,
    NoopDelayService, NoopImagePickerService,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Native composition with no-op adapters (unit tests, non-wasm builds).
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not implemented or not supported on the active host.
    Unavailable,
    /// Capability exists but needs a permission prompt before first use.
    RequiresUserActivation,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Returns whether the capability can be used at all, possibly after a prompt.
    pub const fn is_reachable(self) -> bool {
        !matches!(self, Self::Unavailable)
    }
}

/// Host capability snapshot exposed to runtime wiring and mounted panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Camera stream acquisition.
    pub camera: CapabilityStatus,
    /// File picker with data-URL conversion.
    pub image_picker: CapabilityStatus,
    /// Remote chat-completion endpoint.
    pub chat_completion: CapabilityStatus,
}

impl HostCapabilities {
    /// Browser-default capability posture.
    pub const fn browser() -> Self {
        Self {
            camera: CapabilityStatus::RequiresUserActivation,
            image_picker: CapabilityStatus::Available,
            chat_completion: CapabilityStatus::Available,
        }
    }

    /// Stub capability posture.
    pub const fn stub() -> Self {
        Self {
            camera: CapabilityStatus::Unavailable,
            image_picker: CapabilityStatus::Unavailable,
            chat_completion: CapabilityStatus::Unavailable,
        }
    }
}

/// Runtime-selected host service bundle injected into the phone runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `phone_runtime`, which keeps the runtime and app crates decoupled from adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// File picker producing image data URLs.
    pub image_picker: Rc<dyn ImagePickerService>,
    /// Chat completion endpoint used by the assistant panel.
    pub chat: Rc<dyn ChatCompletionService>,
    /// Timer used by retry backoff.
    pub delay: Rc<dyn DelayService>,
    /// Host availability snapshot for optional capability domains.
    pub capabilities: HostCapabilities,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle of no-op services.
    pub fn stub() -> Self {
        Self {
            image_picker: Rc::new(NoopImagePickerService),
            chat: Rc::new(NoopChatCompletionService),
            delay: Rc::new(NoopDelayService),
            capabilities: HostCapabilities::stub(),
            host_strategy: HostStrategy::Stub,
        }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::stub()
    }
}
