use std::rc::Rc;

use platform_host::{
    ChatCompletionService, ChatEndpointConfig, ChatFuture, DelayFuture, DelayService,
    GenerateContentResponse, HostCapabilities, HostError, HostServices, HostStrategy,
    ImagePickerFuture, ImagePickerService, NoopChatCompletionService, NoopDelayService,
    NoopImagePickerService, PickedImage,
};

use crate::{WebChatCompletionService, WebDelayService, WebImagePickerService};

const CHAT_API_KEY: Option<&str> = option_env!("POCKET_SHELL_CHAT_API_KEY");

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "phone-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "phone-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the capability snapshot for the compile-time selected host strategy.
pub const fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities::browser(),
        HostStrategy::Stub => HostCapabilities::stub(),
    }
}

/// Chat endpoint settings for browser builds.
///
/// Uses the endpoint defaults with the API key injected at build time through
/// `POCKET_SHELL_CHAT_API_KEY` (empty when unset).
pub fn chat_endpoint_config() -> ChatEndpointConfig {
    ChatEndpointConfig {
        api_key: CHAT_API_KEY.unwrap_or_default().to_string(),
        ..ChatEndpointConfig::default()
    }
}

/// Adapter enum that erases the concrete image-picker backend behind [`ImagePickerService`].
#[derive(Debug, Clone, Copy)]
pub enum ImagePickerServiceAdapter {
    /// Hidden file input plus `FileReader`.
    Browser(WebImagePickerService),
    /// No-op fallback.
    Stub(NoopImagePickerService),
}

impl ImagePickerService for ImagePickerServiceAdapter {
    fn pick_image<'a>(&'a self) -> ImagePickerFuture<'a, Result<PickedImage, HostError>> {
        match self {
            Self::Browser(service) => service.pick_image(),
            Self::Stub(service) => service.pick_image(),
        }
    }
}

/// Adapter enum that erases the concrete chat backend behind [`ChatCompletionService`].
#[derive(Debug, Clone)]
pub enum ChatCompletionServiceAdapter {
    /// `fetch`-backed `generateContent` client.
    Browser(WebChatCompletionService),
    /// No-op fallback.
    Stub(NoopChatCompletionService),
}

impl ChatCompletionService for ChatCompletionServiceAdapter {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> ChatFuture<'a, Result<GenerateContentResponse, HostError>> {
        match self {
            Self::Browser(service) => service.generate(prompt),
            Self::Stub(service) => service.generate(prompt),
        }
    }
}

/// Adapter enum that erases the concrete timer backend behind [`DelayService`].
#[derive(Debug, Clone, Copy)]
pub enum DelayServiceAdapter {
    /// `setTimeout`-backed delay.
    Browser(WebDelayService),
    /// Immediately resolving delay.
    Stub(NoopDelayService),
}

impl DelayService for DelayServiceAdapter {
    fn sleep<'a>(&'a self, duration: std::time::Duration) -> DelayFuture<'a> {
        match self {
            Self::Browser(service) => service.sleep(duration),
            Self::Stub(service) => service.sleep(duration),
        }
    }
}

fn image_picker_service() -> ImagePickerServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ImagePickerServiceAdapter::Browser(WebImagePickerService),
        HostStrategy::Stub => ImagePickerServiceAdapter::Stub(NoopImagePickerService),
    }
}

fn chat_completion_service() -> ChatCompletionServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ChatCompletionServiceAdapter::Browser(
            WebChatCompletionService::new(chat_endpoint_config()),
        ),
        HostStrategy::Stub => ChatCompletionServiceAdapter::Stub(NoopChatCompletionService),
    }
}

fn delay_service() -> DelayServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => DelayServiceAdapter::Browser(WebDelayService),
        HostStrategy::Stub => DelayServiceAdapter::Stub(NoopDelayService),
    }
}

/// Builds the host service bundle for the compile-time selected strategy.
pub fn build_host_services() -> HostServices {
    HostServices {
        image_picker: Rc::new(image_picker_service()),
        chat: Rc::new(chat_completion_service()),
        delay: Rc::new(delay_service()),
        capabilities: host_capabilities(),
        host_strategy: selected_host_strategy(),
    }
}
