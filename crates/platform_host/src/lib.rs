//! Typed host-domain contracts shared by the phone runtime, app panels, and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the object-safe service
//! traits (image picking, chat completion, delays), the host service bundle injected at the entry
//! layer, the chat retry policy, and the chat prompt/payload model. Concrete browser adapters live
//! in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod chat;
pub mod error;
pub mod host;
pub mod image_picker;
pub mod retry;

pub use chat::{
    build_prompt, generate_reply, ChatCompletionService, ChatEndpointConfig, ChatFuture,
    ChatMessage, ChatRole, GenerateContentRequest, GenerateContentResponse,
    NoopChatCompletionService, CHAT_EMPTY_REPLY_FALLBACK, CHAT_NETWORK_FAILURE_FALLBACK,
    DEFAULT_SYSTEM_INSTRUCTION,
};
pub use error::HostError;
pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
pub use image_picker::{
    ImagePickerFuture, ImagePickerService, NoopImagePickerService, PickedImage,
};
pub use retry::{retry_with_backoff, DelayFuture, DelayService, NoopDelayService, RetryPolicy};
