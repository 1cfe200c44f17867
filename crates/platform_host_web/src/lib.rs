//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for image picking (file input plus
//! `FileReader` data URLs), chat completion (`fetch`), retry delays (`setTimeout`), and the camera
//! session used by the camera panel. Every adapter compiles natively as well and reports
//! [`platform_host::HostError::Unavailable`] off-wasm so the runtime stays testable on the host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod camera;
pub mod chat;
pub mod delay;
pub mod image_picker;

pub use adapters::{
    build_host_services, chat_endpoint_config, host_capabilities, selected_host_strategy,
    ChatCompletionServiceAdapter, DelayServiceAdapter, ImagePickerServiceAdapter,
};
pub use camera::{CameraFacing, CameraSession};
pub use chat::WebChatCompletionService;
pub use delay::WebDelayService;
pub use image_picker::WebImagePickerService;
