//! Image picker service contracts and no-op adapter.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

use crate::HostError;

/// Object-safe boxed future used by [`ImagePickerService`].
pub type ImagePickerFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Image chosen by the user and converted to a self-contained data URL.
pub struct PickedImage {
    /// File name reported by the host.
    pub name: String,
    /// MIME type reported by the host.
    pub mime_type: String,
    /// Source file size in bytes.
    pub byte_len: u64,
    /// `data:` URL holding the full image payload.
    pub data_url: String,
}

/// Host service that lets the user choose a local image file.
pub trait ImagePickerService {
    /// Opens the host picker and resolves with the selected image.
    ///
    /// Resolves with [`HostError::Cancelled`] when the user dismisses the picker.
    fn pick_image<'a>(&'a self) -> ImagePickerFuture<'a, Result<PickedImage, HostError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op image picker for unsupported targets.
pub struct NoopImagePickerService;

impl ImagePickerService for NoopImagePickerService {
    fn pick_image<'a>(&'a self) -> ImagePickerFuture<'a, Result<PickedImage, HostError>> {
        Box::pin(async { Err(HostError::unavailable("image-picker")) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn noop_picker_reports_unavailable() {
        let picker: &dyn ImagePickerService = &NoopImagePickerService;
        assert_eq!(
            block_on(picker.pick_image()),
            Err(HostError::Unavailable {
                capability: "image-picker"
            })
        );
    }
}
