//! Browser image picker: hidden file input plus `FileReader` data-URL conversion.

#[cfg(any(test, target_arch = "wasm32"))]
use std::{cell::RefCell, rc::Rc};

#[cfg(any(test, target_arch = "wasm32"))]
use futures::channel::oneshot;
use platform_host::{HostError, ImagePickerFuture, ImagePickerService, PickedImage};

#[cfg(target_arch = "wasm32")]
use platform_host::DelayService;
#[cfg(target_arch = "wasm32")]
use std::time::Duration;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(target_arch = "wasm32")]
use crate::WebDelayService;

#[cfg(target_arch = "wasm32")]
const IMAGE_ACCEPT: &str = "image/*";

/// How long to wait after the page regains focus before treating the picker as dismissed.
#[cfg(target_arch = "wasm32")]
const FOCUS_DISMISS_GRACE: Duration = Duration::from_millis(500);

/// One-shot result shared by several DOM listeners. The first outcome wins.
#[cfg(any(test, target_arch = "wasm32"))]
struct OutcomeSlot<T> {
    sender: Rc<RefCell<Option<oneshot::Sender<T>>>>,
}

#[cfg(any(test, target_arch = "wasm32"))]
impl<T> Clone for OutcomeSlot<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

#[cfg(any(test, target_arch = "wasm32"))]
impl<T> OutcomeSlot<T> {
    fn channel() -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                sender: Rc::new(RefCell::new(Some(tx))),
            },
            rx,
        )
    }

    /// Delivers `value` unless an earlier listener already did. Returns whether it was delivered.
    fn resolve(&self, value: T) -> bool {
        match self.sender.borrow_mut().take() {
            Some(tx) => tx.send(value).is_ok(),
            None => false,
        }
    }

    fn is_resolved(&self) -> bool {
        self.sender.borrow().is_none()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser image picker backed by a transient `<input type="file">`.
pub struct WebImagePickerService;

impl ImagePickerService for WebImagePickerService {
    fn pick_image<'a>(&'a self) -> ImagePickerFuture<'a, Result<PickedImage, HostError>> {
        Box::pin(pick_image())
    }
}

async fn pick_image() -> Result<PickedImage, HostError> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(HostError::unavailable("image-picker"))
    }

    #[cfg(target_arch = "wasm32")]
    {
        let file = pick_file().await?;
        let data_url = read_file_as_data_url(&file).await?;
        Ok(PickedImage {
            name: file.name(),
            mime_type: file.type_(),
            byte_len: file.size() as u64,
            data_url,
        })
    }
}

/// Opens the file dialog and resolves with the chosen file.
///
/// Dismissal is detected through the input `cancel` event where supported, and otherwise by the
/// window regaining focus with no file selected.
#[cfg(target_arch = "wasm32")]
async fn pick_file() -> Result<web_sys::File, HostError> {
    let window = web_sys::window().ok_or(HostError::unavailable("window"))?;
    let document = window.document().ok_or(HostError::unavailable("document"))?;
    let input = document
        .create_element("input")
        .map_err(|err| HostError::Request(format!("failed to create file input: {err:?}")))?
        .dyn_into::<web_sys::HtmlInputElement>()
        .map_err(|_| HostError::Request("failed to cast file input".to_string()))?;
    input.set_type("file");
    input.set_accept(IMAGE_ACCEPT);
    input.set_hidden(true);

    if let Some(body) = document.body() {
        let _ = body.append_child(&input);
    }

    let (slot, rx) = OutcomeSlot::<Result<web_sys::File, HostError>>::channel();

    let on_change = {
        let input = input.clone();
        let slot = slot.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let result = input
                .files()
                .and_then(|files| files.get(0))
                .ok_or_else(|| HostError::Cancelled("no image selected".to_string()));
            slot.resolve(result);
        })
    };
    input.set_onchange(Some(on_change.as_ref().unchecked_ref()));

    let on_cancel = {
        let slot = slot.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            slot.resolve(Err(HostError::Cancelled("picker dismissed".to_string())));
        })
    };
    let _ = input.add_event_listener_with_callback("cancel", on_cancel.as_ref().unchecked_ref());

    let on_focus = {
        let input = input.clone();
        let slot = slot.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let input = input.clone();
            let slot = slot.clone();
            wasm_bindgen_futures::spawn_local(async move {
                WebDelayService.sleep(FOCUS_DISMISS_GRACE).await;
                let has_file = input.files().is_some_and(|files| files.length() > 0);
                if !has_file && !slot.is_resolved() {
                    slot.resolve(Err(HostError::Cancelled(
                        "picker closed without a selection".to_string(),
                    )));
                }
            });
        })
    };
    let _ = window.add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref());

    input.click();

    let outcome = rx
        .await
        .map_err(|_| HostError::Cancelled("image picker was dropped".to_string()));

    input.set_onchange(None);
    let _ =
        input.remove_event_listener_with_callback("cancel", on_cancel.as_ref().unchecked_ref());
    let _ =
        window.remove_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref());
    input.remove();
    drop((on_change, on_cancel, on_focus));
    outcome?
}

#[cfg(target_arch = "wasm32")]
async fn read_file_as_data_url(file: &web_sys::File) -> Result<String, HostError> {
    let reader = web_sys::FileReader::new().map_err(|err| HostError::Request(format!("{err:?}")))?;
    let (slot, rx) = OutcomeSlot::<Result<String, HostError>>::channel();

    let on_load = {
        let reader = reader.clone();
        let slot = slot.clone();
        Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_: web_sys::ProgressEvent| {
            let result = reader
                .result()
                .map_err(|err| HostError::Decode(format!("failed to read image file: {err:?}")))
                .and_then(|value| {
                    value.as_string().filter(|url| !url.is_empty()).ok_or_else(|| {
                        HostError::Decode("file reader returned no data URL".to_string())
                    })
                });
            slot.resolve(result);
        })
    };
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));

    let on_error = {
        let slot = slot.clone();
        Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_: web_sys::ProgressEvent| {
            slot.resolve(Err(HostError::Decode("failed to load image file".to_string())));
        })
    };
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let started = reader
        .read_as_data_url(file)
        .map_err(|err| HostError::Request(format!("failed to start file read: {err:?}")));
    let result = match started {
        Ok(()) => rx
            .await
            .map_err(|_| HostError::Cancelled("image file read was interrupted".to_string()))
            .and_then(|result| result),
        Err(err) => Err(err),
    };

    reader.set_onload(None);
    reader.set_onerror(None);
    drop((on_load, on_error));
    result
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn first_listener_outcome_wins() {
        let (slot, rx) = OutcomeSlot::<Result<u8, HostError>>::channel();
        let focus_fallback = slot.clone();
        assert!(!slot.is_resolved());

        assert!(slot.resolve(Ok(7)));
        assert!(focus_fallback.is_resolved());
        assert!(!focus_fallback.resolve(Err(HostError::Cancelled("late".to_string()))));
        assert_eq!(block_on(rx), Ok(Ok(7)));
    }

    #[test]
    fn dismissal_reaches_the_awaiting_pick() {
        let (slot, rx) = OutcomeSlot::<Result<u8, HostError>>::channel();
        assert!(slot.resolve(Err(HostError::Cancelled("picker dismissed".to_string()))));
        assert_eq!(
            block_on(rx),
            Ok(Err(HostError::Cancelled("picker dismissed".to_string())))
        );
    }

    #[test]
    fn native_builds_report_unavailable() {
        assert_eq!(
            block_on(WebImagePickerService.pick_image()),
            Err(HostError::unavailable("image-picker"))
        );
    }
}
