//! `setTimeout`-backed delay service.

use std::time::Duration;

use platform_host::{DelayFuture, DelayService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser timer used between chat retries.
pub struct WebDelayService;

impl DelayService for WebDelayService {
    fn sleep<'a>(&'a self, duration: Duration) -> DelayFuture<'a> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
                let promise = js_sys::Promise::new(&mut |resolve, _reject| {
                    if let Some(window) = web_sys::window() {
                        let _ = window
                            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
                    } else {
                        let _ = resolve.call0(&wasm_bindgen::JsValue::UNDEFINED);
                    }
                });
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = duration;
            }
        })
    }
}
