//! Camera stream session for the camera panel.
//!
//! A [`CameraSession`] owns one `getUserMedia` stream attached to a `<video>` element. Dropping
//! the session stops every track, so the device light turns off as soon as the panel unmounts.

use platform_host::HostError;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
const CAPTURE_MIME_TYPE: &str = "image/jpeg";

/// Which physical camera to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFacing {
    /// Rear camera.
    #[default]
    Environment,
    /// Front camera.
    User,
}

impl CameraFacing {
    /// `facingMode` constraint value.
    pub const fn as_constraint(self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::User => "user",
        }
    }
}

/// Live camera stream bound to a video element.
pub struct CameraSession {
    #[cfg(target_arch = "wasm32")]
    stream: web_sys::MediaStream,
    video: web_sys::HtmlVideoElement,
    stopped: bool,
}

impl CameraSession {
    /// Requests a video-only stream and plays it in `video`.
    ///
    /// Refused access maps to [`HostError::PermissionDenied`]; a missing device or API maps to
    /// [`HostError::Unavailable`].
    pub async fn start(
        video: web_sys::HtmlVideoElement,
        facing: CameraFacing,
    ) -> Result<Self, HostError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (video, facing);
            Err(HostError::unavailable("camera"))
        }

        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or(HostError::unavailable("window"))?;
            let devices = window
                .navigator()
                .media_devices()
                .map_err(|_| HostError::unavailable("camera"))?;

            let video_constraints = js_sys::Object::new();
            js_sys::Reflect::set(
                &video_constraints,
                &JsValue::from_str("facingMode"),
                &JsValue::from_str(facing.as_constraint()),
            )
            .map_err(|err| HostError::Request(format!("{err:?}")))?;
            let constraints = web_sys::MediaStreamConstraints::new();
            constraints.set_video(&video_constraints);
            constraints.set_audio(&JsValue::FALSE);

            let promise = devices
                .get_user_media_with_constraints(&constraints)
                .map_err(map_media_error)?;
            let stream = wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map_err(map_media_error)?
                .dyn_into::<web_sys::MediaStream>()
                .map_err(|_| HostError::Decode("getUserMedia returned a non-stream".to_string()))?;

            video.set_src_object(Some(&stream));
            if let Ok(play) = video.play() {
                let _ = wasm_bindgen_futures::JsFuture::from(play).await;
            }

            Ok(Self {
                stream,
                video,
                stopped: false,
            })
        }
    }

    /// Draws the current frame onto an offscreen canvas and returns it as a JPEG data URL.
    pub fn capture_frame(&self) -> Result<String, HostError> {
        if self.stopped {
            return Err(HostError::Cancelled("camera session stopped".to_string()));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = &self.video;
            Err(HostError::unavailable("camera"))
        }

        #[cfg(target_arch = "wasm32")]
        {
            let width = self.video.video_width();
            let height = self.video.video_height();
            if width == 0 || height == 0 {
                return Err(HostError::Request("camera frame not ready".to_string()));
            }

            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or(HostError::unavailable("document"))?;
            let canvas = document
                .create_element("canvas")
                .map_err(|err| HostError::Request(format!("{err:?}")))?
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .map_err(|_| HostError::Request("failed to cast canvas".to_string()))?;
            canvas.set_width(width);
            canvas.set_height(height);

            let context = canvas
                .get_context("2d")
                .map_err(|err| HostError::Request(format!("{err:?}")))?
                .ok_or(HostError::unavailable("canvas-2d"))?
                .dyn_into::<web_sys::CanvasRenderingContext2d>()
                .map_err(|_| HostError::Request("failed to cast 2d context".to_string()))?;
            context
                .draw_image_with_html_video_element(&self.video, 0.0, 0.0)
                .map_err(|err| HostError::Request(format!("failed to draw frame: {err:?}")))?;

            canvas
                .to_data_url_with_type(CAPTURE_MIME_TYPE)
                .map_err(|err| HostError::Decode(format!("{err:?}")))
        }
    }

    /// Stops every track and detaches the stream. Idempotent.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;

        #[cfg(target_arch = "wasm32")]
        {
            for track in self.stream.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
                    track.stop();
                }
            }
            self.video.set_src_object(None);
        }
    }

    /// Returns whether [`CameraSession::stop`] has run.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(target_arch = "wasm32")]
fn map_media_error(err: JsValue) -> HostError {
    let name = js_sys::Reflect::get(&err, &JsValue::from_str("name"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default();
    match name.as_str() {
        "NotAllowedError" | "SecurityError" => HostError::PermissionDenied(name),
        "NotFoundError" | "OverconstrainedError" | "NotReadableError" => {
            HostError::unavailable("camera")
        }
        _ => HostError::Request(format!("{err:?}")),
    }
}
