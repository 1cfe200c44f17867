//! Camera panel: live preview from the device camera and a shutter that saves frames to the
//! shared photo list.
//!
//! The stream is owned by a [`CameraSession`] that is stopped when the panel unmounts, including
//! when the start request resolves after the panel has already closed.

use std::{cell::RefCell, rc::Rc};

use leptos::*;
use phone_app_contract::{AppMountContext, ImageRef};
use platform_host::HostError;
use platform_host_web::{CameraFacing, CameraSession};
use system_ui::prelude::*;

const CAMERA_ACCESS_ERROR: &str =
    "カメラへのアクセスが許可されていないか、デバイスが見つかりません。";
const CAMERA_START_ERROR: &str = "カメラを起動できませんでした。";
const CAPTURE_ERROR: &str = "写真を保存できませんでした。";

#[derive(Debug, Clone, PartialEq, Eq)]
enum CameraStatus {
    Starting,
    Live,
    Failed(&'static str),
}

fn start_failure_message(err: &HostError) -> &'static str {
    match err {
        HostError::PermissionDenied(_) | HostError::Unavailable { .. } => CAMERA_ACCESS_ERROR,
        _ => CAMERA_START_ERROR,
    }
}

fn flipped(facing: CameraFacing) -> CameraFacing {
    match facing {
        CameraFacing::Environment => CameraFacing::User,
        CameraFacing::User => CameraFacing::Environment,
    }
}

#[derive(Default)]
struct SessionSlot {
    session: Option<CameraSession>,
    closed: bool,
    generation: u32,
}

impl SessionSlot {
    fn begin(&mut self) -> u32 {
        if let Some(mut session) = self.session.take() {
            session.stop();
        }
        self.generation += 1;
        self.generation
    }

    /// Stores a started session unless the panel closed or a newer start superseded it.
    fn accept(&mut self, generation: u32, mut session: CameraSession) -> bool {
        if self.closed || generation != self.generation {
            session.stop();
            return false;
        }
        self.session = Some(session);
        true
    }

    fn close(&mut self) {
        self.closed = true;
        if let Some(mut session) = self.session.take() {
            session.stop();
        }
    }
}

#[component]
/// Camera panel contents.
pub fn CameraApp(
    /// Runtime mount context.
    context: AppMountContext,
) -> impl IntoView {
    let device = context.services.device;
    let navigation = context.services.navigation.clone();
    let video_ref = create_node_ref::<html::Video>();
    let status = create_rw_signal(CameraStatus::Starting);
    let facing = create_rw_signal(CameraFacing::default());
    let capture_error = create_rw_signal(None::<&'static str>);
    let slot = Rc::new(RefCell::new(SessionSlot::default()));

    on_cleanup({
        let slot = slot.clone();
        move || slot.borrow_mut().close()
    });

    let start = {
        let slot = slot.clone();
        move || {
            let Some(video) = video_ref.get_untracked() else {
                return;
            };
            let video: web_sys::HtmlVideoElement = (*video).clone();
            let generation = slot.borrow_mut().begin();
            let requested = facing.get_untracked();
            let slot = slot.clone();
            status.set(CameraStatus::Starting);
            spawn_local(async move {
                match CameraSession::start(video, requested).await {
                    Ok(session) => {
                        if slot.borrow_mut().accept(generation, session) {
                            status.set(CameraStatus::Live);
                        }
                    }
                    Err(err) => {
                        if slot.borrow().closed {
                            return;
                        }
                        logging::error!("camera start failed: {err}");
                        status.set(CameraStatus::Failed(start_failure_message(&err)));
                    }
                }
            });
        }
    };
    let start = store_value(start);

    video_ref.on_load(move |_| start.with_value(|start| start()));

    let capture = {
        let slot = slot.clone();
        Callback::new(move |_: ev::MouseEvent| {
            let frame = match slot.borrow().session.as_ref() {
                Some(session) => session.capture_frame(),
                None => return,
            };
            match frame.map(ImageRef::new) {
                Ok(Some(image)) => {
                    capture_error.set(None);
                    device.append_photo(image);
                }
                Ok(None) => capture_error.set(Some(CAPTURE_ERROR)),
                Err(err) => {
                    logging::warn!("camera capture failed: {err}");
                    capture_error.set(Some(CAPTURE_ERROR));
                }
            }
        })
    };

    let flip = Callback::new(move |_: ev::MouseEvent| {
        facing.update(|facing| *facing = flipped(*facing));
        start.with_value(|start| start());
    });

    let latest_photo =
        Signal::derive(move || device.photos.with(|photos| photos.first().map(|p| p.as_str().to_string())));

    view! {
        <div class="app app-camera" data-camera-status=move || match status.get() {
            CameraStatus::Starting => "starting",
            CameraStatus::Live => "live",
            CameraStatus::Failed(_) => "failed",
        }>
            <div class="app-camera-viewport">
                <video node_ref=video_ref autoplay=true playsinline=true muted=true></video>
                {move || match status.get() {
                    CameraStatus::Failed(message) => view! {
                        <p class="app-camera-error" role="alert">{message}</p>
                    }
                    .into_view(),
                    _ => ().into_view(),
                }}
                {move || capture_error.get().map(|message| view! {
                    <Text tone=TextTone::Danger>{message}</Text>
                })}
            </div>
            <div class="app-camera-controls">
                <IconButton
                    icon=IconName::ChevronLeft
                    variant=ButtonVariant::Glass
                    aria_label="閉じる"
                    on_click=Callback::new(move |_| navigation.close())
                />
                <Button
                    variant=ButtonVariant::Glass
                    size=ButtonSize::Lg
                    ui_slot="shutter"
                    aria_label="シャッター"
                    disabled=Signal::derive(move || status.get() != CameraStatus::Live)
                    on_click=capture
                >
                    <span data-ui-slot="shutter-ring"></span>
                </Button>
                <IconButton
                    icon=IconName::Camera
                    variant=ButtonVariant::Glass
                    aria_label="カメラを切り替え"
                    on_click=flip
                />
                <Avatar image_url=latest_photo fallback=IconName::Image layout_class="app-camera-latest" />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn start_failures_map_to_user_messages() {
        assert_eq!(
            start_failure_message(&HostError::PermissionDenied("NotAllowedError".to_string())),
            CAMERA_ACCESS_ERROR
        );
        assert_eq!(
            start_failure_message(&HostError::unavailable("camera")),
            CAMERA_ACCESS_ERROR
        );
        assert_eq!(
            start_failure_message(&HostError::Request("video playback".to_string())),
            CAMERA_START_ERROR
        );
    }

    #[test]
    fn flip_toggles_between_cameras() {
        assert_eq!(flipped(CameraFacing::Environment), CameraFacing::User);
        assert_eq!(flipped(CameraFacing::User), CameraFacing::Environment);
    }

    #[test]
    fn restarts_advance_generation_and_close_clears_session() {
        let mut slot = SessionSlot::default();
        let generation = slot.begin();
        slot.close();
        assert!(slot.closed);
        assert!(slot.session.is_none());
        assert_eq!(generation, 1);
        assert_eq!(slot.begin(), 2);
    }
}
