//! Gallery panel: shared photo grid, local image import, and "set as wallpaper".

use std::{cell::Cell, rc::Rc};

use leptos::*;
use phone_app_contract::{import_image, AppMountContext, ImageRef, Wallpaper};
use system_ui::prelude::*;

/// Clamps a stale selection index against the current photo count.
fn selected_photo(photos: &[ImageRef], index: Option<usize>) -> Option<ImageRef> {
    index.and_then(|index| photos.get(index).cloned())
}

fn photo_count_label(count: usize) -> String {
    format!("{count}枚の写真")
}

#[component]
/// Gallery panel contents.
pub fn GalleryApp(
    /// Runtime mount context.
    context: AppMountContext,
) -> impl IntoView {
    let services = context.services.clone();
    let device = services.device;
    let navigation = services.navigation.clone();
    let picker = services.host.image_picker.clone();
    let selected = create_rw_signal(None::<usize>);
    let import_error = create_rw_signal(None::<String>);
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.set(false)
    });

    let import = Callback::new(move |_: ev::MouseEvent| {
        import_error.set(None);
        let picker = picker.clone();
        let alive = alive.clone();
        spawn_local(async move {
            let result = import_image(picker.as_ref()).await;
            if !alive.get() {
                return;
            }
            match result {
                Ok(Some(image)) => {
                    device.append_photo(image);
                    selected.set(None);
                }
                Ok(None) => {}
                Err(err) => {
                    logging::warn!("gallery import failed: {err}");
                    import_error.set(Some(format!("画像を読み込めませんでした: {err}")));
                }
            }
        });
    });

    let current = Signal::derive(move || {
        device
            .photos
            .with(|photos| selected_photo(photos, selected.get()))
    });

    view! {
        <div class="app app-gallery">
            <PanelHeader
                title=context.display_name.clone()
                on_back=Callback::new(move |_| navigation.close())
            >
                <IconButton icon=IconName::Upload aria_label="写真を追加" on_click=import />
            </PanelHeader>

            {move || import_error.get().map(|message| view! {
                <Text tone=TextTone::Danger>{message}</Text>
            })}

            {move || match current.get() {
                Some(photo) => {
                    let url = photo.as_str().to_string();
                    view! {
                        <figure class="app-gallery-viewer">
                            <img src=url alt="選択した写真" />
                            <figcaption>
                                <Button
                                    variant=ButtonVariant::Primary
                                    leading_icon=IconName::Image
                                    on_click=Callback::new(move |_| {
                                        device.set_wallpaper(Wallpaper::Image(photo.clone()));
                                    })
                                >
                                    "壁紙に設定"
                                </Button>
                                <Button on_click=Callback::new(move |_| selected.set(None))>
                                    "閉じる"
                                </Button>
                            </figcaption>
                        </figure>
                    }
                    .into_view()
                }
                None => ().into_view(),
            }}

            {move || {
                let photos = device.photos.get();
                if photos.is_empty() {
                    return view! {
                        <EmptyState icon=IconName::Image message="写真がありません">
                            <Text tone=TextTone::Secondary>
                                "カメラで撮影するか、画像を追加してください。"
                            </Text>
                        </EmptyState>
                    }
                    .into_view();
                }
                let count_label = photo_count_label(photos.len());
                view! {
                    <Text tone=TextTone::Secondary>{count_label}</Text>
                    <div class="app-gallery-grid">
                        {photos
                            .into_iter()
                            .enumerate()
                            .map(|(index, photo)| view! {
                                <button
                                    type="button"
                                    class="app-gallery-thumb"
                                    aria-label=format!("写真 {}", index + 1)
                                    on:click=move |_| selected.set(Some(index))
                                >
                                    <img src=photo.as_str().to_string() alt="" loading="lazy" />
                                </button>
                            })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn image(raw: &str) -> ImageRef {
        ImageRef::new(raw).expect("image")
    }

    #[test]
    fn selection_survives_only_while_index_exists() {
        let photos = vec![image("data:b"), image("data:a")];
        assert_eq!(selected_photo(&photos, Some(1)), Some(image("data:a")));
        assert_eq!(selected_photo(&photos, Some(2)), None);
        assert_eq!(selected_photo(&photos, None), None);
        assert_eq!(selected_photo(&[], Some(0)), None);
    }

    #[test]
    fn photo_count_label_is_localized() {
        assert_eq!(photo_count_label(3), "3枚の写真");
    }
}
