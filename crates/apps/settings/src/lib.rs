//! Built-in Settings panel: wallpaper, assistant icon, network toggles, and OS information.
//!
//! All changes flow through [`phone_app_contract::DeviceStateService`] so other panels and the
//! shell wallpaper layer observe them immediately. Image uploads go through the host image
//! picker injected in [`platform_host::HostServices`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{cell::Cell, rc::Rc};

use leptos::*;
use phone_app_contract::{import_image, AppMountContext, Wallpaper, WallpaperPreset};
use platform_host::{CapabilityStatus, HostCapabilities};
use system_ui::prelude::*;

const OS_VERSION_LABEL: &str = "WebOS v1.0.0 (Build 2026)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UploadTarget {
    Wallpaper,
    AssistantIcon,
}

fn capability_label(status: CapabilityStatus) -> &'static str {
    match status {
        CapabilityStatus::Available => "利用可能",
        CapabilityStatus::RequiresUserActivation => "許可が必要",
        CapabilityStatus::Unavailable => "利用不可",
    }
}

fn capability_rows(capabilities: HostCapabilities) -> [(&'static str, &'static str); 3] {
    [
        ("カメラ", capability_label(capabilities.camera)),
        ("画像の読み込み", capability_label(capabilities.image_picker)),
        ("AIチャット", capability_label(capabilities.chat_completion)),
    ]
}

fn is_preset_selected(current: &Wallpaper, preset: WallpaperPreset) -> bool {
    matches!(current, Wallpaper::Preset(active) if *active == preset)
}

#[component]
/// Settings panel contents.
pub fn SettingsApp(
    /// Runtime mount context.
    context: AppMountContext,
) -> impl IntoView {
    let services = context.services.clone();
    let device = services.device;
    let airplane_mode = create_rw_signal(false);
    let upload_error = create_rw_signal(None::<String>);
    let upload_busy = create_rw_signal(false);
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.set(false)
    });

    let picker = services.host.image_picker.clone();
    let upload = Callback::new(move |target: UploadTarget| {
        if upload_busy.get_untracked() {
            return;
        }
        upload_busy.set(true);
        upload_error.set(None);
        let picker = picker.clone();
        let alive = alive.clone();
        spawn_local(async move {
            let result = import_image(picker.as_ref()).await;
            if !alive.get() {
                return;
            }
            upload_busy.set(false);
            match result {
                Ok(Some(image)) => match target {
                    UploadTarget::Wallpaper => device.set_wallpaper(Wallpaper::Image(image)),
                    UploadTarget::AssistantIcon => device.set_assistant_icon(Some(image)),
                },
                Ok(None) => {}
                Err(err) => {
                    logging::warn!("settings image upload failed: {err}");
                    upload_error.set(Some(format!("画像を読み込めませんでした: {err}")));
                }
            }
        });
    });

    let navigation = services.navigation.clone();
    let assistant_icon_url =
        Signal::derive(move || device.assistant_icon.get().map(|icon| icon.as_str().to_string()));
    let custom_wallpaper =
        Signal::derive(move || matches!(device.wallpaper.get(), Wallpaper::Image(_)));

    view! {
        <div class="app app-settings">
            <PanelHeader
                title=context.display_name.clone()
                on_back=Callback::new(move |_| navigation.close())
            />
            <div class="app-settings-body">
                <ListSurface heading="壁紙">
                    <div class="app-settings-presets" role="radiogroup" aria-label="壁紙プリセット">
                        {WallpaperPreset::ALL
                            .into_iter()
                            .map(|preset| view! {
                                <Button
                                    variant=ButtonVariant::Quiet
                                    layout_class="wallpaper-swatch"
                                    ui_slot=preset.token()
                                    aria_label=preset.label()
                                    selected=Signal::derive(move || {
                                        device.wallpaper.with(|current| is_preset_selected(current, preset))
                                    })
                                    on_click=Callback::new(move |_| {
                                        device.set_wallpaper(Wallpaper::Preset(preset));
                                    })
                                >
                                    <span data-ui-slot="label">{preset.label()}</span>
                                </Button>
                            })
                            .collect_view()}
                    </div>
                    <ListRow title="写真から選択" icon=IconName::Image>
                        <Show when=move || custom_wallpaper.get()>
                            <Text tone=TextTone::Secondary>"使用中"</Text>
                        </Show>
                        <Button
                            leading_icon=IconName::Upload
                            disabled=upload_busy
                            on_click=Callback::new(move |_| upload.call(UploadTarget::Wallpaper))
                        >
                            "アップロード"
                        </Button>
                    </ListRow>
                </ListSurface>

                <ListSurface heading="AIアシスタント">
                    <ListRow title="アイコン" icon=IconName::Sparkle>
                        <Avatar image_url=assistant_icon_url />
                        <Button
                            leading_icon=IconName::Upload
                            disabled=upload_busy
                            on_click=Callback::new(move |_| upload.call(UploadTarget::AssistantIcon))
                        >
                            "変更"
                        </Button>
                        <IconButton
                            icon=IconName::Dismiss
                            aria_label="アイコンをリセット"
                            disabled=Signal::derive(move || device.assistant_icon.with(Option::is_none))
                            on_click=Callback::new(move |_| device.set_assistant_icon(None))
                        />
                    </ListRow>
                </ListSurface>

                {move || upload_error.get().map(|message| view! {
                    <Text tone=TextTone::Danger>{message}</Text>
                })}

                <ListSurface heading="ネットワーク">
                    <ListRow title="機内モード" icon=IconName::Airplane>
                        <Switch
                            aria_label="機内モード"
                            checked=airplane_mode
                            on_toggle=Callback::new(move |next| airplane_mode.set(next))
                        />
                    </ListRow>
                    <ListRow title="Wi-Fi" icon=IconName::Wifi>
                        <Text tone=TextTone::Secondary>
                            {move || if airplane_mode.get() { "オフ" } else { "接続済み" }}
                        </Text>
                    </ListRow>
                    <ListRow title="Bluetooth" icon=IconName::Bluetooth>
                        <Text tone=TextTone::Secondary>"オン"</Text>
                    </ListRow>
                </ListSurface>

                <ListSurface heading="OS情報">
                    <ListRow title="バージョン" icon=IconName::Info detail=OS_VERSION_LABEL />
                    <ListRow title="ホスト" detail=services.host.host_strategy.as_str() />
                    {capability_rows(services.host.capabilities)
                        .into_iter()
                        .map(|(title, status)| view! { <ListRow title detail=status /> })
                        .collect_view()}
                </ListSurface>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use phone_app_contract::ImageRef;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn preset_selection_only_matches_the_active_preset() {
        let current = Wallpaper::Preset(WallpaperPreset::Ocean);
        assert!(is_preset_selected(&current, WallpaperPreset::Ocean));
        assert!(!is_preset_selected(&current, WallpaperPreset::Aurora));

        let image = Wallpaper::Image(ImageRef::new("blob:x").expect("image"));
        assert!(WallpaperPreset::ALL
            .into_iter()
            .all(|preset| !is_preset_selected(&image, preset)));
    }

    #[test]
    fn capability_rows_describe_host_posture() {
        assert_eq!(
            capability_rows(HostCapabilities::browser()),
            [
                ("カメラ", "許可が必要"),
                ("画像の読み込み", "利用可能"),
                ("AIチャット", "利用可能"),
            ]
        );
        assert!(capability_rows(HostCapabilities::stub())
            .iter()
            .all(|(_, status)| *status == "利用不可"));
    }
}
