//! Phone shell UI composition and interaction surfaces.

mod app_window;
mod drawer;

use leptos::*;
use phone_app_contract::Wallpaper;
use system_ui::{
    AppIconButton, AppIconGrid, DeviceFrame, DeviceScreen, HomeIndicator, Notch, StatusBar,
};

use self::{app_window::AppWindow, drawer::AppDrawer};

use crate::{
    apps::AppDescriptor,
    clock::format_status_time,
    reducer::PhoneAction,
    runtime_context::{use_phone_runtime, PhoneRuntimeContext},
};

pub use crate::runtime_context::PhoneProvider;

fn wallpaper_token(wallpaper: &Wallpaper) -> &'static str {
    match wallpaper {
        Wallpaper::Preset(preset) => preset.token(),
        Wallpaper::Image(_) => "image",
    }
}

fn wallpaper_style(wallpaper: &Wallpaper) -> String {
    match wallpaper {
        Wallpaper::Preset(_) => String::new(),
        Wallpaper::Image(image) => format!("background-image: url(\"{}\");", image.as_str()),
    }
}

/// Launcher tile that opens `app` when tapped.
fn app_launcher(runtime: PhoneRuntimeContext, app: &AppDescriptor) -> impl IntoView {
    let app_id = app.app_id.clone();
    view! {
        <AppIconButton
            icon=app.icon
            label=app.name.clone()
            accent=app.accent.token()
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(PhoneAction::OpenApp {
                    app_id: app_id.clone(),
                });
            })
        />
    }
}

#[component]
/// Full phone shell: bezel, status bar, home grid, drawer, panel region and home indicator.
pub fn PhoneShell() -> impl IntoView {
    let runtime = use_phone_runtime();
    let state = runtime.state;
    let wallpaper = runtime.wallpaper;

    let app_open = create_memo(move |_| state.with(|phone| phone.navigation.open_app_id().is_some()));
    let drawer_open = create_memo(move |_| state.with(|phone| phone.navigation.is_drawer_open()));
    let time_label = Signal::derive(move || format_status_time(runtime.clock.get()));

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        runtime.dispatch_action(PhoneAction::PointerDown {
            y: f64::from(ev.client_y()),
        });
    });
    let on_pointerup = Callback::new(move |ev: web_sys::PointerEvent| {
        runtime.dispatch_action(PhoneAction::PointerUp {
            y: f64::from(ev.client_y()),
        });
    });
    let on_pointercancel = Callback::new(move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(PhoneAction::PointerCancel);
    });

    view! {
        <div
            id="phone-shell-root"
            class="phone-shell"
            data-ui-primitive="true"
            data-ui-kind="phone-root"
            data-navigation=move || state.with(|phone| phone.navigation.token())
        >
            <DeviceFrame>
                <DeviceScreen on_pointerdown on_pointerup on_pointercancel>
                    <div
                        class="phone-wallpaper"
                        data-wallpaper=move || wallpaper.with(wallpaper_token)
                        style=move || wallpaper.with(wallpaper_style)
                        aria-hidden="true"
                    >
                        <span data-ui-slot="glow-a"></span>
                        <span data-ui-slot="glow-b"></span>
                    </div>

                    <StatusBar time_label dark=Signal::derive(move || app_open.get()) />
                    <Notch />

                    <main class="phone-home" data-ui-hidden=move || (app_open.get() || drawer_open.get()).to_string()>
                        <AppIconGrid>
                            {runtime
                                .registry
                                .home_apps()
                                .into_iter()
                                .map(|app| app_launcher(runtime, app))
                                .collect_view()}
                        </AppIconGrid>
                        <p class="phone-swipe-hint" aria-hidden="true">
                            "上にスワイプしてすべてのアプリを表示"
                        </p>
                    </main>

                    <AppDrawer />
                    <AppWindow />

                    <HomeIndicator on_click=Callback::new(move |_| {
                        runtime.dispatch_action(PhoneAction::HomeIndicator);
                    }) />
                </DeviceScreen>
            </DeviceFrame>

            <PrototypeHintCard />
        </div>
    }
}

#[component]
fn PrototypeHintCard() -> impl IntoView {
    view! {
        <aside class="phone-hint-card" data-ui-primitive="true" data-ui-kind="hint-card">
            <h3>"WebOS Prototype"</h3>
            <p>"端末やOSに依存しない仮想スマートフォンの概念実証です。"</p>
            <ul>
                <li><strong>"AIアシスタント: "</strong>"内蔵LLM APIと通信し、コンテキストを保持して会話します。"</li>
                <li><strong>"カメラ: "</strong>"ブラウザのMediaDevices API経由で実際のデバイスのカメラにアクセスします。"</li>
                <li><strong>"ドロワー: "</strong>"ホーム画面で上にスワイプするとすべてのアプリを表示します。"</li>
                <li><strong>"操作: "</strong>"画面下部の白いバーをクリックするとホームに戻ります。"</li>
            </ul>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use phone_app_contract::{ImageRef, WallpaperPreset};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wallpaper_renders_preset_token_or_image_style() {
        let preset = Wallpaper::Preset(WallpaperPreset::Sunset);
        assert_eq!(wallpaper_token(&preset), "sunset");
        assert_eq!(wallpaper_style(&preset), "");

        let image = Wallpaper::Image(ImageRef::new("data:image/png;base64,AA").expect("image"));
        assert_eq!(wallpaper_token(&image), "image");
        assert_eq!(
            wallpaper_style(&image),
            "background-image: url(\"data:image/png;base64,AA\");"
        );
    }
}
