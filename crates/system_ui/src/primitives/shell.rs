use super::*;

#[component]
/// Outer device bezel.
pub fn DeviceFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-device-frame", layout_class)
            data-ui-primitive="true"
            data-ui-kind="device-frame"
        >
            {children()}
        </div>
    }
}

#[component]
/// Screen surface inside the bezel; receives shell pointer gestures.
pub fn DeviceScreen(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_pointerup: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_pointercancel: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-device-screen", layout_class)
            data-ui-primitive="true"
            data-ui-kind="device-screen"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:pointerup=move |ev| {
                if let Some(on_pointerup) = on_pointerup.as_ref() {
                    on_pointerup.call(ev);
                }
            }
            on:pointercancel=move |ev| {
                if let Some(on_pointercancel) = on_pointercancel.as_ref() {
                    on_pointercancel.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Camera notch at the top of the screen.
pub fn Notch() -> impl IntoView {
    view! {
        <div data-ui-primitive="true" data-ui-kind="notch" aria-hidden="true">
            <span data-ui-slot="lens"></span>
            <span data-ui-slot="sensor"></span>
        </div>
    }
}

#[component]
/// Status bar with a leading clock slot and trailing system glyphs.
pub fn StatusBar(
    #[prop(into)] time_label: Signal<String>,
    /// Dark glyphs over light panel backgrounds.
    #[prop(optional, into)]
    dark: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div
            class="ui-status-bar"
            data-ui-primitive="true"
            data-ui-kind="status-bar"
            data-ui-tone=move || if dark.get() { "dark" } else { "light" }
        >
            <span data-ui-slot="clock">{move || time_label.get()}</span>
            <span data-ui-slot="indicators" aria-hidden="true">
                <Icon icon=IconName::Signal size=IconSize::Xs />
                <Icon icon=IconName::Wifi size=IconSize::Xs />
                <Icon icon=IconName::Battery size=IconSize::Xs />
            </span>
        </div>
    }
}

#[component]
/// Grid of launcher icons.
pub fn AppIconGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-app-icon-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="app-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// Launcher tile: colored rounded icon plus label.
pub fn AppIconButton(
    icon: IconName,
    #[prop(into)] label: String,
    /// Accent token rendered as `data-ui-accent`.
    accent: &'static str,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let aria_label = label.clone();
    view! {
        <button
            type="button"
            class="ui-app-icon-button"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="app-icon-button"
            data-ui-accent=accent
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <span data-ui-slot="tile">
                <Icon icon size=IconSize::Lg />
            </span>
            <span data-ui-slot="label">{label}</span>
        </button>
    }
}

#[component]
/// Bottom sheet holding the full app list.
pub fn DrawerSheet(
    #[prop(into)] open: Signal<bool>,
    #[prop(optional)] on_collapse: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-drawer-sheet"
            data-ui-primitive="true"
            data-ui-kind="drawer-sheet"
            data-ui-open=move || bool_token(open.get())
            aria-hidden=move || (!open.get()).to_string()
        >
            <button
                type="button"
                data-ui-slot="collapse"
                aria-label="ドロワーを閉じる"
                on:click=move |ev| {
                    if let Some(on_collapse) = on_collapse.as_ref() {
                        on_collapse.call(ev);
                    }
                }
            >
                <Icon icon=IconName::ChevronDown size=IconSize::Md />
            </button>
            {children()}
        </div>
    }
}

#[component]
/// Region the active panel slides into.
pub fn AppWindowLayer(
    #[prop(into)] open: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-app-window"
            data-ui-primitive="true"
            data-ui-kind="app-window"
            data-ui-open=move || bool_token(open.get())
            on:pointerdown=|ev| ev.stop_propagation()
            on:pointerup=|ev| ev.stop_propagation()
        >
            {children()}
        </div>
    }
}

#[component]
/// Home indicator bar at the bottom edge.
pub fn HomeIndicator(#[prop(optional)] on_click: Option<Callback<MouseEvent>>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-home-indicator"
            aria-label="ホーム"
            data-ui-primitive="true"
            data-ui-kind="home-indicator"
            on:click=move |ev| {
                ev.stop_propagation();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:pointerdown=|ev| ev.stop_propagation()
            on:pointerup=|ev| ev.stop_propagation()
        >
            <span data-ui-slot="bar"></span>
        </button>
    }
}
