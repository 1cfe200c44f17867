use super::*;

#[component]
/// Panel title bar with an optional back affordance and trailing actions.
pub fn PanelHeader(
    #[prop(into)] title: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_back: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-panel-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="panel-header"
        >
            {on_back.map(|on_back| view! {
                <button
                    type="button"
                    data-ui-slot="back"
                    aria-label="戻る"
                    on:click=move |ev| on_back.call(ev)
                >
                    <Icon icon=IconName::ChevronLeft size=IconSize::Md />
                </button>
            })}
            <h1 data-ui-slot="title">{title}</h1>
            <div data-ui-slot="actions">{children.map(|children| children())}</div>
        </header>
    }
}

#[component]
/// Grouped list container.
pub fn ListSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] heading: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="list"
        >
            {heading.map(|heading| view! { <h2 data-ui-slot="heading">{heading}</h2> })}
            <div data-ui-slot="rows">{children()}</div>
        </section>
    }
}

#[component]
/// One list row: leading icon, title, optional detail, optional trailing control.
pub fn ListRow(
    #[prop(into)] title: String,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] detail: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-list-row", layout_class)
            data-ui-primitive="true"
            data-ui-kind="list-row"
        >
            {icon.map(|icon| view! { <span data-ui-slot="icon"><Icon icon size=IconSize::Sm /></span> })}
            <span data-ui-slot="copy">
                <span data-ui-slot="title">{title}</span>
                {detail.map(|detail| view! { <span data-ui-slot="detail">{detail}</span> })}
            </span>
            <span data-ui-slot="control">{children.map(|children| children())}</span>
        </div>
    }
}

#[component]
/// Placeholder shown when a collection has nothing to render.
pub fn EmptyState(
    #[prop(into)] message: String,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Lg /> })}
            <p data-ui-slot="message">{message}</p>
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Inline text with a semantic tone.
pub fn Text(
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Round avatar showing an image or a fallback glyph.
pub fn Avatar(
    #[prop(into)] image_url: MaybeSignal<Option<String>>,
    #[prop(default = IconName::Sparkle)] fallback: IconName,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-avatar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="avatar"
        >
            {move || match image_url.get() {
                Some(url) => view! { <img src=url alt="" /> }.into_view(),
                None => view! { <Icon icon=fallback size=IconSize::Sm /> }.into_view(),
            }}
        </span>
    }
}
