use super::*;
use phone_app_contract::AppMountContext;
use system_ui::AppWindowLayer;

#[component]
pub(super) fn AppWindow() -> impl IntoView {
    let runtime = use_phone_runtime();
    let state = runtime.state;
    let open_app = create_memo(move |_| {
        state.with(|phone| phone.navigation.open_app_id().cloned())
    });

    view! {
        <AppWindowLayer open=Signal::derive(move || open_app.with(Option::is_some))>
            {move || {
                let Some(app_id) = open_app.get() else {
                    return ().into_view();
                };
                let Some(app) = runtime.registry.resolve(&app_id) else {
                    logging::warn!("open panel `{app_id}` vanished from the registry");
                    return ().into_view();
                };
                let context = AppMountContext {
                    app_id: app.app_id.clone(),
                    display_name: app.name.clone(),
                    services: runtime.app_services(app.app_id.clone()),
                };
                view! {
                    <section
                        class="phone-panel"
                        data-app-id=app.app_id.to_string()
                        aria-label=app.name.clone()
                    >
                        {app.module.mount(context)}
                    </section>
                }
                .into_view()
            }}
        </AppWindowLayer>
    }
}
