use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use phone_app_contract::ApplicationId;
use phone_runtime::{use_phone_runtime, PhoneAction, PhoneProvider, PhoneShell};
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="WebOS" />
        <Meta name="description" content="A simulated smartphone OS running in the browser." />

        <Router>
            <main class="site-root">
                <PhoneEntry>
                    <Routes>
                        <Route path="" view=|| () />
                        <Route path="/apps/:app_id" view=AppDeepLink />
                    </Routes>
                </PhoneEntry>
            </main>
        </Router>
    }
}

/// Phone runtime and shell; `children` render inside the runtime context.
#[component]
pub fn PhoneEntry(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <PhoneProvider host_services=build_host_services()>
            <PhoneShell />
            {children.map(|children| children())}
        </PhoneProvider>
    }
}

/// Opens the app named in `/apps/:app_id` once the route resolves.
#[component]
fn AppDeepLink() -> impl IntoView {
    let runtime = use_phone_runtime();
    let params = use_params_map();

    create_effect(move |_| {
        let Some(raw) = params.with(|map| map.get("app_id").cloned()) else {
            return;
        };
        match ApplicationId::new(raw) {
            Ok(app_id) => runtime.dispatch_action(PhoneAction::OpenApp { app_id }),
            Err(err) => logging::warn!("ignoring deep link: {err}"),
        }
    });
}
