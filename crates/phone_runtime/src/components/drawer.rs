use super::*;
use system_ui::{DrawerSheet, EmptyState, FieldVariant, IconName, TextField};

#[component]
pub(super) fn AppDrawer() -> impl IntoView {
    let runtime = use_phone_runtime();
    let state = runtime.state;
    let open = Signal::derive(move || state.with(|phone| phone.navigation.is_drawer_open()));
    let search_term = create_memo(move |_| {
        state.with(|phone| phone.navigation.search_term().to_string())
    });

    view! {
        <DrawerSheet
            open
            on_collapse=Callback::new(move |_| runtime.dispatch_action(PhoneAction::CloseDrawer))
        >
            <TextField
                variant=FieldVariant::Pill
                ui_slot="search"
                leading_icon=IconName::Search
                placeholder="アプリを検索"
                aria_label="アプリを検索"
                input_type="search"
                value=Signal::derive(move || search_term.get())
                on_input=Callback::new(move |term: String| {
                    runtime.dispatch_action(PhoneAction::SetDrawerSearch { term });
                })
            />
            {move || {
                let term = search_term.get();
                let results = runtime.registry.search(&term);
                if results.is_empty() {
                    view! {
                        <EmptyState
                            icon=IconName::Search
                            message=format!("「{}」に一致するアプリはありません", term.trim())
                        />
                    }
                    .into_view()
                } else {
                    view! {
                        <AppIconGrid layout_class="drawer-results">
                            {results
                                .into_iter()
                                .map(|app| app_launcher(runtime, app))
                                .collect_view()}
                        </AppIconGrid>
                    }
                    .into_view()
                }
            }}
        </DrawerSheet>
    }
}
