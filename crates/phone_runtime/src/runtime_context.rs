//! Runtime provider and context wiring for the phone shell.
//!
//! This module owns the reducer container, the runtime effect queue, the shared clock tick and
//! the per-panel service wiring. UI composition stays in [`crate::components`].

use std::time::Duration;

use leptos::*;
use phone_app_contract::{AppCommand, AppServices, ApplicationId, ImageRef, Wallpaper};
use platform_host::HostServices;

use crate::{
    apps::{builtin_registry, AppRegistry},
    clock::ClockSnapshot,
    effect_executor,
    host::PhoneHostContext,
    model::{InteractionState, PhoneState},
    reducer::{reduce_phone, reduce_pointer, PhoneAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading phone runtime state and dispatching [`PhoneAction`] values.
pub struct PhoneRuntimeContext {
    /// Host service bundle for effect execution and panel injection.
    pub host: StoredValue<PhoneHostContext>,
    /// App catalog.
    pub registry: &'static AppRegistry,
    /// Navigation and shared device state.
    pub state: RwSignal<PhoneState>,
    /// Gesture tracking state.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Photos mirrored from [`PhoneState::device`] for panels.
    pub photos: RwSignal<Vec<ImageRef>>,
    /// Wallpaper mirrored from [`PhoneState::device`].
    pub wallpaper: RwSignal<Wallpaper>,
    /// Assistant avatar mirrored from [`PhoneState::device`].
    pub assistant_icon: RwSignal<Option<ImageRef>>,
    /// Wall clock refreshed once per second.
    pub clock: RwSignal<ClockSnapshot>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<PhoneAction>,
}

impl PhoneRuntimeContext {
    /// Builds the signals and dispatch callback under the current reactive owner.
    pub fn new(host_services: HostServices, registry: &'static AppRegistry) -> Self {
        let host = store_value(PhoneHostContext::new(host_services));
        let state = create_rw_signal(PhoneState::default());
        let interaction = create_rw_signal(InteractionState::default());
        let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
        let initial_device = state.get_untracked().device;
        let photos = create_rw_signal(initial_device.photos);
        let wallpaper = create_rw_signal(initial_device.wallpaper);
        let assistant_icon = create_rw_signal(initial_device.assistant_icon);
        let clock = create_rw_signal(ClockSnapshot::now());

        let dispatch = Callback::new(move |action: PhoneAction| {
            if action.is_pointer() {
                dispatch_pointer(state, interaction, &action);
                return;
            }

            let mut phone = state.get_untracked();
            let mut ui = interaction.get_untracked();
            let previous_phone = phone.clone();
            let previous_ui = ui;

            let new_effects = reduce_phone(&mut phone, &mut ui, registry, action);

            if phone.device.photos != previous_phone.device.photos {
                photos.set(phone.device.photos.clone());
            }
            if phone.device.wallpaper != previous_phone.device.wallpaper {
                wallpaper.set(phone.device.wallpaper.clone());
            }
            if phone.device.assistant_icon != previous_phone.device.assistant_icon {
                assistant_icon.set(phone.device.assistant_icon.clone());
            }
            if phone != previous_phone {
                state.set(phone);
            }
            if ui != previous_ui {
                interaction.set(ui);
            }
            if !new_effects.is_empty() {
                let mut queue = effects.get_untracked();
                queue.extend(new_effects);
                effects.set(queue);
            }
        });

        Self {
            host,
            registry,
            state,
            interaction,
            effects,
            photos,
            wallpaper,
            assistant_icon,
            clock,
            dispatch,
        }
    }

    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: PhoneAction) {
        self.dispatch.call(action);
    }

    /// Command sink handed to panels; every command becomes a [`PhoneAction`].
    pub fn command_sender(&self) -> Callback<AppCommand> {
        let dispatch = self.dispatch;
        Callback::new(move |command: AppCommand| dispatch.call(PhoneAction::from(command)))
    }

    /// Service bundle for the panel identified by `app_id`.
    pub fn app_services(&self, app_id: ApplicationId) -> AppServices {
        AppServices::new(
            app_id,
            self.command_sender(),
            self.photos.read_only(),
            self.wallpaper.read_only(),
            self.assistant_icon.read_only(),
            self.host.get_value().services(),
        )
    }
}

/// Pointer fast path: touches navigation and gesture tracking without copying device state.
fn dispatch_pointer(
    state: RwSignal<PhoneState>,
    interaction: RwSignal<InteractionState>,
    action: &PhoneAction,
) {
    let mut navigation = state.with_untracked(|phone| phone.navigation.clone());
    let mut ui = interaction.get_untracked();
    let previous_ui = ui;

    reduce_pointer(&mut navigation, &mut ui, action);

    if state.with_untracked(|phone| phone.navigation != navigation) {
        state.update(|phone| phone.navigation = navigation);
    }
    if ui != previous_ui {
        interaction.set(ui);
    }
}

fn install_clock_tick(runtime: PhoneRuntimeContext) {
    match set_interval_with_handle(
        move || runtime.clock.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("clock interval unavailable: {err:?}"),
    }
}

#[component]
/// Provides [`PhoneRuntimeContext`] to descendant components.
pub fn PhoneProvider(
    /// Injected browser or stub host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let runtime = PhoneRuntimeContext::new(host_services, builtin_registry());
    logging::log!(
        "phone runtime booted with {} apps on {} host",
        runtime.registry.len(),
        runtime.host.get_value().host_strategy_name()
    );

    provide_context(runtime);
    effect_executor::install(runtime);
    install_clock_tick(runtime);

    children().into_view()
}

/// Returns the current [`PhoneRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`PhoneProvider`].
pub fn use_phone_runtime() -> PhoneRuntimeContext {
    use_context::<PhoneRuntimeContext>().expect("PhoneRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc, sync::OnceLock};

    use phone_app_contract::WallpaperPreset;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{apps::tests::sample_registry, model::NavigationState};

    fn registry() -> &'static AppRegistry {
        static REGISTRY: OnceLock<AppRegistry> = OnceLock::new();
        REGISTRY.get_or_init(sample_registry)
    }

    #[test]
    fn dispatch_updates_state_mirrors_and_effect_queue() {
        let runtime = create_runtime();
        let phone = PhoneRuntimeContext::new(HostServices::stub(), registry());
        let photo = ImageRef::new("data:image/jpeg;base64,AA").expect("image");

        phone.dispatch_action(PhoneAction::OpenApp {
            app_id: ApplicationId::trusted("camera"),
        });
        assert_eq!(
            phone.state.get_untracked().navigation,
            NavigationState::AppOpen {
                app_id: ApplicationId::trusted("camera"),
            }
        );
        assert_eq!(
            phone.effects.get_untracked(),
            vec![RuntimeEffect::AppOpened(ApplicationId::trusted("camera"))]
        );

        let services = phone.app_services(ApplicationId::trusted("camera"));
        services.device.append_photo(photo.clone());
        services
            .device
            .set_wallpaper(Wallpaper::Preset(WallpaperPreset::Forest));
        assert_eq!(services.device.photos.get_untracked(), vec![photo.clone()]);
        assert_eq!(
            services.device.wallpaper.get_untracked(),
            Wallpaper::Preset(WallpaperPreset::Forest)
        );
        assert_eq!(phone.state.get_untracked().device.photos, vec![photo]);

        services.navigation.close();
        assert_eq!(phone.state.get_untracked().navigation, NavigationState::Home);
        assert_eq!(
            phone.effects.get_untracked().last(),
            Some(&RuntimeEffect::AppClosed(ApplicationId::trusted("camera")))
        );

        runtime.dispose();
    }

    #[test]
    fn pointer_dispatch_only_notifies_on_navigation_change() {
        let runtime = create_runtime();
        let phone = PhoneRuntimeContext::new(HostServices::stub(), registry());
        let photo = ImageRef::new("data:image/jpeg;base64,AAAA").expect("image");
        phone.dispatch_action(PhoneAction::AppendPhoto {
            image: photo.clone(),
        });

        let state_runs = Rc::new(Cell::new(0_u32));
        create_effect({
            let state_runs = state_runs.clone();
            move |_| {
                phone.state.with(|_| ());
                state_runs.set(state_runs.get() + 1);
            }
        });
        let baseline = state_runs.get();
        let before = phone.state.get_untracked();

        phone.dispatch_action(PhoneAction::PointerDown { y: 300.0 });
        assert!(phone.interaction.get_untracked().gesture.is_tracking());
        phone.dispatch_action(PhoneAction::PointerUp { y: 290.0 });
        phone.dispatch_action(PhoneAction::PointerCancel);

        assert_eq!(state_runs.get(), baseline);
        assert_eq!(phone.state.get_untracked(), before);
        assert!(phone.state.get_untracked().device.photos[0].ptr_eq(&photo));

        phone.dispatch_action(PhoneAction::PointerDown { y: 300.0 });
        phone.dispatch_action(PhoneAction::PointerUp { y: 100.0 });
        assert_eq!(
            phone.state.get_untracked().navigation,
            NavigationState::Drawer {
                search_term: String::new(),
            }
        );
        assert_eq!(phone.state.get_untracked().device, before.device);

        runtime.dispose();
    }

    #[test]
    fn stale_panel_close_does_not_affect_newer_panel() {
        let runtime = create_runtime();
        let phone = PhoneRuntimeContext::new(HostServices::stub(), registry());
        let gallery = phone.app_services(ApplicationId::trusted("gallery"));

        phone.dispatch_action(PhoneAction::OpenApp {
            app_id: ApplicationId::trusted("gallery"),
        });
        gallery
            .navigation
            .open_app(ApplicationId::trusted("camera"));
        gallery.navigation.close();

        assert_eq!(
            phone.state.get_untracked().navigation,
            NavigationState::AppOpen {
                app_id: ApplicationId::trusted("camera"),
            }
        );

        runtime.dispose();
    }
}
