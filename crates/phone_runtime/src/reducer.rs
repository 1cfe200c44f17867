//! Reducer actions, side-effect intents, and transition logic for the phone runtime.

use phone_app_contract::{AppCommand, ApplicationId, ImageRef, Wallpaper};

use crate::{
    apps::AppRegistry,
    gesture::GestureIntent,
    model::{InteractionState, NavigationState, PhoneState},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_phone`].
pub enum PhoneAction {
    /// Show the app drawer (only from the home grid).
    OpenDrawer,
    /// Collapse the app drawer back to the home grid.
    CloseDrawer,
    /// Home indicator tap: return to the home grid from anywhere.
    HomeIndicator,
    /// Mount a panel by id.
    OpenApp {
        /// Requested panel.
        app_id: ApplicationId,
    },
    /// Close the panel if it is the one currently mounted.
    CloseApp {
        /// Panel requesting the close.
        app_id: ApplicationId,
    },
    /// Update the drawer search field.
    SetDrawerSearch {
        /// Raw input.
        term: String,
    },
    /// Pointer pressed on the screen surface.
    PointerDown {
        /// Client y coordinate.
        y: f64,
    },
    /// Pointer released on the screen surface.
    PointerUp {
        /// Client y coordinate.
        y: f64,
    },
    /// Pointer capture lost.
    PointerCancel,
    /// Prepend a photo.
    AppendPhoto {
        /// Captured or imported image.
        image: ImageRef,
    },
    /// Replace the wallpaper.
    SetWallpaper {
        /// New background.
        wallpaper: Wallpaper,
    },
    /// Replace or clear the assistant avatar.
    SetAssistantIcon {
        /// New avatar.
        icon: Option<ImageRef>,
    },
}

impl PhoneAction {
    /// Pointer actions only read navigation and the gesture tracker, never device state.
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerDown { .. } | Self::PointerUp { .. } | Self::PointerCancel
        )
    }
}

impl From<AppCommand> for PhoneAction {
    fn from(command: AppCommand) -> Self {
        match command {
            AppCommand::CloseApp { app_id } => Self::CloseApp { app_id },
            AppCommand::OpenApp { app_id } => Self::OpenApp { app_id },
            AppCommand::AppendPhoto { image } => Self::AppendPhoto { image },
            AppCommand::SetWallpaper { wallpaper } => Self::SetWallpaper { wallpaper },
            AppCommand::SetAssistantIcon { icon } => Self::SetAssistantIcon { icon },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_phone`] for the effect executor.
pub enum RuntimeEffect {
    /// A panel was mounted.
    AppOpened(ApplicationId),
    /// A panel was unmounted.
    AppClosed(ApplicationId),
    /// An open request named an id missing from the registry.
    UnknownAppIgnored(ApplicationId),
}

/// Applies a [`PhoneAction`] and collects resulting side effects.
///
/// Every action is total: requests that do not apply to the current navigation state leave it
/// unchanged.
pub fn reduce_phone(
    state: &mut PhoneState,
    interaction: &mut InteractionState,
    registry: &AppRegistry,
    action: PhoneAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        PhoneAction::OpenDrawer => open_drawer(&mut state.navigation),
        PhoneAction::CloseDrawer => close_drawer(&mut state.navigation),
        PhoneAction::HomeIndicator => {
            interaction.gesture.cancel();
            if let NavigationState::AppOpen { app_id } = &state.navigation {
                effects.push(RuntimeEffect::AppClosed(app_id.clone()));
            }
            state.navigation = NavigationState::Home;
        }
        PhoneAction::OpenApp { app_id } => {
            if registry.resolve(&app_id).is_none() {
                effects.push(RuntimeEffect::UnknownAppIgnored(app_id));
                return effects;
            }
            match &state.navigation {
                NavigationState::AppOpen { app_id: current } if *current == app_id => {
                    return effects;
                }
                NavigationState::AppOpen { app_id: current } => {
                    effects.push(RuntimeEffect::AppClosed(current.clone()));
                }
                NavigationState::Home | NavigationState::Drawer { .. } => {}
            }
            interaction.gesture.cancel();
            effects.push(RuntimeEffect::AppOpened(app_id.clone()));
            state.navigation = NavigationState::AppOpen { app_id };
        }
        PhoneAction::CloseApp { app_id } => {
            if state.navigation.open_app_id() == Some(&app_id) {
                state.navigation = NavigationState::Home;
                effects.push(RuntimeEffect::AppClosed(app_id));
            }
        }
        PhoneAction::SetDrawerSearch { term } => {
            if let NavigationState::Drawer { search_term } = &mut state.navigation {
                *search_term = term;
            }
        }
        pointer @ (PhoneAction::PointerDown { .. }
        | PhoneAction::PointerUp { .. }
        | PhoneAction::PointerCancel) => {
            reduce_pointer(&mut state.navigation, interaction, &pointer);
        }
        PhoneAction::AppendPhoto { image } => state.device.append_photo(image),
        PhoneAction::SetWallpaper { wallpaper } => state.device.set_wallpaper(wallpaper),
        PhoneAction::SetAssistantIcon { icon } => state.device.set_assistant_icon(icon),
    }
    effects
}

/// Applies a pointer action against navigation alone. Other actions are ignored.
///
/// Pointer actions never emit effects: a swipe only moves between `Home` and `Drawer`.
pub fn reduce_pointer(
    navigation: &mut NavigationState,
    interaction: &mut InteractionState,
    action: &PhoneAction,
) {
    match *action {
        PhoneAction::PointerDown { y } => {
            if navigation.open_app_id().is_none() {
                interaction.gesture.pointer_down(y);
            }
        }
        PhoneAction::PointerUp { y } => {
            if navigation.open_app_id().is_some() {
                interaction.gesture.cancel();
                return;
            }
            match interaction.gesture.pointer_up(y, navigation.is_drawer_open()) {
                Some(GestureIntent::OpenDrawer) => open_drawer(navigation),
                Some(GestureIntent::CloseDrawer) => close_drawer(navigation),
                None => {}
            }
        }
        PhoneAction::PointerCancel => interaction.gesture.cancel(),
        _ => {}
    }
}

fn open_drawer(navigation: &mut NavigationState) {
    if navigation.is_home() {
        *navigation = NavigationState::Drawer {
            search_term: String::new(),
        };
    }
}

fn close_drawer(navigation: &mut NavigationState) {
    if navigation.is_drawer_open() {
        *navigation = NavigationState::Home;
    }
}

#[cfg(test)]
mod tests {
    use phone_app_contract::WallpaperPreset;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::apps::tests::sample_registry;

    struct Harness {
        state: PhoneState,
        interaction: InteractionState,
        registry: AppRegistry,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: PhoneState::default(),
                interaction: InteractionState::default(),
                registry: sample_registry(),
            }
        }

        fn apply(&mut self, action: PhoneAction) -> Vec<RuntimeEffect> {
            reduce_phone(
                &mut self.state,
                &mut self.interaction,
                &self.registry,
                action,
            )
        }

        fn swipe(&mut self, from: f64, to: f64) {
            self.apply(PhoneAction::PointerDown { y: from });
            self.apply(PhoneAction::PointerUp { y: to });
        }

        fn navigation(&self) -> &NavigationState {
            &self.state.navigation
        }
    }

    fn id(raw: &str) -> ApplicationId {
        ApplicationId::trusted(raw)
    }

    fn drawer(term: &str) -> NavigationState {
        NavigationState::Drawer {
            search_term: term.to_string(),
        }
    }

    fn open(raw: &str) -> NavigationState {
        NavigationState::AppOpen { app_id: id(raw) }
    }

    #[test]
    fn opening_from_drawer_clears_drawer_and_close_returns_home() {
        let mut harness = Harness::new();
        harness.apply(PhoneAction::OpenDrawer);
        harness.apply(PhoneAction::SetDrawerSearch {
            term: "カ".to_string(),
        });
        assert_eq!(harness.navigation(), &drawer("カ"));

        let effects = harness.apply(PhoneAction::OpenApp {
            app_id: id("camera"),
        });
        assert_eq!(effects, vec![RuntimeEffect::AppOpened(id("camera"))]);
        assert_eq!(harness.navigation(), &open("camera"));

        let effects = harness.apply(PhoneAction::CloseApp {
            app_id: id("camera"),
        });
        assert_eq!(effects, vec![RuntimeEffect::AppClosed(id("camera"))]);
        assert_eq!(harness.navigation(), &NavigationState::Home);
    }

    #[test]
    fn unknown_app_id_leaves_every_state_unchanged() {
        let starts = [NavigationState::Home, drawer("ma"), open("gallery")];
        for start in starts {
            let mut harness = Harness::new();
            harness.state.navigation = start.clone();
            let effects = harness.apply(PhoneAction::OpenApp {
                app_id: id("solitaire"),
            });
            assert_eq!(effects, vec![RuntimeEffect::UnknownAppIgnored(id("solitaire"))]);
            assert_eq!(harness.navigation(), &start);
        }
    }

    #[test]
    fn upward_swipe_opens_drawer_and_downward_swipe_closes_it() {
        let mut harness = Harness::new();
        harness.swipe(100.0, 40.0);
        assert_eq!(harness.navigation(), &drawer(""));

        harness.swipe(40.0, 100.0);
        assert_eq!(harness.navigation(), &NavigationState::Home);
        assert!(!harness.interaction.gesture.is_tracking());
    }

    #[test]
    fn swipe_below_threshold_changes_nothing() {
        let mut harness = Harness::new();
        harness.swipe(100.0, 70.0);
        assert_eq!(harness.navigation(), &NavigationState::Home);

        harness.apply(PhoneAction::OpenDrawer);
        harness.swipe(70.0, 100.0);
        assert_eq!(harness.navigation(), &drawer(""));
        harness.swipe(100.0, 40.0);
        assert_eq!(harness.navigation(), &drawer(""));
    }

    #[test]
    fn gestures_are_ignored_while_an_app_is_open() {
        let mut harness = Harness::new();
        harness.apply(PhoneAction::OpenApp {
            app_id: id("gallery"),
        });
        harness.swipe(100.0, 0.0);
        assert_eq!(harness.navigation(), &open("gallery"));
        assert!(!harness.interaction.gesture.is_tracking());

        harness.apply(PhoneAction::PointerDown { y: 300.0 });
        harness.apply(PhoneAction::CloseApp {
            app_id: id("gallery"),
        });
        harness.apply(PhoneAction::PointerUp { y: 0.0 });
        assert_eq!(harness.navigation(), &NavigationState::Home);
    }

    #[test]
    fn pointer_reducer_matches_full_reducer_and_skips_other_actions() {
        let mut harness = Harness::new();
        let mut navigation = NavigationState::Home;
        let mut interaction = InteractionState::default();
        for action in [
            PhoneAction::PointerDown { y: 120.0 },
            PhoneAction::PointerUp { y: 20.0 },
            PhoneAction::PointerDown { y: 20.0 },
            PhoneAction::PointerCancel,
            PhoneAction::PointerUp { y: 200.0 },
        ] {
            assert!(action.is_pointer());
            reduce_pointer(&mut navigation, &mut interaction, &action);
            assert!(harness.apply(action).is_empty());
            assert_eq!(&navigation, harness.navigation());
            assert_eq!(interaction, harness.interaction);
        }
        assert_eq!(navigation, drawer(""));

        let close = PhoneAction::CloseDrawer;
        assert!(!close.is_pointer());
        reduce_pointer(&mut navigation, &mut interaction, &close);
        assert_eq!(navigation, drawer(""));
    }

    #[test]
    fn close_is_idempotent_and_ignores_stale_panels() {
        let mut harness = Harness::new();
        assert!(harness
            .apply(PhoneAction::CloseApp {
                app_id: id("camera"),
            })
            .is_empty());
        assert_eq!(harness.navigation(), &NavigationState::Home);

        harness.apply(PhoneAction::OpenApp { app_id: id("ai") });
        assert!(harness
            .apply(PhoneAction::CloseApp {
                app_id: id("camera"),
            })
            .is_empty());
        assert_eq!(harness.navigation(), &open("ai"));
    }

    #[test]
    fn home_indicator_returns_home_from_anywhere() {
        let mut harness = Harness::new();
        assert!(harness.apply(PhoneAction::HomeIndicator).is_empty());
        assert_eq!(harness.navigation(), &NavigationState::Home);

        harness.apply(PhoneAction::OpenDrawer);
        harness.apply(PhoneAction::PointerDown { y: 10.0 });
        assert!(harness.apply(PhoneAction::HomeIndicator).is_empty());
        assert_eq!(harness.navigation(), &NavigationState::Home);
        assert!(!harness.interaction.gesture.is_tracking());

        harness.apply(PhoneAction::OpenApp { app_id: id("mail") });
        assert_eq!(
            harness.apply(PhoneAction::HomeIndicator),
            vec![RuntimeEffect::AppClosed(id("mail"))]
        );
        assert_eq!(harness.navigation(), &NavigationState::Home);
    }

    #[test]
    fn opening_another_app_from_a_panel_switches_directly() {
        let mut harness = Harness::new();
        harness.apply(PhoneAction::OpenApp {
            app_id: id("gallery"),
        });
        assert_eq!(
            harness.apply(PhoneAction::OpenApp {
                app_id: id("camera"),
            }),
            vec![
                RuntimeEffect::AppClosed(id("gallery")),
                RuntimeEffect::AppOpened(id("camera")),
            ]
        );
        assert_eq!(harness.navigation(), &open("camera"));
        assert!(harness
            .apply(PhoneAction::OpenApp {
                app_id: id("camera"),
            })
            .is_empty());
    }

    #[test]
    fn drawer_actions_outside_drawer_are_noops() {
        let mut harness = Harness::new();
        harness.apply(PhoneAction::SetDrawerSearch {
            term: "x".to_string(),
        });
        harness.apply(PhoneAction::CloseDrawer);
        assert_eq!(harness.navigation(), &NavigationState::Home);

        harness.apply(PhoneAction::OpenApp { app_id: id("ai") });
        harness.apply(PhoneAction::OpenDrawer);
        assert_eq!(harness.navigation(), &open("ai"));
    }

    #[test]
    fn navigation_stays_a_single_case_across_mixed_sequences() {
        let actions = [
            PhoneAction::OpenDrawer,
            PhoneAction::OpenApp { app_id: id("map") },
            PhoneAction::OpenDrawer,
            PhoneAction::PointerDown { y: 200.0 },
            PhoneAction::PointerUp { y: 20.0 },
            PhoneAction::HomeIndicator,
            PhoneAction::PointerDown { y: 200.0 },
            PhoneAction::PointerUp { y: 20.0 },
            PhoneAction::SetDrawerSearch {
                term: "AI".to_string(),
            },
            PhoneAction::OpenApp {
                app_id: id("unknown"),
            },
            PhoneAction::CloseDrawer,
            PhoneAction::CloseApp { app_id: id("map") },
        ];
        let expected = [
            drawer(""),
            open("map"),
            open("map"),
            open("map"),
            open("map"),
            NavigationState::Home,
            NavigationState::Home,
            drawer(""),
            drawer("AI"),
            drawer("AI"),
            NavigationState::Home,
            NavigationState::Home,
        ];

        let mut harness = Harness::new();
        for (action, expected) in actions.into_iter().zip(expected) {
            harness.apply(action);
            assert_eq!(harness.navigation(), &expected);
        }
    }

    #[test]
    fn device_actions_update_shared_state() {
        let mut harness = Harness::new();
        let a = ImageRef::new("data:image/jpeg;base64,A").expect("image");
        let b = ImageRef::new("data:image/jpeg;base64,B").expect("image");

        harness.apply(PhoneAction::AppendPhoto { image: a.clone() });
        harness.apply(PhoneAction::AppendPhoto { image: b.clone() });
        assert_eq!(harness.state.device.photos, vec![b.clone(), a]);

        harness.apply(PhoneAction::from(AppCommand::SetWallpaper {
            wallpaper: Wallpaper::Image(b.clone()),
        }));
        assert_eq!(harness.state.device.wallpaper, Wallpaper::Image(b.clone()));
        harness.apply(PhoneAction::SetWallpaper {
            wallpaper: Wallpaper::Preset(WallpaperPreset::Ocean),
        });
        assert_eq!(
            harness.state.device.wallpaper,
            Wallpaper::Preset(WallpaperPreset::Ocean)
        );

        harness.apply(PhoneAction::from(AppCommand::SetAssistantIcon {
            icon: Some(b.clone()),
        }));
        assert_eq!(harness.state.device.assistant_icon, Some(b));
        harness.apply(PhoneAction::SetAssistantIcon { icon: None });
        assert_eq!(harness.state.device.assistant_icon, None);
        assert_eq!(harness.navigation(), &NavigationState::Home);
    }

    #[test]
    fn app_commands_map_to_navigation_actions() {
        assert_eq!(
            PhoneAction::from(AppCommand::CloseApp { app_id: id("ai") }),
            PhoneAction::CloseApp { app_id: id("ai") }
        );
        assert_eq!(
            PhoneAction::from(AppCommand::OpenApp {
                app_id: id("camera"),
            }),
            PhoneAction::OpenApp {
                app_id: id("camera"),
            }
        );
    }
}
