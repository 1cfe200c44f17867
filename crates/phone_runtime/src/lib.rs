//! Phone shell runtime: navigation reducer, gesture classifier, shared device state, app
//! registry, and the Leptos shell that renders them.

pub mod apps;
pub mod clock;
pub mod components;
pub mod effect_executor;
pub mod gesture;
pub mod host;
pub mod model;
pub mod reducer;
pub mod runtime_context;

pub use apps::{builtin_registry, AppAccent, AppDescriptor, AppRegistry, CatalogError};
pub use components::{PhoneProvider, PhoneShell};
pub use gesture::{GestureClassifier, GestureConfig, GestureIntent, GestureSample};
pub use model::*;
pub use reducer::{reduce_phone, PhoneAction, RuntimeEffect};
pub use runtime_context::{use_phone_runtime, PhoneRuntimeContext};
