//! Shared UI primitive library for the phone shell and its app panels.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the shell stylesheet. Panels
//! should compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    AppIconButton, AppIconGrid, AppWindowLayer, Avatar, Button, ButtonSize, ButtonVariant,
    DeviceFrame, DeviceScreen, DrawerSheet, EmptyState, FieldVariant, HomeIndicator, IconButton,
    ListRow, ListSurface, Notch, PanelHeader, StatusBar, Switch, Text, TextArea, TextField,
    TextTone,
};

/// Convenience imports for app crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppIconButton, AppIconGrid, Avatar, Button, ButtonSize, ButtonVariant, EmptyState,
        FieldVariant, Icon, IconButton, IconName, IconSize, ListRow, ListSurface, PanelHeader,
        Switch, Text, TextArea, TextField, TextTone,
    };
}
