//! Folding Panel - a collapsible left navigation panel for the browser
//!
//! The panel folds and unfolds from a toggle control, the toggle's icon
//! follows the fold state, and the last choice is kept in a cookie so the
//! next page load starts the same way.
//!
//! The core is [`controller::PanelToggleController`], which works against
//! two abstractions:
//! - [`classes::ClassList`] for the panel and icon classes
//! - [`cookie::CookieJar`] for the stored preference
//!
//! It is used from Dioxus through [`hooks::use_folding_panel`] and the
//! [`components`], or, in the browser, from plain pages through the
//! `FoldingPanel` class exported by the `wasm` module.
//!
//! ## Example
//! ```rust
//! use folding_panel::prelude::*;
//!
//! let jar = MemoryCookieJar::new();
//! let config = PanelConfig::default();
//! let panel = config.panel_classes_for(ToggleState::Expanded);
//! let icon = config.icon_classes_for(ToggleState::Expanded);
//!
//! let mut controller = PanelToggleController::new(config, panel, icon, jar.clone());
//! controller.initialize();
//!
//! assert_eq!(controller.on_toggle_requested(&NoDefaultAction), ToggleState::Folded);
//! assert_eq!(jar.get("resized-menu").as_deref(), Some("true"));
//! ```

pub mod classes;
pub mod components;
pub mod config;
pub mod controller;
pub mod cookie;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod pages;
pub mod state;

// Re-export common types
pub mod prelude {
    pub use crate::classes::{ClassList, ClassSet};
    pub use crate::config::PanelConfig;
    pub use crate::controller::{DefaultAction, NoDefaultAction, PanelToggleController};
    pub use crate::cookie::{CookieJar, MemoryCookieJar, PreferenceStore};
    pub use crate::error::{PanelError, PanelResult};
    pub use crate::state::{Preference, ToggleState};
}

#[cfg(target_arch = "wasm32")]
pub mod wasm;
