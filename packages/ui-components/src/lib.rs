//! Reusable UI components for Lectern
//!
//! Controls are stateless and controlled: each takes the current value and a
//! message constructor. [`ParamsForm`] holds the draft;
//! [`SettingsHost`] owns the committed settings around it.

pub mod components;
pub mod outside_click;
pub mod settings_host;

pub use components::*;
pub use outside_click::{Interaction, OutsideClick};
pub use settings_host::SettingsHost;
