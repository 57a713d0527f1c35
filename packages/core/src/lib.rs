pub mod catalog;
pub mod error;
pub mod settings;
pub mod style;

pub use catalog::ArticleOption;
pub use error::{LecternError, LecternResult};
pub use settings::{ArticleSettings, SettingsField};
pub use style::{ArticleStyle, Rgba, StyleVar, StyleVars};
