pub mod arrow_button;
pub mod article;
pub mod button;
pub mod heading;
pub mod params_form;
pub mod radio_group;
pub mod select;
pub mod separator;

pub use arrow_button::*;
pub use article::*;
pub use button::*;
pub use heading::*;
pub use params_form::*;
pub use radio_group::*;
pub use select::*;
pub use separator::*;

/// Text size of control titles
pub const FIELD_TITLE_SIZE: u16 = 12;
