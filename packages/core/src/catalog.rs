//! Option catalog for article display settings
//!
//! Every selectable value is a static [`ArticleOption`]. Settings only ever
//! reference entries from these tables, which is what keeps them valid.

use serde::Serialize;

/// A selectable (label, value) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ArticleOption {
    /// Display text shown in controls
    pub label: &'static str,
    /// CSS-consumable value (font family, length or color token)
    pub value: &'static str,
    /// Optional style hook
    pub class_name: Option<&'static str>,
}

impl ArticleOption {
    pub const fn with_class(label: &'static str, value: &'static str, class: &'static str) -> Self {
        Self {
            label,
            value,
            class_name: Some(class),
        }
    }
}

impl std::fmt::Display for ArticleOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

pub const FONT_FAMILY_OPTIONS: [ArticleOption; 5] = [
    ArticleOption::with_class("Open Sans", "Open Sans", "open-sans"),
    ArticleOption::with_class("Ubuntu", "Ubuntu", "ubuntu"),
    ArticleOption::with_class("Cormorant Garamond", "Cormorant Garamond", "cormorant-garamond"),
    ArticleOption::with_class("Days One", "Days One", "days-one"),
    ArticleOption::with_class("Merriweather", "Merriweather", "merriweather"),
];

pub const FONT_SIZE_OPTIONS: [ArticleOption; 3] = [
    ArticleOption::with_class("18px", "18px", "font-size-18"),
    ArticleOption::with_class("25px", "25px", "font-size-25"),
    ArticleOption::with_class("38px", "38px", "font-size-38"),
];

pub const FONT_COLORS: [ArticleOption; 9] = [
    ArticleOption::with_class("Black", "#000000", "font-black"),
    ArticleOption::with_class("White", "#FFFFFF", "font-white"),
    ArticleOption::with_class("Gray", "#C4C4C4", "font-gray"),
    ArticleOption::with_class("Pink", "#FEAFE8", "font-pink"),
    ArticleOption::with_class("Hot Pink", "#FD24AF", "font-hot-pink"),
    ArticleOption::with_class("Yellow", "#FFC802", "font-yellow"),
    ArticleOption::with_class("Green", "#80D994", "font-green"),
    ArticleOption::with_class("Sky Blue", "#6FC1FD", "font-sky-blue"),
    ArticleOption::with_class("Purple", "#5F00FF", "font-purple"),
];

pub const BACKGROUND_COLORS: [ArticleOption; 9] = [
    ArticleOption::with_class("White", "#FFFFFF", "bg-white"),
    ArticleOption::with_class("Black", "#000000", "bg-black"),
    ArticleOption::with_class("Gray", "#C4C4C4", "bg-gray"),
    ArticleOption::with_class("Pink", "#FEAFE8", "bg-pink"),
    ArticleOption::with_class("Hot Pink", "#FD24AF", "bg-hot-pink"),
    ArticleOption::with_class("Yellow", "#FFC802", "bg-yellow"),
    ArticleOption::with_class("Green", "#80D994", "bg-green"),
    ArticleOption::with_class("Sky Blue", "#6FC1FD", "bg-sky-blue"),
    ArticleOption::with_class("Purple", "#5F00FF", "bg-purple"),
];

pub const CONTENT_WIDTHS: [ArticleOption; 2] = [
    ArticleOption::with_class("Wide", "1394px", "width-wide"),
    ArticleOption::with_class("Narrow", "948px", "width-narrow"),
];
