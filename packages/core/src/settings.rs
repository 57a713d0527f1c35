//! Article display settings
//!
//! [`ArticleSettings`] is a fixed five-field record. Each field holds one
//! entry from the matching catalog in [`crate::catalog`].

use crate::catalog::{
    ArticleOption, BACKGROUND_COLORS, CONTENT_WIDTHS, FONT_COLORS, FONT_FAMILY_OPTIONS,
    FONT_SIZE_OPTIONS,
};
use serde::Serialize;
use tracing::warn;

/// Key naming one field of [`ArticleSettings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SettingsField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl SettingsField {
    pub const ALL: [SettingsField; 5] = [
        SettingsField::FontFamily,
        SettingsField::FontSize,
        SettingsField::FontColor,
        SettingsField::BackgroundColor,
        SettingsField::ContentWidth,
    ];

    /// Catalog the field draws its values from
    pub fn options(&self) -> &'static [ArticleOption] {
        match self {
            SettingsField::FontFamily => &FONT_FAMILY_OPTIONS,
            SettingsField::FontSize => &FONT_SIZE_OPTIONS,
            SettingsField::FontColor => &FONT_COLORS,
            SettingsField::BackgroundColor => &BACKGROUND_COLORS,
            SettingsField::ContentWidth => &CONTENT_WIDTHS,
        }
    }

    /// Title shown above the field's control
    pub fn title(&self) -> &'static str {
        match self {
            SettingsField::FontFamily => "Font",
            SettingsField::FontSize => "Font size",
            SettingsField::FontColor => "Font color",
            SettingsField::BackgroundColor => "Background color",
            SettingsField::ContentWidth => "Content width",
        }
    }

    pub fn accepts(&self, option: &ArticleOption) -> bool {
        self.options().contains(option)
    }
}

impl std::fmt::Display for SettingsField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Text-display settings for the article preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ArticleSettings {
    pub font_family: ArticleOption,
    pub font_size: ArticleOption,
    pub font_color: ArticleOption,
    pub background_color: ArticleOption,
    pub content_width: ArticleOption,
}

impl ArticleSettings {
    /// Initial state and reset target
    pub const DEFAULT: ArticleSettings = ArticleSettings {
        font_family: FONT_FAMILY_OPTIONS[0],
        font_size: FONT_SIZE_OPTIONS[0],
        font_color: FONT_COLORS[0],
        background_color: BACKGROUND_COLORS[0],
        content_width: CONTENT_WIDTHS[0],
    };

    pub fn get(&self, field: SettingsField) -> ArticleOption {
        match field {
            SettingsField::FontFamily => self.font_family,
            SettingsField::FontSize => self.font_size,
            SettingsField::FontColor => self.font_color,
            SettingsField::BackgroundColor => self.background_color,
            SettingsField::ContentWidth => self.content_width,
        }
    }

    /// Replace one field. Options outside the field's catalog are ignored.
    ///
    /// Returns whether the option was accepted.
    pub fn set(&mut self, field: SettingsField, option: ArticleOption) -> bool {
        if !field.accepts(&option) {
            warn!(
                "Ignoring option {:?} not offered for {:?}",
                option.value, field
            );
            return false;
        }

        let slot = match field {
            SettingsField::FontFamily => &mut self.font_family,
            SettingsField::FontSize => &mut self.font_size,
            SettingsField::FontColor => &mut self.font_color,
            SettingsField::BackgroundColor => &mut self.background_color,
            SettingsField::ContentWidth => &mut self.content_width,
        };
        *slot = option;
        true
    }

    /// Builder-style variant of [`ArticleSettings::set`]
    pub fn with(mut self, field: SettingsField, option: ArticleOption) -> Self {
        self.set(field, option);
        self
    }

    /// True when every field references an entry of its catalog
    pub fn is_catalog_backed(&self) -> bool {
        SettingsField::ALL
            .iter()
            .all(|field| field.accepts(&self.get(*field)))
    }
}

impl Default for ArticleSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ArticleSettings::default();
        assert_eq!(settings.font_family.value, "Open Sans");
        assert_eq!(settings.font_size.value, "18px");
        assert_eq!(settings.font_color.value, "#000000");
        assert_eq!(settings.background_color.value, "#FFFFFF");
        assert_eq!(settings.content_width.value, "1394px");
        assert!(settings.is_catalog_backed());
    }

    #[test]
    fn test_set_each_field() {
        let mut settings = ArticleSettings::default();

        for field in SettingsField::ALL {
            let last = *field.options().last().unwrap();
            assert!(settings.set(field, last));
            assert_eq!(settings.get(field), last);
        }

        assert!(settings.is_catalog_backed());
        assert_ne!(settings, ArticleSettings::DEFAULT);
    }

    #[test]
    fn test_set_rejects_foreign_option() {
        let mut settings = ArticleSettings::default();

        // A color is not a font size
        assert!(!settings.set(SettingsField::FontSize, FONT_COLORS[2]));
        assert_eq!(settings, ArticleSettings::DEFAULT);

        // Same value, different catalog entry
        assert!(!settings.set(SettingsField::FontColor, BACKGROUND_COLORS[0]));
        assert_eq!(settings.font_color, FONT_COLORS[0]);
    }

    #[test]
    fn test_with_builder() {
        let settings = ArticleSettings::default()
            .with(SettingsField::FontSize, FONT_SIZE_OPTIONS[2])
            .with(SettingsField::ContentWidth, CONTENT_WIDTHS[1]);

        assert_eq!(settings.font_size.value, "38px");
        assert_eq!(settings.content_width.value, "948px");
        assert_eq!(settings.font_family, ArticleSettings::DEFAULT.font_family);
    }

    #[test]
    fn test_field_titles() {
        assert_eq!(SettingsField::BackgroundColor.to_string(), "Background color");
        assert_eq!(SettingsField::FontSize.options().len(), 3);
    }
}
