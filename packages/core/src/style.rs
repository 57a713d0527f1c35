//! Style variables derived from the committed settings
//!
//! The root container exposes five named variables to the article view:
//! `--font-family`, `--font-size`, `--font-color`, `--container-width` and
//! `--bg-color`. Values are the literal option strings; [`StyleVars::resolve`]
//! turns them into typed values for rendering.

use crate::error::{LecternError, LecternResult};
use crate::settings::ArticleSettings;
use serde::Serialize;

/// One of the five style variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StyleVar {
    FontFamily,
    FontSize,
    FontColor,
    ContainerWidth,
    BackgroundColor,
}

impl StyleVar {
    pub const ALL: [StyleVar; 5] = [
        StyleVar::FontFamily,
        StyleVar::FontSize,
        StyleVar::FontColor,
        StyleVar::ContainerWidth,
        StyleVar::BackgroundColor,
    ];

    /// Custom property name
    pub fn name(&self) -> &'static str {
        match self {
            StyleVar::FontFamily => "--font-family",
            StyleVar::FontSize => "--font-size",
            StyleVar::FontColor => "--font-color",
            StyleVar::ContainerWidth => "--container-width",
            StyleVar::BackgroundColor => "--bg-color",
        }
    }
}

/// Current values of the style variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleVars {
    font_family: &'static str,
    font_size: &'static str,
    font_color: &'static str,
    container_width: &'static str,
    background_color: &'static str,
}

impl StyleVars {
    pub fn get(&self, var: StyleVar) -> &'static str {
        match var {
            StyleVar::FontFamily => self.font_family,
            StyleVar::FontSize => self.font_size,
            StyleVar::FontColor => self.font_color,
            StyleVar::ContainerWidth => self.container_width,
            StyleVar::BackgroundColor => self.background_color,
        }
    }

    /// `(name, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        StyleVar::ALL
            .into_iter()
            .map(move |var| (var.name(), self.get(var)))
    }

    /// Inline style declaration, e.g. `--font-family: Open Sans; ...`
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Parse the variable values into typed style
    pub fn resolve(&self) -> LecternResult<ArticleStyle> {
        Ok(ArticleStyle {
            font_family: self.font_family,
            font_size: parse_px(self.font_size)?,
            font_color: Rgba::from_hex(self.font_color)?,
            container_width: parse_px(self.container_width)?,
            background_color: Rgba::from_hex(self.background_color)?,
        })
    }
}

impl From<&ArticleSettings> for StyleVars {
    fn from(settings: &ArticleSettings) -> Self {
        Self {
            font_family: settings.font_family.value,
            font_size: settings.font_size.value,
            font_color: settings.font_color.value,
            container_width: settings.content_width.value,
            background_color: settings.background_color.value,
        }
    }
}

impl Default for StyleVars {
    fn default() -> Self {
        Self::from(&ArticleSettings::DEFAULT)
    }
}

/// Typed style consumed by the article view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArticleStyle {
    pub font_family: &'static str,
    pub font_size: f32,
    pub font_color: Rgba,
    pub container_width: f32,
    pub background_color: Rgba,
}

impl Default for ArticleStyle {
    fn default() -> Self {
        Self {
            font_family: "Open Sans",
            font_size: 18.0,
            font_color: Rgba::BLACK,
            container_width: 1394.0,
            background_color: Rgba::WHITE,
        }
    }
}

/// RGBA color with components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);

    /// Parse `#RRGGBB` or `#RRGGBBAA`
    pub fn from_hex(token: &str) -> LecternResult<Self> {
        let invalid = || LecternError::InvalidColor(token.to_string());

        let hex = token.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };

        Ok(Self::rgba_u8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

/// Parse a pixel length such as `18px`
pub fn parse_px(token: &str) -> LecternResult<f32> {
    let invalid = || LecternError::InvalidLength(token.to_string());

    let number = token.trim().strip_suffix("px").ok_or_else(invalid)?;
    let value: f32 = number.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok(value)
}
