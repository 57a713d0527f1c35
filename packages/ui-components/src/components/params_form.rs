//! Side panel for article display parameters
//!
//! The panel keeps a draft copy of the committed settings. Edits only touch
//! the draft; Apply hands it to the owner, Reset asks the owner to restore
//! defaults. Whenever the owner commits new settings it calls
//! [`ParamsForm::sync`], which overwrites the draft.

use iced::font::Weight;
use iced::widget::{column, container, row, scrollable, Space};
use iced::{Element, Length, Point, Rectangle, Size};
use lectern_core::{ArticleOption, ArticleSettings, SettingsField};
use tracing::debug;

use super::arrow_button::{arrow_button, ARROW_BUTTON_SIZE};
use super::button::{form_button, ButtonKind};
use super::heading::heading;
use super::radio_group::radio_group;
use super::select::select;
use super::separator::separator;

/// Width of the open panel body
pub const PANEL_WIDTH: f32 = 616.0;

/// Horizontal space reserved next to the panel for the arrow button
const ARROW_GUTTER: f32 = ARROW_BUTTON_SIZE + 2.0 * GUTTER_PADDING;
const GUTTER_PADDING: f32 = 12.0;

/// Messages from the params form
#[derive(Debug, Clone)]
pub enum ParamsFormMessage {
    /// Arrow button pressed
    Toggle,
    /// Open state set from outside (outside-click signal)
    SetOpen(bool),
    /// A control changed one draft field
    FieldChanged(SettingsField, ArticleOption),
    /// Apply pressed
    Submit,
    /// Reset pressed
    Reset,
}

/// Request for the form's owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Commit these settings
    Apply(ArticleSettings),
    /// Restore default settings
    Reset,
}

/// Settings panel state: open flag plus draft settings
#[derive(Debug, Clone)]
pub struct ParamsForm {
    is_open: bool,
    settings: ArticleSettings,
    draft: ArticleSettings,
}

impl Default for ParamsForm {
    fn default() -> Self {
        Self::new(ArticleSettings::default())
    }
}

impl ParamsForm {
    /// Create a closed form seeded from the committed settings
    pub fn new(settings: ArticleSettings) -> Self {
        Self {
            is_open: false,
            settings,
            draft: settings,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Draft being edited
    pub fn draft(&self) -> &ArticleSettings {
        &self.draft
    }

    /// Last committed settings received from the owner
    pub fn settings(&self) -> &ArticleSettings {
        &self.settings
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.is_open);
    }

    pub fn set_open(&mut self, open: bool) {
        if open && !self.is_open {
            // Edits left from a previous session are discarded
            self.draft = self.settings;
        }
        self.is_open = open;
    }

    pub fn edit_field(&mut self, field: SettingsField, option: ArticleOption) {
        self.draft.set(field, option);
    }

    /// Hand the draft to the owner. The panel stays open.
    pub fn submit(&self) -> FormEvent {
        FormEvent::Apply(self.draft)
    }

    /// Ask the owner for defaults. The draft follows through [`ParamsForm::sync`].
    pub fn reset_requested(&self) -> FormEvent {
        FormEvent::Reset
    }

    /// Overwrite the draft with newly committed settings
    pub fn sync(&mut self, settings: ArticleSettings) {
        self.settings = settings;
        self.draft = settings;
    }

    /// Region that counts as "inside" for outside-click detection
    pub fn region(&self) -> Rectangle {
        let width = if self.is_open {
            PANEL_WIDTH + ARROW_GUTTER
        } else {
            ARROW_GUTTER
        };
        Rectangle::new(Point::ORIGIN, Size::new(width, f32::INFINITY))
    }

    /// Handle a form message, returning a request for the owner if any
    pub fn update(&mut self, message: ParamsFormMessage) -> Option<FormEvent> {
        debug!("Params form message: {:?}", message);

        match message {
            ParamsFormMessage::Toggle => {
                self.toggle();
                None
            }
            ParamsFormMessage::SetOpen(open) => {
                self.set_open(open);
                None
            }
            ParamsFormMessage::FieldChanged(field, option) => {
                self.edit_field(field, option);
                None
            }
            ParamsFormMessage::Submit => Some(self.submit()),
            ParamsFormMessage::Reset => Some(self.reset_requested()),
        }
    }

    /// Build the view: arrow button, plus the panel body while open
    pub fn view(&self) -> Element<'_, ParamsFormMessage> {
        let arrow = container(arrow_button(self.is_open, ParamsFormMessage::Toggle))
            .padding(GUTTER_PADDING);

        if !self.is_open {
            return arrow.into();
        }

        let body = container(scrollable(self.form()))
            .width(Length::Fixed(PANEL_WIDTH))
            .height(Length::Fill)
            .style(iced::theme::Container::Box);

        row![body, arrow].into()
    }

    fn form(&self) -> Element<'_, ParamsFormMessage> {
        let title = heading("Set parameters", "Open Sans", 31.0, Weight::ExtraBold, true);

        let actions = row![
            form_button("Reset", ButtonKind::Clear, ParamsFormMessage::Reset),
            Space::with_width(Length::Fill),
            form_button("Apply", ButtonKind::Apply, ParamsFormMessage::Submit),
        ];

        column![
            title,
            self.select_field(SettingsField::FontFamily),
            radio_group(
                SettingsField::FontSize.title(),
                SettingsField::FontSize.options(),
                self.draft.font_size,
                |option| ParamsFormMessage::FieldChanged(SettingsField::FontSize, option),
            ),
            self.select_field(SettingsField::FontColor),
            separator(),
            self.select_field(SettingsField::BackgroundColor),
            self.select_field(SettingsField::ContentWidth),
            Space::with_height(20),
            actions,
        ]
        .spacing(50)
        .padding(48)
        .width(Length::Fill)
        .into()
    }

    fn select_field(&self, field: SettingsField) -> Element<'_, ParamsFormMessage> {
        select(
            field.title(),
            field.options(),
            self.draft.get(field),
            move |option| ParamsFormMessage::FieldChanged(field, option),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_core::catalog::{BACKGROUND_COLORS, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS};

    #[test]
    fn test_initial_state() {
        let form = ParamsForm::default();

        assert!(!form.is_open());
        assert_eq!(form.draft(), &ArticleSettings::DEFAULT);
        assert_eq!(form.settings(), &ArticleSettings::DEFAULT);
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut form = ParamsForm::default();

        form.toggle();
        assert!(form.is_open());
        form.toggle();
        assert!(!form.is_open());

        form.set_open(true);
        form.toggle();
        form.toggle();
        assert!(form.is_open());
    }

    #[test]
    fn test_field_edits_only_touch_draft() {
        let mut form = ParamsForm::default();
        form.set_open(true);

        form.update(ParamsFormMessage::FieldChanged(
            SettingsField::FontSize,
            FONT_SIZE_OPTIONS[1],
        ));
        form.update(ParamsFormMessage::FieldChanged(
            SettingsField::FontFamily,
            FONT_FAMILY_OPTIONS[3],
        ));

        assert_eq!(form.draft().font_size.value, "25px");
        assert_eq!(form.draft().font_family.value, "Days One");
        assert_eq!(form.settings(), &ArticleSettings::DEFAULT);
    }

    #[test]
    fn test_foreign_option_is_ignored() {
        let mut form = ParamsForm::default();
        form.edit_field(SettingsField::FontSize, BACKGROUND_COLORS[3]);
        assert_eq!(form.draft(), &ArticleSettings::DEFAULT);
    }

    #[test]
    fn test_submit_returns_draft_and_stays_open() {
        let mut form = ParamsForm::default();
        form.set_open(true);
        form.edit_field(SettingsField::BackgroundColor, BACKGROUND_COLORS[1]);

        let event = form.update(ParamsFormMessage::Submit);

        let expected = ArticleSettings::DEFAULT.with(SettingsField::BackgroundColor, BACKGROUND_COLORS[1]);
        assert_eq!(event, Some(FormEvent::Apply(expected)));
        assert!(form.is_open());
    }

    #[test]
    fn test_reset_leaves_draft_until_sync() {
        let mut form = ParamsForm::default();
        form.set_open(true);
        form.edit_field(SettingsField::FontSize, FONT_SIZE_OPTIONS[2]);

        assert_eq!(form.update(ParamsFormMessage::Reset), Some(FormEvent::Reset));
        assert_eq!(form.draft().font_size.value, "38px");

        form.sync(ArticleSettings::DEFAULT);
        assert_eq!(form.draft(), &ArticleSettings::DEFAULT);
    }

    #[test]
    fn test_sync_overwrites_draft() {
        let mut form = ParamsForm::default();
        form.set_open(true);
        form.edit_field(SettingsField::FontFamily, FONT_FAMILY_OPTIONS[1]);

        let committed = ArticleSettings::DEFAULT.with(SettingsField::FontSize, FONT_SIZE_OPTIONS[1]);
        form.sync(committed);

        assert_eq!(form.draft(), &committed);
        assert_eq!(form.settings(), &committed);
        assert!(form.is_open());
    }

    #[test]
    fn test_reopen_discards_unapplied_edits() {
        let mut form = ParamsForm::default();
        form.set_open(true);
        form.edit_field(SettingsField::FontSize, FONT_SIZE_OPTIONS[1]);

        form.update(ParamsFormMessage::SetOpen(false));
        assert!(!form.is_open());

        form.update(ParamsFormMessage::Toggle);
        assert_eq!(form.draft().font_size.value, "18px");
    }

    #[test]
    fn test_set_open_while_open_keeps_draft() {
        let mut form = ParamsForm::default();
        form.set_open(true);
        form.edit_field(SettingsField::FontSize, FONT_SIZE_OPTIONS[1]);

        form.set_open(true);
        assert_eq!(form.draft().font_size.value, "25px");
    }

    #[test]
    fn test_region_tracks_open_state() {
        let mut form = ParamsForm::default();
        let closed = form.region();

        form.toggle();
        let open = form.region();

        assert!(open.width > closed.width);
        assert!(open.contains(Point::new(PANEL_WIDTH - 1.0, 500.0)));
        assert!(!closed.contains(Point::new(PANEL_WIDTH - 1.0, 500.0)));
    }
}
