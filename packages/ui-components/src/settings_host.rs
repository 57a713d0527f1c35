//! Owner of the committed article settings
//!
//! [`SettingsHost`] holds the canonical settings, the style variables derived
//! from them, the params form and its outside-click detector. Every canonical
//! change goes through one commit step, which recomputes the variables and
//! resyncs the form draft before the next view.

use iced::Subscription;
use lectern_core::{ArticleSettings, StyleVars};
use tracing::{debug, info, warn};

use crate::components::params_form::{FormEvent, ParamsForm, ParamsFormMessage};
use crate::outside_click::{self, Interaction, OutsideClick};

#[derive(Debug, Clone)]
pub struct SettingsHost {
    settings: ArticleSettings,
    style_vars: StyleVars,
    form: ParamsForm,
    outside_click: OutsideClick,
}

impl Default for SettingsHost {
    fn default() -> Self {
        Self::new(ArticleSettings::default())
    }
}

impl SettingsHost {
    pub fn new(settings: ArticleSettings) -> Self {
        let form = ParamsForm::new(settings);
        let outside_click = OutsideClick::new(form.region());

        Self {
            settings,
            style_vars: StyleVars::from(&settings),
            form,
            outside_click,
        }
    }

    /// Committed settings
    pub fn settings(&self) -> &ArticleSettings {
        &self.settings
    }

    /// Style variables derived from the committed settings
    pub fn style_vars(&self) -> &StyleVars {
        &self.style_vars
    }

    pub fn form(&self) -> &ParamsForm {
        &self.form
    }

    /// Replace the committed settings wholesale
    pub fn apply_settings(&mut self, settings: ArticleSettings) {
        info!("Applying article settings");
        self.commit(settings);
    }

    /// Restore the default settings
    pub fn reset_settings(&mut self) {
        info!("Resetting article settings to defaults");
        self.commit(ArticleSettings::default());
    }

    fn commit(&mut self, settings: ArticleSettings) {
        if !settings.is_catalog_backed() {
            warn!("Committing settings with options outside their catalogs");
        }

        self.settings = settings;
        self.style_vars = StyleVars::from(&self.settings);
        self.form.sync(self.settings);

        debug!("Style variables: {}", self.style_vars.to_css());
    }

    /// Route a form message; owner requests are committed immediately
    pub fn handle_form(&mut self, message: ParamsFormMessage) {
        let was_open = self.form.is_open();

        match self.form.update(message) {
            Some(FormEvent::Apply(settings)) => self.apply_settings(settings),
            Some(FormEvent::Reset) => self.reset_settings(),
            None => {}
        }

        if was_open && !self.form.is_open() {
            self.outside_click.release();
        }
        self.outside_click.set_region(self.form.region());
    }

    /// Feed a raw interaction to the outside-click detector
    pub fn handle_interaction(&mut self, interaction: Interaction) {
        if let Some(open) = self.outside_click.observe(self.form.is_open(), interaction) {
            self.handle_form(ParamsFormMessage::SetOpen(open));
        }
    }

    /// Outside-click listener; empty while the form is closed
    pub fn subscription(&self) -> Subscription<Interaction> {
        outside_click::subscription(self.form.is_open())
    }
}
