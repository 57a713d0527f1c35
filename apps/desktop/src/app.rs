//! Root container: owns the committed article settings

use crate::config::AppConfig;
use crate::ui::main_view;
use iced::{executor, Application, Command, Element, Subscription, Theme};
use lectern_ui::outside_click::Interaction;
use lectern_ui::params_form::ParamsFormMessage;
use lectern_ui::SettingsHost;
use tracing::{debug, info};

pub struct LecternApp {
    pub host: SettingsHost,
    pub theme: Theme,
}

#[derive(Debug, Clone)]
pub enum Message {
    Form(ParamsFormMessage),
    Interaction(Interaction),
}

impl LecternApp {
    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            host: SettingsHost::default(),
            theme: config.theme.into(),
        }
    }

    /// Handle a message synchronously
    pub fn handle(&mut self, message: Message) {
        debug!("Handling message: {:?}", message);

        match message {
            Message::Form(message) => self.host.handle_form(message),
            Message::Interaction(interaction) => self.host.handle_interaction(interaction),
        }
    }
}

impl Application for LecternApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppConfig;

    fn new(config: AppConfig) -> (Self, Command<Message>) {
        info!("Initializing Lectern application");
        (Self::with_config(&config), Command::none())
    }

    fn title(&self) -> String {
        format!("Lectern - {}", self.host.settings().font_family.label)
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.handle(message);
        Command::none()
    }

    fn view(&self) -> Element<Message> {
        main_view(self)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Only listens while the panel is open
        self.host.subscription().map(Message::Interaction)
    }
}

impl Default for LecternApp {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}
