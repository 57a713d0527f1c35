//! Main view: params panel beside the article

use crate::app::{LecternApp, Message};
use iced::{
    widget::{container, row},
    Element, Length,
};
use lectern_ui::article;

pub fn main_view(app: &LecternApp) -> Element<'_, Message> {
    let panel = app.host.form().view().map(Message::Form);
    let content = article(app.host.style_vars());

    container(row![panel, content])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
