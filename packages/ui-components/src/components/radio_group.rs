use iced::widget::{column, radio, text, Row};
use iced::{Alignment, Element};
use lectern_core::ArticleOption;

use super::FIELD_TITLE_SIZE;

/// Titled row of radio buttons, one per catalog option
pub fn radio_group<'a, Message: Clone + 'a>(
    title: &'a str,
    options: &'static [ArticleOption],
    selected: ArticleOption,
    on_change: impl Fn(ArticleOption) -> Message + 'a,
) -> Element<'a, Message> {
    let buttons: Vec<Element<'a, Message>> = options
        .iter()
        .map(|option| radio(option.label, *option, Some(selected), &on_change).into())
        .collect();

    column![
        text(title.to_uppercase()).size(FIELD_TITLE_SIZE),
        Row::with_children(buttons)
            .spacing(24)
            .align_items(Alignment::Center),
    ]
    .spacing(8)
    .into()
}
