use iced::widget::{column, pick_list, text};
use iced::{Element, Length};
use lectern_core::ArticleOption;

use super::FIELD_TITLE_SIZE;

/// Titled dropdown over a static option catalog
pub fn select<'a, Message: Clone + 'a>(
    title: &'a str,
    options: &'static [ArticleOption],
    selected: ArticleOption,
    on_change: impl Fn(ArticleOption) -> Message + 'a,
) -> Element<'a, Message> {
    column![
        text(title.to_uppercase()).size(FIELD_TITLE_SIZE),
        pick_list(options, Some(selected), on_change)
            .padding([10, 16])
            .width(Length::Fill),
    ]
    .spacing(8)
    .into()
}
