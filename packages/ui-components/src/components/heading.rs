use iced::font::{Family, Weight};
use iced::widget::text;
use iced::{Element, Font};

/// Display heading with a fixed family and weight
pub fn heading<'a, Message: 'a>(
    content: &str,
    family: &'static str,
    size: f32,
    weight: Weight,
    uppercase: bool,
) -> Element<'a, Message> {
    let content = if uppercase {
        content.to_uppercase()
    } else {
        content.to_string()
    };

    text(content)
        .size(size)
        .font(Font {
            family: Family::Name(family),
            weight,
            ..Font::DEFAULT
        })
        .into()
}
