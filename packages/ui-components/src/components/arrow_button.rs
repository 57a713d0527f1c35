use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text};
use iced::{Element, Length};

/// Side of the arrow button the panel sits on
pub const ARROW_BUTTON_SIZE: f32 = 52.0;

/// Round toggle that points toward the panel's next state
pub fn arrow_button<'a, Message: Clone + 'a>(is_open: bool, on_press: Message) -> Element<'a, Message> {
    let glyph = if is_open { "←" } else { "→" };

    button(
        text(glyph)
            .size(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .horizontal_alignment(Horizontal::Center)
            .vertical_alignment(Vertical::Center),
    )
    .width(Length::Fixed(ARROW_BUTTON_SIZE))
    .height(Length::Fixed(ARROW_BUTTON_SIZE))
    .style(if is_open {
        iced::theme::Button::Secondary
    } else {
        iced::theme::Button::Primary
    })
    .on_press(on_press)
    .into()
}
