use iced::alignment::Horizontal;
use iced::widget::{button, text};
use iced::Element;

/// Visual variant of a form button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Commits the form
    Apply,
    /// Clears the form back to defaults
    Clear,
}

impl ButtonKind {
    fn style(&self) -> iced::theme::Button {
        match self {
            ButtonKind::Apply => iced::theme::Button::Primary,
            ButtonKind::Clear => iced::theme::Button::Secondary,
        }
    }
}

pub fn form_button<'a, Message: Clone + 'a>(
    title: &'a str,
    kind: ButtonKind,
    on_press: Message,
) -> Element<'a, Message> {
    button(text(title).size(18).horizontal_alignment(Horizontal::Center))
        .padding([12, 24])
        .style(kind.style())
        .on_press(on_press)
        .into()
}
