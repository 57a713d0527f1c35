use iced::widget::horizontal_rule;
use iced::Element;

pub fn separator<'a, Message: 'a>() -> Element<'a, Message> {
    horizontal_rule(1).into()
}
