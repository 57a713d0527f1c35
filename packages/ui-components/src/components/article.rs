//! Article display driven by style variables

use iced::alignment::Horizontal;
use iced::widget::{column, container, scrollable, text};
use iced::{Background, Border, Color, Element, Font, Length};
use lectern_core::{ArticleStyle, Rgba, StyleVars};
use tracing::warn;

const TITLE: &str = "Portrait of Western Switzerland";
const SUBTITLE: &str = "Where the lake meets the vineyards";

const PARAGRAPHS: [&str; 4] = [
    "Geneva sits at the far end of the lake, wedged between the Jura and the \
     Alps, and for most of the year the water is the color of slate. On clear \
     mornings the surface goes silver and the whole shoreline seems to lean \
     toward Mont Blanc.",
    "Further east the terraces of Lavaux climb straight out of the water. \
     Walls built by monks in the eleventh century still hold the vines in \
     place, and the villages between them are small enough to cross in a few \
     minutes on foot.",
    "The train from Lausanne to Montreux takes twenty minutes and hugs the \
     shore the entire way. Locals read the paper; visitors press their faces \
     to the glass. Both are right.",
    "By evening the light turns amber, the ferries slow down, and the lake \
     stops being a view and becomes a place where people simply sit and wait \
     for the stars.",
];

pub fn iced_color(color: Rgba) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Resolve variables into typed style, falling back to defaults on bad tokens
pub fn resolve_style(vars: &StyleVars) -> ArticleStyle {
    vars.resolve().unwrap_or_else(|e| {
        warn!("Falling back to default article style: {}", e);
        ArticleStyle::default()
    })
}

/// Render the sample article with the given style variables
pub fn article<'a, Message: 'a>(vars: &StyleVars) -> Element<'a, Message> {
    let style = resolve_style(vars);
    let font = Font::with_name(style.font_family);
    let color = iced_color(style.font_color);

    let title = text(TITLE)
        .size(style.font_size * 2.5)
        .font(font)
        .style(iced::theme::Text::Color(color));
    let subtitle = text(SUBTITLE)
        .size(style.font_size * 1.4)
        .font(font)
        .style(iced::theme::Text::Color(color));

    let mut content = column![title, subtitle].spacing(style.font_size);
    for paragraph in PARAGRAPHS {
        content = content.push(
            text(paragraph)
                .size(style.font_size)
                .font(font)
                .style(iced::theme::Text::Color(color)),
        );
    }

    let page = container(content)
        .padding(48)
        .max_width(style.container_width)
        .width(Length::Fill);

    container(scrollable(
        container(page)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(ArticleSurface(
        iced_color(style.background_color),
    ))))
    .into()
}

// Page background
struct ArticleSurface(Color);

impl iced::widget::container::StyleSheet for ArticleSurface {
    type Style = iced::Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            background: Some(Background::Color(self.0)),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }
}
