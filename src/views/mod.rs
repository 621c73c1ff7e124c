pub mod activity;
pub mod billing;
pub mod dashboard;
pub mod integrations;
pub mod login;
pub mod logs_table;
pub mod plan_usage;

use iced::{
    Alignment, Element, Length,
    widget::{button, column, container, row, space, text},
};

use crate::{
    app::message::Message,
    styles::{self, font_size, spacing},
};

/// Full-page placeholder shown until the first load settles.
pub fn loading_screen<'a>(label: &'a str) -> Element<'a, Message> {
    container(
        column![
            text("\u{21bb}").size(font_size::DISPLAY),
            text(label).size(font_size::BODY).style(styles::muted_text),
        ]
        .spacing(spacing::LG)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(styles::loading_screen)
    .into()
}

pub fn page_header<'a>(title: String, subtitle: &'a str) -> Element<'a, Message> {
    column![
        text(title).size(font_size::TITLE),
        text(subtitle).size(font_size::BODY).style(styles::muted_text),
    ]
    .spacing(spacing::XXS)
    .into()
}

pub fn error_banner<'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message).size(font_size::BODY))
        .padding([spacing::MD, spacing::XL])
        .width(Length::Fill)
        .style(styles::error_banner)
        .into()
}

pub fn notice_banner<'a>(message: &'a str, on_dismiss: Message) -> Element<'a, Message> {
    container(
        row![
            text(message).size(font_size::BODY),
            space().width(Length::Fill),
            button(text("Dismiss").size(font_size::CAPTION))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::link_button)
                .on_press(on_dismiss),
        ]
        .spacing(spacing::SM)
        .align_y(Alignment::Center),
    )
    .padding([spacing::MD, spacing::XL])
    .width(Length::Fill)
    .style(styles::notice_banner)
    .into()
}

/// Page body with the standard outer padding.
pub fn page<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding([spacing::XXXL, spacing::XXXL])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
