use iced::{
    Alignment, Element, Length,
    widget::{column, container, progress_bar, row, space, text},
};

use crate::{
    app::message::Message,
    core::profile::Profile,
    styles::{self, font_size, spacing},
};

pub fn usage_bar<'a>(profile: &Profile) -> Element<'a, Message> {
    let level = profile.usage_level();
    progress_bar(0.0..=100.0, profile.bar_percent())
        .style(move |theme| styles::usage_bar(theme, level))
        .into()
}

pub fn plan_badge<'a>(profile: &Profile) -> Element<'a, Message> {
    container(
        text(format!("\u{2726} {} Plan", profile.plan_label().to_uppercase()))
            .size(font_size::SMALL),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::badge_primary)
    .into()
}

fn figure<'a>(value: String, label: &'a str) -> Element<'a, Message> {
    column![
        text(value).size(font_size::DISPLAY).style(styles::accent_text),
        text(label).size(font_size::CAPTION).style(styles::muted_text),
    ]
    .spacing(spacing::XXXS)
    .align_x(Alignment::Center)
    .into()
}

/// Current plan card: badge, quota figures and the coloured usage bar.
pub fn view<'a>(profile: &Profile, heading: Option<&'a str>) -> Element<'a, Message> {
    let mut title = column![].spacing(spacing::SM);
    if let Some(heading) = heading {
        title = title.push(text(heading).size(font_size::HEADING));
    }
    title = title.push(plan_badge(profile));

    let figures = row![
        figure(profile.enrichments_used.to_string(), "Used"),
        figure(profile.enrichments_remaining.to_string(), "Remaining"),
        figure(profile.enrichment_limit.to_string(), "Total"),
    ]
    .spacing(spacing::XXXL);

    let top = row![title, space().width(Length::Fill), figures].align_y(Alignment::Center);

    let bar = column![
        row![
            text("Enrichment credits used")
                .size(font_size::SMALL)
                .style(styles::muted_text),
            space().width(Length::Fill),
            text(format!(
                "{} / {}",
                profile.enrichments_used, profile.enrichment_limit
            ))
            .size(font_size::SMALL),
        ],
        usage_bar(profile),
    ]
    .spacing(spacing::SM);

    column![
        container(space().height(3.0)).width(Length::Fill).style(styles::card_accent_top),
        container(column![top, bar].spacing(spacing::XXL)).padding(spacing::XXL),
    ]
    .width(Length::Fill)
    .into()
}
