use iced::{
    Alignment, Element, Length,
    widget::{button, column, container, row, rule, scrollable, space, text},
};

use super::{error_banner, loading_screen, logs_table, page, page_header, plan_usage};
use crate::app::message::{DashboardMessage, Message};
use crate::app::route::Route;
use crate::core::{
    format::{extract_slug, first_name},
    logs::LogEntry,
    profile::Profile,
    refresh::RefreshController,
};
use crate::styles::{self, font_size, spacing};

pub fn view<'a>(
    controller: &'a RefreshController,
    session_name: Option<&'a str>,
) -> Element<'a, Message> {
    if controller.is_initial_loading() {
        return loading_screen("Loading dashboard...");
    }

    let fallback = Profile::default();
    let profile = controller.profile().unwrap_or(&fallback);
    let name = first_name(profile.name.as_deref(), session_name);

    let header = row![
        page_header(
            format!("Welcome back, {name} \u{1f44b}"),
            "Here's your enrichment overview at a glance",
        ),
        space().width(Length::Fill),
        logs_table::refresh_button(
            controller.is_refreshing(),
            Message::Dashboard(DashboardMessage::Refresh),
        ),
    ]
    .align_y(Alignment::Center);

    let mut content = column![header].spacing(spacing::XXL);

    if let Some(err) = controller.error() {
        content = content.push(error_banner(err));
    }

    let stats = row![
        stat_card(
            "Credits Used",
            profile.enrichments_used.to_string(),
            plan_usage::usage_bar(profile),
            true,
        ),
        stat_card(
            "Credits Remaining",
            profile.enrichments_remaining.to_string(),
            text(format!("out of {} total", profile.enrichment_limit))
                .size(font_size::CAPTION)
                .style(styles::muted_text)
                .into(),
            false,
        ),
        stat_card(
            "Current Plan",
            profile.plan_label(),
            link("Manage plan \u{2192}", Route::Billing),
            false,
        ),
    ]
    .spacing(spacing::XL)
    .width(Length::Fill);

    let recent = controller.logs().map(|l| l.logs.as_slice()).unwrap_or_default();

    content = content.push(stats).push(recent_activity(recent));

    page(scrollable(content))
}

fn link<'a>(label: &'a str, route: Route) -> Element<'a, Message> {
    button(text(label).size(font_size::CAPTION))
        .padding(0)
        .style(styles::link_button)
        .on_press(Message::NavigateTo(route))
        .into()
}

fn stat_card<'a>(
    label: &'a str,
    value: String,
    footer: Element<'a, Message>,
    accent: bool,
) -> Element<'a, Message> {
    let body = column![
        text(label).size(font_size::SMALL).style(styles::muted_text),
        text(value).size(font_size::DISPLAY).style(styles::accent_text),
        footer,
    ]
    .spacing(spacing::SM);

    let mut card = column![];
    if accent {
        card = card.push(
            container(space().height(3.0))
                .width(Length::Fill)
                .style(styles::card_accent_top),
        );
    }
    card = card.push(container(body).padding(spacing::XXL).width(Length::Fill));

    container(card)
        .width(Length::Fill)
        .style(styles::card)
        .into()
}

fn recent_activity<'a>(logs: &[LogEntry]) -> Element<'a, Message> {
    let header = row![
        text("Recent Activity").size(font_size::HEADING),
        space().width(Length::Fill),
        link("View all \u{2192}", Route::Activity),
    ]
    .align_y(Alignment::Center)
    .padding([spacing::XL, spacing::XXL]);

    let body: Element<'a, Message> = if logs.is_empty() {
        logs_table::empty_state("Use the Chrome extension on any LinkedIn profile to start enriching.")
    } else {
        let rows: Vec<Element<'a, Message>> = logs
            .iter()
            .map(|entry| {
                column![
                    row![
                        text(extract_slug(&entry.linkedin_url))
                            .size(font_size::BODY)
                            .style(styles::accent_text),
                        space().width(Length::Fill),
                        logs_table::status_badge(entry),
                    ]
                    .align_y(Alignment::Center)
                    .padding([spacing::MD, spacing::XXL]),
                    rule::horizontal(1),
                ]
                .into()
            })
            .collect();
        column(rows).into()
    };

    container(column![header, rule::horizontal(1), body])
        .width(Length::Fill)
        .style(styles::card)
        .into()
}
