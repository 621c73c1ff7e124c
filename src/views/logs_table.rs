use chrono::{DateTime, Local};
use iced::{
    Alignment, Element, Length,
    widget::{Row, button, column, container, row, rule, scrollable, space, text},
};

use crate::{
    app::message::{ActivityMessage, Message},
    core::{
        format::{extract_slug, format_created_at},
        logs::{LogEntry, LogsPage},
    },
    styles::{self, font_size, spacing},
};

const COLUMNS: [(&str, u16); 4] = [
    ("LINKEDIN PROFILE", 5),
    ("STATUS", 2),
    ("RETRIES", 1),
    ("TIME", 2),
];

pub fn refresh_button<'a>(refreshing: bool, on_press: Message) -> Element<'a, Message> {
    let label = if refreshing {
        "\u{21bb} Refreshing..."
    } else {
        "\u{21bb} Refresh"
    };
    button(text(label).size(font_size::SMALL).center())
        .padding([spacing::SM, spacing::LG])
        .style(styles::outlined_button)
        .on_press_maybe((!refreshing).then_some(on_press))
        .into()
}

pub fn status_badge<'a>(entry: &LogEntry) -> Element<'a, Message> {
    let marker = if entry.status.is_in_flight() {
        "\u{25cc}"
    } else {
        "\u{25cf}"
    };
    container(text(format!("{marker} {}", entry.status)).size(font_size::CAPTION))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::status_badge(entry.status))
        .into()
}

pub fn empty_state<'a>(detail: &'a str) -> Element<'a, Message> {
    container(
        column![
            text("\u{1f4cb}").size(font_size::DISPLAY + 8.0),
            text("No enrichments yet").size(font_size::HEADING),
            text(detail)
                .size(font_size::BODY)
                .style(styles::muted_text)
                .center(),
        ]
        .spacing(spacing::SM)
        .align_x(Alignment::Center)
        .max_width(360.0),
    )
    .padding([spacing::XXXL * 2.0, spacing::XXL])
    .center_x(Length::Fill)
    .into()
}

fn log_row<'a>(entry: &LogEntry, now: &DateTime<Local>) -> Element<'a, Message> {
    let cells: [Element<'a, Message>; 4] = [
        text(extract_slug(&entry.linkedin_url))
            .size(font_size::BODY)
            .style(styles::accent_text)
            .into(),
        status_badge(entry),
        text(entry.retries_label())
            .size(font_size::SMALL)
            .style(styles::muted_text)
            .into(),
        text(format_created_at(&entry.created_at, now))
            .size(font_size::SMALL)
            .style(styles::muted_text)
            .into(),
    ];

    let line = cells
        .into_iter()
        .zip(COLUMNS)
        .fold(Row::<'a, Message>::new(), |line, (cell, (_, portion))| {
            line.push(container(cell).width(Length::FillPortion(portion)))
        })
        .align_y(Alignment::Center)
        .padding([spacing::MD, spacing::XXL]);

    column![line, rule::horizontal(1)].into()
}

fn header_row<'a>() -> Element<'a, Message> {
    let line = COLUMNS
        .iter()
        .fold(Row::<'a, Message>::new(), |line, (label, portion)| {
            line.push(
                text(*label)
                    .size(font_size::BADGE)
                    .style(styles::muted_text)
                    .width(Length::FillPortion(*portion)),
            )
        })
        .padding([spacing::MD, spacing::XXL]);

    container(line)
        .width(Length::Fill)
        .style(styles::table_header)
        .into()
}

fn pagination<'a>(page: &LogsPage) -> Option<Element<'a, Message>> {
    let controls = page.controls();
    if !controls.visible {
        return None;
    }

    let prev = button(text("\u{2190} Prev").size(font_size::SMALL))
        .padding([spacing::SM, spacing::MD])
        .style(styles::outlined_button)
        .on_press_maybe(
            controls
                .prev_target()
                .map(|p| Message::Activity(ActivityMessage::PageChanged(p))),
        );
    let next = button(text("Next \u{2192}").size(font_size::SMALL))
        .padding([spacing::SM, spacing::MD])
        .style(styles::outlined_button)
        .on_press_maybe(
            controls
                .next_target()
                .map(|p| Message::Activity(ActivityMessage::PageChanged(p))),
        );

    Some(
        container(
            row![
                prev,
                text(format!(
                    "Page {} of {}",
                    controls.page, controls.total_pages
                ))
                .size(font_size::SMALL)
                .style(styles::muted_text),
                next,
            ]
            .spacing(spacing::SM)
            .align_y(Alignment::Center),
        )
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .into(),
    )
}

/// The "Enrichment Logs" card of the Activity page.
pub fn view<'a>(page: &LogsPage, refreshing: bool) -> Element<'a, Message> {
    let header = row![
        text("Enrichment Logs").size(font_size::HEADING),
        space().width(Length::Fill),
        refresh_button(refreshing, Message::Activity(ActivityMessage::Refresh)),
    ]
    .align_y(Alignment::Center)
    .padding([spacing::XL, spacing::XXL]);

    let mut card = column![header, rule::horizontal(1)];

    if page.logs.is_empty() {
        card = card.push(empty_state(
            "Use the Chrome extension on any LinkedIn profile to start enriching. \
             Your activity will appear here.",
        ));
    } else {
        let now = Local::now();
        let rows: Vec<Element<'a, Message>> =
            page.logs.iter().map(|entry| log_row(entry, &now)).collect();
        card = card
            .push(header_row())
            .push(scrollable(column(rows)).height(Length::Fill));
        if let Some(pager) = pagination(page) {
            card = card.push(rule::horizontal(1)).push(pager);
        }
    }

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::card)
        .into()
}
