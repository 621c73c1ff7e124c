use iced::{
    Alignment, Element, Length,
    widget::{button, column, container, row, scrollable, space, text},
};

use super::{notice_banner, page, page_header};
use crate::{
    app::message::{IntegrationsMessage, Message},
    core::catalog::{self, INTEGRATIONS, Integration},
    styles::{self, font_size, spacing},
};

#[derive(Debug, Default)]
pub struct IntegrationsState {
    pub notice: Option<String>,
}

impl IntegrationsState {
    pub fn connect(&mut self, id: &str) {
        let Some(integration) = catalog::find_integration(id) else {
            log::warn!("Unknown integration: {id}");
            return;
        };
        if let Some(pending) = catalog::request_connect(integration) {
            self.notice = Some(pending.message);
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

fn integration_card(integration: &'static Integration) -> Element<'static, Message> {
    let action = if integration.available {
        button(text("Connect").size(font_size::SMALL).center())
            .padding([spacing::SM, spacing::XL])
            .style(button::primary)
            .on_press(Message::Integrations(IntegrationsMessage::Connect(
                integration.id,
            )))
    } else {
        button(text("Coming Soon").size(font_size::SMALL).center())
            .padding([spacing::SM, spacing::XL])
            .style(styles::outlined_button)
    };

    let header = row![
        container(text(integration.icon).size(font_size::TITLE))
            .padding(spacing::MD)
            .style(styles::icon_tile),
        column![
            text(integration.name).size(font_size::HEADING),
            text(integration.description)
                .size(font_size::SMALL)
                .style(styles::muted_text),
        ]
        .spacing(spacing::XXS)
        .width(Length::Fill),
    ]
    .spacing(spacing::LG)
    .align_y(Alignment::Center);

    let card = container(
        row![header, space().width(spacing::LG), action].align_y(Alignment::Center),
    )
    .padding(spacing::XXL)
    .width(Length::Fill);

    if integration.available {
        card.style(styles::card).into()
    } else {
        card.style(styles::dimmed_card).into()
    }
}

pub fn view(state: &IntegrationsState) -> Element<'_, Message> {
    let mut content = column![page_header(
        "Integrations \u{1f50c}".to_string(),
        "Connect Save Kontact to the tools you already use",
    )]
    .spacing(spacing::XXL);

    if let Some(notice) = &state.notice {
        content = content.push(notice_banner(
            notice,
            Message::Integrations(IntegrationsMessage::DismissNotice),
        ));
    }

    let cards: Vec<Element<'_, Message>> = INTEGRATIONS.iter().map(integration_card).collect();
    content = content.push(column(cards).spacing(spacing::LG));

    page(scrollable(content))
}
