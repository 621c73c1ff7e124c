use iced::{Element, Length, widget::column};

use super::{error_banner, loading_screen, logs_table, page, page_header};
use crate::{
    app::message::Message,
    core::{logs::LogsPage, refresh::RefreshController},
    styles::spacing,
};

pub fn view(controller: &RefreshController) -> Element<'_, Message> {
    if controller.is_initial_loading() {
        return loading_screen("Loading activity...");
    }

    let mut content = column![page_header(
        "Activity \u{1f4cb}".to_string(),
        "All your enrichment history in one place",
    )]
    .spacing(spacing::XXL)
    .height(Length::Fill);

    if let Some(err) = controller.error() {
        content = content.push(error_banner(err));
    }

    let empty = LogsPage::default();
    let logs = controller.logs().unwrap_or(&empty);
    content = content.push(logs_table::view(logs, controller.is_refreshing()));

    page(content)
}
