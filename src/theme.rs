use iced::Theme;

use crate::app::AppTheme;

/// `None` defers to the desktop's light/dark preference.
pub fn resolve_theme(theme: AppTheme) -> Option<Theme> {
    match theme {
        AppTheme::System => None,
        AppTheme::Light => Some(Theme::Light),
        AppTheme::Dark => Some(Theme::Dark),
    }
}
