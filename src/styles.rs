use iced::{
    Background, Border, Color, Shadow, Theme, Vector,
    border::Radius,
    widget::{button, container, progress_bar},
};

use crate::core::{logs::LogStatus, profile::UsageLevel};

pub mod font_size {
    pub const DISPLAY: f32 = 28.0;
    pub const TITLE: f32 = 24.0;
    pub const HEADING: f32 = 17.0;
    pub const BODY: f32 = 14.0;
    pub const SMALL: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
    pub const BADGE: f32 = 11.0;
}

pub mod spacing {
    pub const XXXS: f32 = 2.0;
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 6.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 20.0;
    pub const XXL: f32 = 24.0;
    pub const XXXL: f32 = 32.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const LG: f32 = 8.0;
    pub const XL: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

fn radius_top(r: f32) -> Radius {
    Radius {
        top_left: r,
        top_right: r,
        bottom_right: 0.0,
        bottom_left: 0.0,
    }
}

fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().background.base.color.r < 0.5
}

pub fn muted_text(theme: &Theme) -> iced::widget::text::Style {
    let palette = theme.extended_palette();
    iced::widget::text::Style {
        color: Some(palette.background.strong.text.scale_alpha(0.7)),
    }
}

pub fn accent_text(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(theme.extended_palette().primary.base.color),
    }
}

pub fn loading_screen(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        text_color: Some(palette.primary.base.color),
        background: Some(palette.background.base.color.into()),
        ..Default::default()
    }
}

// --- Top Bar ---

pub fn header_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

pub fn brand_mark(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.primary.base.color.into()),
        text_color: Some(palette.primary.base.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn nav_active_button(theme: &Theme, _status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    button::Style {
        background: Some(palette.primary.weak.color.scale_alpha(0.35).into()),
        text_color: palette.primary.base.color,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn nav_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = if is_dark(theme) {
        Color::from_rgb(0.75, 0.75, 0.78)
    } else {
        Color::from_rgb(0.42, 0.45, 0.5)
    };
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.background.weak.color.into())
        }
        _ => None,
    };
    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// --- Cards ---

pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            radius: radius::XL.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        shadow: Shadow {
            color: Color {
                a: 0.06,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 1.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    }
}

pub fn highlighted_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        border: Border {
            radius: radius::XL.into(),
            width: 1.5,
            color: palette.primary.base.color.scale_alpha(0.4),
        },
        ..card(theme)
    }
}

pub fn dimmed_card(theme: &Theme) -> container::Style {
    let base = card(theme);
    container::Style {
        text_color: Some(theme.extended_palette().background.strong.text.scale_alpha(0.6)),
        ..base
    }
}

pub fn card_accent_top(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.primary.base.color.into()),
        border: Border {
            radius: radius_top(radius::XL),
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn icon_tile(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.primary.weak.color.scale_alpha(0.2).into()),
        border: Border {
            radius: radius::XL.into(),
            width: 1.0,
            color: palette.primary.weak.color.scale_alpha(0.5),
        },
        ..Default::default()
    }
}

pub fn table_header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

// --- Badges ---

fn pill(background: Color, border: Color, text: Color) -> container::Style {
    container::Style {
        background: Some(background.into()),
        border: Border {
            radius: radius::FULL.into(),
            width: 1.0,
            color: border,
        },
        text_color: Some(text),
        ..Default::default()
    }
}

pub fn badge_success(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    pill(
        palette.success.weak.color,
        palette.success.base.color,
        palette.success.strong.color,
    )
}

pub fn badge_primary(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    pill(
        palette.primary.weak.color,
        palette.primary.base.color,
        palette.primary.strong.color,
    )
}

pub fn badge_danger(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    pill(
        palette.danger.weak.color,
        palette.danger.base.color,
        palette.danger.strong.color,
    )
}

pub fn badge_neutral(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    pill(
        palette.background.weak.color,
        palette.background.strong.color,
        palette.background.base.text,
    )
}

pub fn badge_warning(theme: &Theme) -> container::Style {
    if is_dark(theme) {
        pill(
            Color::from_rgb(0.5, 0.38, 0.05),
            Color::from_rgb(0.75, 0.58, 0.12),
            Color::from_rgb(1.0, 0.92, 0.65),
        )
    } else {
        pill(
            Color::from_rgb(1.0, 0.96, 0.88),
            Color::from_rgb(0.82, 0.65, 0.15),
            Color::from_rgb(0.52, 0.38, 0.02),
        )
    }
}

pub fn status_badge(status: LogStatus) -> fn(&Theme) -> container::Style {
    match status {
        LogStatus::Success => badge_success,
        LogStatus::Pending => badge_primary,
        LogStatus::Retrying => badge_warning,
        LogStatus::Failed => badge_danger,
        LogStatus::Unknown => badge_neutral,
    }
}

// --- Banners ---

pub fn error_banner(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.danger.weak.color.scale_alpha(0.25).into()),
        text_color: Some(palette.danger.base.color),
        border: Border {
            width: 1.0,
            color: palette.danger.weak.color,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

pub fn notice_banner(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.primary.weak.color.scale_alpha(0.25).into()),
        text_color: Some(palette.primary.strong.color),
        border: Border {
            width: 1.0,
            color: palette.primary.weak.color,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

// --- Usage bar ---

pub fn usage_bar(theme: &Theme, level: UsageLevel) -> progress_bar::Style {
    let palette = theme.extended_palette();
    let bar = match level {
        UsageLevel::Normal => palette.primary.base.color,
        UsageLevel::Warning => Color::from_rgb(0.96, 0.62, 0.04),
        UsageLevel::Exhausted => palette.danger.base.color,
    };
    progress_bar::Style {
        background: Background::Color(palette.background.weak.color),
        bar: Background::Color(bar),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
    }
}

// --- Buttons ---

pub fn outlined_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let border = Border {
        radius: radius::LG.into(),
        width: 1.0,
        color: palette.primary.base.color.scale_alpha(0.4),
    };
    match status {
        button::Status::Hovered => button::Style {
            background: Some(palette.primary.weak.color.scale_alpha(0.35).into()),
            text_color: palette.primary.strong.color,
            border,
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.weak.color.into()),
            text_color: palette.primary.strong.color,
            border,
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.primary.base.color.scale_alpha(0.4),
            border: Border {
                color: palette.background.strong.color,
                ..border
            },
            ..Default::default()
        },
        button::Status::Active => button::Style {
            background: Some(palette.primary.weak.color.scale_alpha(0.15).into()),
            text_color: palette.primary.base.color,
            border,
            ..Default::default()
        },
    }
}

/// Text-only button used for in-card links such as "View all".
pub fn link_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        _ => palette.primary.base.color,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}
