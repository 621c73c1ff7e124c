use iced::{
    Alignment, Element, Length,
    widget::{button, column, container, text, text_input},
};

use crate::{
    app::{
        APP_NAME,
        message::{LoginMessage, Message},
    },
    core::session::SessionUser,
    styles::{self, font_size, spacing},
};

pub const MISSING_TOKEN_MESSAGE: &str = "Enter an access token to sign in.";

#[derive(Debug, Default)]
pub struct LoginState {
    pub email: String,
    pub token: String,
    pub error: Option<&'static str>,
}

impl LoginState {
    /// Validates the form. On success the form is cleared and the identity
    /// and token are handed back for the session.
    pub fn submit(&mut self) -> Option<(SessionUser, String)> {
        let token = self.token.trim();
        if token.is_empty() {
            self.error = Some(MISSING_TOKEN_MESSAGE);
            return None;
        }

        let email = self.email.trim();
        let user = SessionUser {
            email: (!email.is_empty()).then(|| email.to_string()),
            full_name: None,
        };
        let token = token.to_string();
        *self = Self::default();
        Some((user, token))
    }
}

pub fn view(state: &LoginState) -> Element<'_, Message> {
    let email = text_input("you@company.com", &state.email)
        .on_input(|v| Message::Login(LoginMessage::EmailChanged(v)))
        .on_submit(Message::Login(LoginMessage::Submit))
        .padding(spacing::MD)
        .size(font_size::BODY);

    let token = text_input("Access token", &state.token)
        .on_input(|v| Message::Login(LoginMessage::TokenChanged(v)))
        .on_submit(Message::Login(LoginMessage::Submit))
        .secure(true)
        .padding(spacing::MD)
        .size(font_size::BODY);

    let mut form = column![
        text(format!("Sign in to {APP_NAME}")).size(font_size::TITLE),
        text("Paste the access token from your account to continue.")
            .size(font_size::SMALL)
            .style(styles::muted_text),
        column![text("Email").size(font_size::SMALL), email].spacing(spacing::XXS),
        column![text("Access token").size(font_size::SMALL), token].spacing(spacing::XXS),
    ]
    .spacing(spacing::LG);

    if let Some(err) = state.error {
        form = form.push(super::error_banner(err));
    }

    form = form.push(
        button(text("Sign in").size(font_size::BODY).center())
            .width(Length::Fill)
            .padding([spacing::SM, spacing::LG])
            .style(button::primary)
            .on_press(Message::Login(LoginMessage::Submit)),
    );

    container(
        container(form.align_x(Alignment::Start).max_width(400.0))
            .padding(spacing::XXXL)
            .style(styles::card),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
