pub mod message;
pub mod route;

use std::{sync::Arc, time::Duration};

use iced::{
    Alignment, Element, Length, Subscription, Task,
    widget::{Row, button, column, container, pick_list, row, rule, space, text},
};

use crate::{
    config::DashboardConfig,
    core::{
        api::{ApiError, DashboardApi, HttpApiClient},
        refresh::{self, Feed, LoadRequest, RefreshController, Snapshot},
        session::Session,
    },
    styles::{self, font_size, spacing},
    views,
};

pub use message::Message;
use message::{ActivityMessage, BillingMessage, DashboardMessage, IntegrationsMessage, LoginMessage};
use route::{Route, guard};

pub const APP_NAME: &str = "Save Kontact";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppTheme {
    #[default]
    System,
    Light,
    Dark,
}

impl AppTheme {
    pub const ALL: [AppTheme; 3] = [AppTheme::System, AppTheme::Light, AppTheme::Dark];
}

impl std::fmt::Display for AppTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppTheme::System => write!(f, "System"),
            AppTheme::Light => write!(f, "Light"),
            AppTheme::Dark => write!(f, "Dark"),
        }
    }
}

type LoadedFn = fn(u64, Result<Snapshot, ApiError>) -> Message;

pub struct App {
    config: DashboardConfig,
    selected_theme: AppTheme,
    route: Route,
    return_to: Option<Route>,
    session: Session,
    api: Arc<dyn DashboardApi>,
    dashboard: RefreshController,
    activity: RefreshController,
    billing: views::billing::BillingState,
    integrations: views::integrations::IntegrationsState,
    login: views::login::LoginState,
    poll_interval: Duration,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let config = DashboardConfig::load();
        let api = HttpApiClient::new(&config.api_base(), config.request_timeout());
        log::info!("Using account API at {}", api.base());

        let session = Session::init(
            config.session_token().as_deref(),
            config.token_command.as_deref(),
        );
        Self::boot(config, session, Arc::new(api))
    }

    fn boot(
        config: DashboardConfig,
        session: Session,
        api: Arc<dyn DashboardApi>,
    ) -> (Self, Task<Message>) {
        let startup = config.startup_route();
        let mut app = Self {
            selected_theme: config.theme(),
            poll_interval: config.poll_interval(),
            config,
            route: Route::default(),
            return_to: None,
            session,
            api,
            dashboard: RefreshController::new(Feed::Dashboard),
            activity: RefreshController::new(Feed::Activity),
            billing: Default::default(),
            integrations: Default::default(),
            login: Default::default(),
        };

        let target = guard(startup, app.session.is_signed_in());
        if target == Route::Login && startup != Route::Login {
            app.return_to = Some(startup);
        }
        app.route = target;
        let task = app.enter(target);
        (app, task)
    }

    pub fn title(&self) -> String {
        format!("{APP_NAME} - {}", self.route)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(route) => return self.navigate(route),
            Message::ThemeChanged(theme) => {
                self.selected_theme = theme;
                self.config.set_theme(theme);
                if let Err(e) = self.config.save() {
                    log::error!("Failed to save theme: {e}");
                }
            }
            Message::SignOut => {
                log::info!("Signing out");
                self.session.sign_out();
                self.return_to = None;
                return self.navigate(Route::Login);
            }
            Message::Dashboard(msg) => return self.update_dashboard(msg),
            Message::Activity(msg) => return self.update_activity(msg),
            Message::Billing(msg) => return self.update_billing(msg),
            Message::Integrations(msg) => match msg {
                IntegrationsMessage::Connect(id) => self.integrations.connect(id),
                IntegrationsMessage::DismissNotice => self.integrations.dismiss_notice(),
            },
            Message::Login(msg) => return self.update_login(msg),
        }
        Task::none()
    }

    fn navigate(&mut self, requested: Route) -> Task<Message> {
        let target = guard(requested, self.session.is_signed_in());
        if target == Route::Login && requested != Route::Login {
            log::info!("Sign-in required for {requested}");
            self.return_to = Some(requested);
        }
        if target == self.route {
            return Task::none();
        }

        self.leave(self.route);
        log::info!("Navigating to {}", target.path());
        self.route = target;
        self.enter(target)
    }

    fn leave(&mut self, route: Route) {
        match route {
            Route::Dashboard => self.dashboard.unmount(),
            Route::Activity => self.activity.unmount(),
            Route::Billing => self.billing.leave(),
            Route::Integrations => self.integrations.dismiss_notice(),
            Route::Login => {}
        }
    }

    fn enter(&mut self, route: Route) -> Task<Message> {
        match route {
            Route::Dashboard => {
                let request = self.dashboard.mount();
                self.load(request, |seq, r| {
                    Message::Dashboard(DashboardMessage::Loaded(seq, r))
                })
            }
            Route::Activity => {
                let request = self.activity.mount();
                self.load(request, |seq, r| {
                    Message::Activity(ActivityMessage::Loaded(seq, r))
                })
            }
            Route::Billing => {
                let seq = self.billing.begin_load();
                let api = self.api.clone();
                let tokens = self.session.token_provider();
                Task::perform(refresh::load_profile(api, tokens), move |r| {
                    Message::Billing(BillingMessage::Loaded(seq, r))
                })
            }
            Route::Integrations | Route::Login => Task::none(),
        }
    }

    fn load(&self, request: LoadRequest, loaded: LoadedFn) -> Task<Message> {
        let api = self.api.clone();
        let tokens = self.session.token_provider();
        let seq = request.seq;
        Task::perform(refresh::load(api, tokens, request), move |r| loaded(seq, r))
    }

    fn update_dashboard(&mut self, msg: DashboardMessage) -> Task<Message> {
        match msg {
            DashboardMessage::Refresh => {
                if let Some(request) = self.dashboard.refresh() {
                    return self.load(request, |seq, r| {
                        Message::Dashboard(DashboardMessage::Loaded(seq, r))
                    });
                }
            }
            DashboardMessage::Loaded(seq, result) => {
                self.dashboard.complete(seq, result);
            }
        }
        Task::none()
    }

    fn update_activity(&mut self, msg: ActivityMessage) -> Task<Message> {
        let request = match msg {
            ActivityMessage::Refresh => self.activity.refresh(),
            ActivityMessage::PageChanged(page) => self.activity.change_page(page),
            ActivityMessage::PollTick => self.activity.poll_tick(),
            ActivityMessage::Loaded(seq, result) => {
                self.activity.complete(seq, result);
                None
            }
        };
        match request {
            Some(request) => self.load(request, |seq, r| {
                Message::Activity(ActivityMessage::Loaded(seq, r))
            }),
            None => Task::none(),
        }
    }

    fn update_billing(&mut self, msg: BillingMessage) -> Task<Message> {
        match msg {
            BillingMessage::Loaded(seq, result) => {
                self.billing.finish_load(seq, result);
            }
            BillingMessage::Upgrade(plan_id) => self.billing.upgrade(plan_id),
            BillingMessage::DismissNotice => self.billing.dismiss_notice(),
        }
        Task::none()
    }

    fn update_login(&mut self, msg: LoginMessage) -> Task<Message> {
        match msg {
            LoginMessage::EmailChanged(email) => self.login.email = email,
            LoginMessage::TokenChanged(token) => self.login.token = token,
            LoginMessage::Submit => {
                if let Some((user, token)) = self.login.submit() {
                    log::info!("Signed in");
                    self.session.sign_in(user, &token);
                    let target = self.return_to.take().unwrap_or_default();
                    return self.navigate(target);
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = match self.route {
            Route::Login => return views::login::view(&self.login),
            Route::Dashboard => views::dashboard::view(
                &self.dashboard,
                self.session.user().and_then(|u| u.display_name()),
            ),
            Route::Activity => views::activity::view(&self.activity),
            Route::Billing => views::billing::view(&self.billing),
            Route::Integrations => views::integrations::view(&self.integrations),
        };

        column![self.top_bar(), rule::horizontal(1), content]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn top_bar(&self) -> Element<'_, Message> {
        let brand = row![
            container(text("K").size(font_size::BODY).center())
                .padding([spacing::XXS, spacing::SM])
                .style(styles::brand_mark),
            text(APP_NAME).size(font_size::HEADING),
        ]
        .spacing(spacing::SM)
        .align_y(Alignment::Center);

        let nav = Route::NAV.iter().fold(
            Row::new().spacing(spacing::XXS),
            |nav, &route| {
                let btn = button(text(route.to_string()).size(font_size::SMALL))
                    .padding([spacing::XS, spacing::MD])
                    .on_press(Message::NavigateTo(route));
                nav.push(if route == self.route {
                    btn.style(styles::nav_active_button)
                } else {
                    btn.style(styles::nav_button)
                })
            },
        );

        let account = self
            .session
            .user()
            .and_then(|u| u.display_name())
            .unwrap_or("Account");

        container(
            row![
                brand,
                space().width(spacing::XXL),
                nav,
                space().width(Length::Fill),
                text(account).size(font_size::SMALL).style(styles::muted_text),
                button(text("Sign out").size(font_size::SMALL))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::outlined_button)
                    .on_press(Message::SignOut),
                pick_list(
                    &AppTheme::ALL[..],
                    Some(self.selected_theme),
                    Message::ThemeChanged,
                )
                .text_size(font_size::SMALL),
            ]
            .spacing(spacing::MD)
            .align_y(Alignment::Center),
        )
        .padding([spacing::MD, spacing::XXL])
        .width(Length::Fill)
        .style(styles::header_container)
        .into()
    }

    /// The poll timer only exists while the Activity view holds a handle.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.activity.is_polling() {
            iced::time::every(self.poll_interval)
                .map(|_| Message::Activity(ActivityMessage::PollTick))
        } else {
            Subscription::none()
        }
    }

    pub fn theme(&self) -> Option<iced::Theme> {
        crate::theme::resolve_theme(self.selected_theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        logs::LogsPage,
        profile::Profile,
        refresh::Phase,
        session::{SessionUser, StaticTokenProvider},
    };

    struct EmptyApi;

    #[async_trait::async_trait]
    impl DashboardApi for EmptyApi {
        async fn fetch_profile(&self, _token: Option<&str>) -> crate::core::api::Result<Profile> {
            Ok(Profile::default())
        }

        async fn fetch_logs(
            &self,
            _token: Option<&str>,
            _page: u32,
            _limit: u32,
        ) -> crate::core::api::Result<LogsPage> {
            Ok(LogsPage::default())
        }
    }

    fn signed_in() -> Session {
        Session::with_provider(
            SessionUser {
                email: Some("ada@example.com".into()),
                full_name: None,
            },
            Arc::new(StaticTokenProvider::new("tok")),
        )
    }

    fn boot(session: Session, startup: &str) -> App {
        let config = DashboardConfig {
            startup_route: Some(startup.into()),
            ..Default::default()
        };
        App::boot(config, session, Arc::new(EmptyApi)).0
    }

    #[test]
    fn test_signed_out_startup_redirects_and_remembers_route() {
        let mut app = boot(Session::signed_out(), "/activity");
        assert_eq!(app.route, Route::Login);
        assert_eq!(app.return_to, Some(Route::Activity));
        assert!(!app.activity.is_mounted());

        app.login.token = "tok".into();
        let _ = app.update(Message::Login(LoginMessage::Submit));
        assert_eq!(app.route, Route::Activity);
        assert!(app.activity.is_mounted());
        assert!(app.activity.is_polling());
        assert_eq!(app.return_to, None);
    }

    #[test]
    fn test_navigation_unmounts_previous_route() {
        let mut app = boot(signed_in(), "/activity");
        assert!(app.activity.is_polling());

        let _ = app.update(Message::NavigateTo(Route::Dashboard));
        assert!(!app.activity.is_mounted());
        assert!(!app.activity.is_polling());
        assert!(app.dashboard.is_mounted());
        assert_eq!(app.dashboard.phase(), Phase::InitialLoading);
    }

    #[test]
    fn test_navigating_to_current_route_does_not_remount() {
        let mut app = boot(signed_in(), "/");
        // The boot mount issued the first request.
        let seq = 1;
        let _ = app.update(Message::NavigateTo(Route::Dashboard));

        let snapshot = Snapshot {
            profile: Profile::default(),
            logs: LogsPage::default(),
        };
        let _ = app.update(Message::Dashboard(DashboardMessage::Loaded(
            seq,
            Ok(snapshot),
        )));
        assert_eq!(app.dashboard.phase(), Phase::Ready);
    }

    #[test]
    fn test_login_route_bounces_when_signed_in() {
        let mut app = boot(signed_in(), "/login");
        assert_eq!(app.route, Route::Dashboard);
        assert_eq!(app.return_to, None);

        let _ = app.update(Message::NavigateTo(Route::Login));
        assert_eq!(app.route, Route::Dashboard);
    }

    #[test]
    fn test_sign_out_returns_to_login() {
        let mut app = boot(signed_in(), "/billing");
        assert!(app.billing.loading);

        let _ = app.update(Message::SignOut);
        assert_eq!(app.route, Route::Login);
        assert!(!app.session.is_signed_in());
        assert_eq!(app.return_to, None);
        assert!(!app.billing.loading);
    }
}
