use crate::core::{api::ApiError, profile::Profile, refresh::Snapshot};

use super::{AppTheme, route::Route};

#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(Route),
    ThemeChanged(AppTheme),
    SignOut,

    Dashboard(DashboardMessage),
    Activity(ActivityMessage),
    Billing(BillingMessage),
    Integrations(IntegrationsMessage),
    Login(LoginMessage),
}

#[derive(Debug, Clone)]
pub enum DashboardMessage {
    Refresh,
    Loaded(u64, Result<Snapshot, ApiError>),
}

#[derive(Debug, Clone)]
pub enum ActivityMessage {
    Refresh,
    PageChanged(u32),
    PollTick,
    Loaded(u64, Result<Snapshot, ApiError>),
}

#[derive(Debug, Clone)]
pub enum BillingMessage {
    Loaded(u64, Result<Profile, ApiError>),
    Upgrade(&'static str),
    DismissNotice,
}

#[derive(Debug, Clone)]
pub enum IntegrationsMessage {
    Connect(&'static str),
    DismissNotice,
}

#[derive(Debug, Clone)]
pub enum LoginMessage {
    EmailChanged(String),
    TokenChanged(String),
    Submit,
}
