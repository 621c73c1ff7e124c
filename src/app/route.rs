#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Route {
    Login,
    #[default]
    Dashboard,
    Activity,
    Integrations,
    Billing,
}

impl Route {
    /// Links shown in the top bar, in order.
    pub const NAV: [Route; 4] = [
        Route::Dashboard,
        Route::Activity,
        Route::Integrations,
        Route::Billing,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Activity => "/activity",
            Route::Integrations => "/integrations",
            Route::Billing => "/billing",
        }
    }

    /// Unknown paths land on the dashboard.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "/login" => Route::Login,
            "/activity" => Route::Activity,
            "/integrations" => Route::Integrations,
            "/billing" => Route::Billing,
            _ => Route::Dashboard,
        }
    }

    pub fn requires_auth(self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Login => write!(f, "Sign in"),
            Route::Dashboard => write!(f, "Dashboard"),
            Route::Activity => write!(f, "Activity"),
            Route::Integrations => write!(f, "Integrations"),
            Route::Billing => write!(f, "Billing"),
        }
    }
}

pub fn guard(requested: Route, signed_in: bool) -> Route {
    match (requested, signed_in) {
        (route, false) if route.requires_auth() => Route::Login,
        (Route::Login, true) => Route::Dashboard,
        (route, _) => route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Route; 5] = [
        Route::Login,
        Route::Dashboard,
        Route::Activity,
        Route::Integrations,
        Route::Billing,
    ];

    #[test]
    fn test_paths_resolve_back_to_route() {
        for route in ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::from_path("/activity/"), Route::Activity);
    }

    #[test]
    fn test_unknown_path_is_dashboard() {
        assert_eq!(Route::from_path("/settings"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
    }

    #[test]
    fn test_signed_out_goes_to_login() {
        for route in ALL {
            assert_eq!(guard(route, false), Route::Login);
        }
    }

    #[test]
    fn test_signed_in_never_sees_login() {
        assert_eq!(guard(Route::Login, true), Route::Dashboard);
        for route in Route::NAV {
            assert_eq!(guard(route, true), route);
        }
    }
}
