use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Not signed in")]
    SignedOut,
    #[error("Token command failed: {0}")]
    Command(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Source of bearer tokens. Called once per load; implementations own any
/// caching or renewal.
#[async_trait::async_trait]
pub trait TokenProvider: Send + Sync {
    async fn bearer_token(&self) -> Result<Option<String>>;
}

pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.trim().is_empty()).then(|| token.trim().to_string()),
        }
    }
}

#[async_trait::async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }
}

/// Runs a shell command for every token request and uses its stdout.
pub struct CommandTokenProvider {
    command: String,
}

impl CommandTokenProvider {
    pub fn new(command: &str) -> Self {
        Self {
            command: shellexpand::tilde(command).into_owned(),
        }
    }
}

#[async_trait::async_trait]
impl TokenProvider for CommandTokenProvider {
    async fn bearer_token(&self) -> Result<Option<String>> {
        let output = tokio::process::Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .output()
            .await
            .map_err(|e| SessionError::Command(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SessionError::Command(format!(
                "exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!token.is_empty()).then_some(token))
    }
}

struct SignedOutProvider;

#[async_trait::async_trait]
impl TokenProvider for SignedOutProvider {
    async fn bearer_token(&self) -> Result<Option<String>> {
        Err(SessionError::SignedOut)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUser {
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl SessionUser {
    pub fn display_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .or(self.email.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// Signed-in identity for the whole app. Created at startup, replaced on
/// sign-in and torn down on sign-out.
pub struct Session {
    user: Option<SessionUser>,
    provider: Arc<dyn TokenProvider>,
}

impl Session {
    pub fn signed_out() -> Self {
        Self {
            user: None,
            provider: Arc::new(SignedOutProvider),
        }
    }

    pub fn with_provider(user: SessionUser, provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            user: Some(user),
            provider,
        }
    }

    pub fn init(token: Option<&str>, token_command: Option<&str>) -> Self {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            log::info!("Using configured session token");
            return Self::with_provider(
                SessionUser::default(),
                Arc::new(StaticTokenProvider::new(token)),
            );
        }
        if let Some(command) = token_command.filter(|c| !c.trim().is_empty()) {
            log::info!("Using token command for session");
            return Self::with_provider(
                SessionUser::default(),
                Arc::new(CommandTokenProvider::new(command)),
            );
        }
        Self::signed_out()
    }

    pub fn sign_in(&mut self, user: SessionUser, token: &str) {
        self.user = Some(user);
        self.provider = Arc::new(StaticTokenProvider::new(token));
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.provider = Arc::new(SignedOutProvider);
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn token_provider(&self) -> Arc<dyn TokenProvider> {
        self.provider.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_trims_and_drops_empty() {
        let p = StaticTokenProvider::new("  abc  ");
        assert_eq!(p.bearer_token().await, Ok(Some("abc".into())));
        let p = StaticTokenProvider::new("   ");
        assert_eq!(p.bearer_token().await, Ok(None));
    }

    #[tokio::test]
    async fn test_sign_out_tears_down_provider() {
        let mut session = Session::signed_out();
        assert!(!session.is_signed_in());

        session.sign_in(
            SessionUser {
                email: Some("jane@example.com".into()),
                full_name: None,
            },
            "tok",
        );
        assert!(session.is_signed_in());
        assert_eq!(
            session.user().and_then(|u| u.display_name()),
            Some("jane@example.com")
        );
        assert_eq!(
            session.token_provider().bearer_token().await,
            Ok(Some("tok".into()))
        );

        session.sign_out();
        assert!(!session.is_signed_in());
        assert_eq!(
            session.token_provider().bearer_token().await,
            Err(SessionError::SignedOut)
        );
    }

    #[test]
    fn test_init_prefers_static_token() {
        assert!(Session::init(Some("t"), Some("echo x")).is_signed_in());
        assert!(Session::init(None, Some("echo x")).is_signed_in());
        assert!(!Session::init(Some(" "), None).is_signed_in());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_provider_reads_stdout() {
        let p = CommandTokenProvider::new("printf ' secret\\n'");
        assert_eq!(p.bearer_token().await, Ok(Some("secret".into())));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_provider_reports_failure() {
        let p = CommandTokenProvider::new("echo denied >&2; exit 3");
        match p.bearer_token().await {
            Err(SessionError::Command(msg)) => assert!(msg.contains("denied")),
            other => panic!("expected command error, got {other:?}"),
        }
    }
}
