use std::time::Duration;

use serde::de::DeserializeOwned;

use super::{logs::LogsPage, profile::Profile, session::SessionError};

pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Profile,
    Logs,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Profile => write!(f, "profile"),
            Endpoint::Logs => write!(f, "logs"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to acquire token: {0}")]
    Token(#[from] SessionError),
    #[error("Failed to fetch {endpoint}: HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },
    #[error("Failed to fetch {endpoint}: {message}")]
    Transport { endpoint: Endpoint, message: String },
    #[error("Failed to decode {endpoint}: {message}")]
    Decode { endpoint: Endpoint, message: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    async fn fetch_profile(&self, token: Option<&str>) -> Result<Profile>;

    async fn fetch_logs(&self, token: Option<&str>, page: u32, limit: u32) -> Result<LogsPage>;
}

/// Read-only client for the account endpoints. Every call is a fresh request.
#[derive(Clone)]
pub struct HttpApiClient {
    agent: ureq::Agent,
    base: String,
}

impl HttpApiClient {
    pub fn new(base: &str, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            agent,
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn profile_url(&self) -> String {
        format!("{}/me", self.base)
    }

    fn logs_url(&self, page: u32, limit: u32) -> String {
        format!("{}/logs?page={page}&limit={limit}", self.base)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: &str,
        token: Option<&str>,
    ) -> Result<T> {
        let mut request = self.agent.get(url);
        if let Some(token) = token {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }

        let resp = request.call().map_err(|e| match e {
            ureq::Error::StatusCode(status) => ApiError::Status { endpoint, status },
            other => ApiError::Transport {
                endpoint,
                message: other.to_string(),
            },
        })?;

        let body = resp
            .into_body()
            .read_to_string()
            .map_err(|e| ApiError::Transport {
                endpoint,
                message: e.to_string(),
            })?;

        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            endpoint,
            message: e.to_string(),
        })
    }

    async fn get_json_blocking<T>(
        &self,
        endpoint: Endpoint,
        url: String,
        token: Option<&str>,
    ) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.clone();
        let token = token.map(str::to_string);
        tokio::task::spawn_blocking(move || client.get_json(endpoint, &url, token.as_deref()))
            .await
            .map_err(|e| ApiError::Transport {
                endpoint,
                message: e.to_string(),
            })?
    }
}

#[async_trait::async_trait]
impl DashboardApi for HttpApiClient {
    async fn fetch_profile(&self, token: Option<&str>) -> Result<Profile> {
        self.get_json_blocking(Endpoint::Profile, self.profile_url(), token)
            .await
    }

    async fn fetch_logs(&self, token: Option<&str>, page: u32, limit: u32) -> Result<LogsPage> {
        self.get_json_blocking(Endpoint::Logs, self.logs_url(page, limit), token)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{BufRead, BufReader, Write},
        net::TcpListener,
        sync::mpsc,
        thread,
    };

    use super::*;

    /// Serves one canned response and hands back the raw request head.
    fn one_shot_server(status_line: &str, body: &str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            tx.send(head).unwrap();
        });
        (format!("http://{addr}/api"), rx)
    }

    fn client(base: &str) -> HttpApiClient {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(5)))
            .proxy(None)
            .build()
            .into();
        HttpApiClient {
            agent,
            base: base.trim_end_matches('/').to_string(),
        }
    }

    #[test]
    fn test_urls_are_built_from_base() {
        let c = HttpApiClient::new("https://app.example.com/api/", Duration::from_secs(5));
        assert_eq!(c.profile_url(), "https://app.example.com/api/me");
        assert_eq!(
            c.logs_url(3, 20),
            "https://app.example.com/api/logs?page=3&limit=20"
        );
    }

    #[test]
    fn test_profile_sends_bearer_token() {
        let (base, rx) = one_shot_server(
            "200 OK",
            r#"{"name":"Jane","plan":"pro","enrichments_used":5,"enrichment_limit":400,"enrichments_remaining":395}"#,
        );
        let c = client(&base);
        let profile: Profile = c
            .get_json(Endpoint::Profile, &c.profile_url(), Some("tok-123"))
            .unwrap();
        assert_eq!(profile.name.as_deref(), Some("Jane"));

        let head = rx.recv().unwrap().to_ascii_lowercase();
        assert!(head.starts_with("get /api/me "));
        assert!(head.contains("authorization: bearer tok-123"));
    }

    #[test]
    fn test_missing_token_sends_no_auth_header() {
        let (base, rx) = one_shot_server("200 OK", r#"{"logs":[],"page":2,"total":25,"total_pages":2}"#);
        let c = client(&base);
        let page: LogsPage = c.get_json(Endpoint::Logs, &c.logs_url(2, 20), None).unwrap();
        assert_eq!(page.page, 2);

        let head = rx.recv().unwrap().to_ascii_lowercase();
        assert!(head.starts_with("get /api/logs?page=2&limit=20 "));
        assert!(!head.contains("authorization:"));
    }

    #[test]
    fn test_non_success_status_is_an_error() {
        let (base, _rx) = one_shot_server("401 Unauthorized", "{}");
        let c = client(&base);
        let err = c
            .get_json::<Profile>(Endpoint::Profile, &c.profile_url(), None)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                endpoint: Endpoint::Profile,
                status: 401
            }
        );
    }

    #[test]
    fn test_bad_body_is_a_decode_error() {
        let (base, _rx) = one_shot_server("200 OK", "<html>");
        let c = client(&base);
        let err = c
            .get_json::<LogsPage>(Endpoint::Logs, &c.logs_url(1, 5), None)
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { endpoint: Endpoint::Logs, .. }));
    }

    #[tokio::test]
    async fn test_async_fetch_runs_on_blocking_pool() {
        let (base, _rx) = one_shot_server("500 Internal Server Error", "");
        let err = client(&base).fetch_logs(None, 1, 5).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                endpoint: Endpoint::Logs,
                status: 500
            }
        );
    }
}
