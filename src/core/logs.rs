use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for LogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogId::Number(n) => write!(f, "{n}"),
            LogId::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Pending,
    Retrying,
    Success,
    Failed,
    #[serde(other)]
    Unknown,
}

impl LogStatus {
    /// Still being worked on by the enrichment pipeline.
    pub fn is_in_flight(self) -> bool {
        matches!(self, LogStatus::Pending | LogStatus::Retrying)
    }
}

impl std::fmt::Display for LogStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogStatus::Pending => write!(f, "Pending"),
            LogStatus::Retrying => write!(f, "Retrying"),
            LogStatus::Success => write!(f, "Success"),
            LogStatus::Failed => write!(f, "Failed"),
            LogStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogId,
    pub linkedin_url: String,
    pub status: LogStatus,
    #[serde(default)]
    pub retry_count: u32,
    pub created_at: String,
}

impl LogEntry {
    pub fn retries_label(&self) -> String {
        if self.retry_count > 0 {
            format!("{}x", self.retry_count)
        } else {
            "\u{2014}".to_string()
        }
    }
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsPage {
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub total_pages: u32,
}

impl Default for LogsPage {
    fn default() -> Self {
        Self {
            logs: Vec::new(),
            page: 1,
            total: 0,
            total_pages: 1,
        }
    }
}

/// Enabled state of the pager, derived from a page of logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub page: u32,
    pub total_pages: u32,
    pub can_prev: bool,
    pub can_next: bool,
    pub visible: bool,
}

impl PageControls {
    pub fn prev_target(&self) -> Option<u32> {
        self.can_prev.then(|| self.page - 1)
    }

    pub fn next_target(&self) -> Option<u32> {
        self.can_next.then(|| self.page + 1)
    }
}

impl LogsPage {
    pub fn controls(&self) -> PageControls {
        PageControls {
            page: self.page,
            total_pages: self.total_pages,
            can_prev: self.page > 1,
            can_next: self.page < self.total_pages,
            visible: self.total_pages > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u32, total_pages: u32) -> LogsPage {
        LogsPage {
            page,
            total_pages,
            ..Default::default()
        }
    }

    #[test]
    fn test_controls_at_first_page() {
        let c = page(1, 3).controls();
        assert!(!c.can_prev);
        assert!(c.can_next);
        assert_eq!(c.prev_target(), None);
        assert_eq!(c.next_target(), Some(2));
    }

    #[test]
    fn test_controls_at_last_page() {
        let c = page(3, 3).controls();
        assert!(c.can_prev);
        assert!(!c.can_next);
        assert_eq!(c.prev_target(), Some(2));
        assert_eq!(c.next_target(), None);
    }

    #[test]
    fn test_controls_hidden_for_single_page() {
        let c = page(1, 1).controls();
        assert!(!c.visible);
        assert!(!c.can_prev);
        assert!(!c.can_next);
    }

    #[test]
    fn test_controls_targets_stay_in_range() {
        for total in 1..6 {
            for current in 1..=total {
                let c = page(current, total).controls();
                for target in [c.prev_target(), c.next_target()].into_iter().flatten() {
                    assert!((1..=total).contains(&target));
                }
            }
        }
    }

    #[test]
    fn test_page_deserializes_from_api_body() {
        let body = r#"{
            "logs": [
                {"id": 7, "linkedin_url": "https://www.linkedin.com/in/jane-doe/", "status": "retrying", "retry_count": 2, "created_at": "2026-10-14T09:00:00Z"},
                {"id": "b3", "linkedin_url": "https://www.linkedin.com/in/john/", "status": "queued", "created_at": "2026-10-14T08:00:00Z"}
            ],
            "page": 1,
            "total": 2,
            "total_pages": 1
        }"#;
        let page: LogsPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.logs.len(), 2);
        assert_eq!(page.logs[0].id, LogId::Number(7));
        assert!(page.logs[0].status.is_in_flight());
        assert_eq!(page.logs[0].retries_label(), "2x");
        assert_eq!(page.logs[1].id, LogId::Text("b3".into()));
        assert_eq!(page.logs[1].status, LogStatus::Unknown);
        assert_eq!(page.logs[1].retries_label(), "\u{2014}");
    }
}
