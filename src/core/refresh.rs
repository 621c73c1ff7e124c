//! Load, refresh, poll and pagination state for the views that show a
//! profile together with a page of enrichment logs.
//!
//! The controller never performs I/O itself. Every operation that needs data
//! returns a [`LoadRequest`]; the caller runs [`load`] and feeds the outcome
//! back through [`RefreshController::complete`]. Each request carries a
//! sequence number and only the most recently issued one may write state, so
//! an older response that resolves late is dropped instead of overwriting
//! newer data.

use std::{sync::Arc, time::Duration};

use super::{
    api::{ApiError, DashboardApi},
    logs::LogsPage,
    profile::Profile,
    session::TokenProvider,
};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please try again.";

pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// Recent activity preview: first page only, no polling.
    Dashboard,
    /// Full log history with pagination and background polling.
    Activity,
}

impl Feed {
    pub fn page_size(self) -> u32 {
        match self {
            Feed::Dashboard => 5,
            Feed::Activity => 20,
        }
    }

    pub fn paginates(self) -> bool {
        matches!(self, Feed::Activity)
    }

    pub fn polls(self) -> bool {
        matches!(self, Feed::Activity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    InitialLoading,
    Ready,
    Refreshing,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Mount,
    Manual,
    PageChange,
    Poll,
}

impl Trigger {
    fn is_user_initiated(self) -> bool {
        matches!(self, Trigger::Manual | Trigger::PageChange)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub seq: u64,
    pub page: u32,
    pub limit: u32,
    pub trigger: Trigger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub profile: Profile,
    pub logs: LogsPage,
}

/// Armed poll timer for one mount of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Updated,
    Failed,
    Stale,
    Unmounted,
}

#[derive(Debug)]
pub struct RefreshController {
    feed: Feed,
    phase: Phase,
    current_page: u32,
    snapshot: Option<Snapshot>,
    error: Option<&'static str>,
    last_issued: u64,
    last_trigger: Option<Trigger>,
    mounted: bool,
    generation: u64,
    poll: Option<PollHandle>,
}

impl RefreshController {
    pub fn new(feed: Feed) -> Self {
        Self {
            feed,
            phase: Phase::Idle,
            current_page: 1,
            snapshot: None,
            error: None,
            last_issued: 0,
            last_trigger: None,
            mounted: false,
            generation: 0,
            poll: None,
        }
    }

    pub fn mount(&mut self) -> LoadRequest {
        self.mounted = true;
        self.generation += 1;
        self.phase = Phase::InitialLoading;
        self.current_page = 1;
        self.snapshot = None;
        self.error = None;
        self.poll = self.feed.polls().then_some(PollHandle(self.generation));
        self.issue(Trigger::Mount, 1)
    }

    /// Tears the view down. Responses still in flight are ignored once they
    /// arrive.
    pub fn unmount(&mut self) {
        self.stop_polling();
        self.mounted = false;
        self.phase = Phase::Idle;
        self.snapshot = None;
        self.error = None;
        self.last_trigger = None;
    }

    /// Disarms the poll timer. Returns whether a timer was armed.
    pub fn stop_polling(&mut self) -> bool {
        self.poll.take().is_some()
    }

    pub fn poll_handle(&self) -> Option<PollHandle> {
        self.poll
    }

    pub fn is_polling(&self) -> bool {
        self.poll.is_some()
    }

    pub fn refresh(&mut self) -> Option<LoadRequest> {
        if !self.can_reload() {
            return None;
        }
        self.phase = Phase::Refreshing;
        Some(self.issue(Trigger::Manual, self.current_page))
    }

    pub fn change_page(&mut self, page: u32) -> Option<LoadRequest> {
        if !self.feed.paginates() || !self.can_reload() {
            return None;
        }
        let target = page.clamp(1, self.total_pages());
        self.phase = Phase::Refreshing;
        Some(self.issue(Trigger::PageChange, target))
    }

    /// Timer path. Reads the page at fire time so a page change made after
    /// the timer was armed is honoured. A tick is skipped while a refresh or
    /// page change the user asked for is still in flight.
    pub fn poll_tick(&mut self) -> Option<LoadRequest> {
        if self.poll.is_none() || !self.can_reload() {
            return None;
        }
        if self.last_trigger.is_some_and(Trigger::is_user_initiated) {
            log::debug!("Skipping {:?} poll, user load in flight", self.feed);
            return None;
        }
        self.phase = Phase::Refreshing;
        Some(self.issue(Trigger::Poll, self.current_page))
    }

    pub fn complete(&mut self, seq: u64, result: Result<Snapshot, ApiError>) -> Applied {
        if !self.mounted {
            log::debug!("Dropping {:?} response #{seq} after unmount", self.feed);
            return Applied::Unmounted;
        }
        if seq != self.last_issued {
            log::debug!(
                "Dropping stale {:?} response #{seq}, latest is #{}",
                self.feed,
                self.last_issued
            );
            return Applied::Stale;
        }

        self.last_trigger = None;
        match result {
            Ok(snapshot) => {
                self.current_page = snapshot.logs.page.max(1);
                self.snapshot = Some(snapshot);
                self.error = None;
                self.phase = Phase::Ready;
                Applied::Updated
            }
            Err(e) => {
                log::error!("Failed to load {:?} data: {e}", self.feed);
                self.error = Some(LOAD_FAILED_MESSAGE);
                self.phase = Phase::Error;
                Applied::Failed
            }
        }
    }

    fn can_reload(&self) -> bool {
        self.mounted
            && matches!(self.phase, Phase::Ready | Phase::Error | Phase::Refreshing)
    }

    /// `current_page` only moves when a response lands, so a failed page
    /// change leaves refresh and poll on the page still on screen.
    fn issue(&mut self, trigger: Trigger, page: u32) -> LoadRequest {
        self.last_issued += 1;
        self.last_trigger = Some(trigger);
        let request = LoadRequest {
            seq: self.last_issued,
            page,
            limit: self.feed.page_size(),
            trigger,
        };
        log::debug!("Issuing {:?} load {request:?}", self.feed);
        request
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn is_initial_loading(&self) -> bool {
        self.phase == Phase::InitialLoading
    }

    /// Whether the refresh affordance should spin. Background polls stay
    /// silent.
    pub fn is_refreshing(&self) -> bool {
        self.phase == Phase::Refreshing
            && self.last_trigger.is_some_and(Trigger::is_user_initiated)
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.snapshot.as_ref().map(|s| &s.profile)
    }

    pub fn logs(&self) -> Option<&LogsPage> {
        self.snapshot.as_ref().map(|s| &s.logs)
    }

    pub fn total_pages(&self) -> u32 {
        self.logs().map_or(1, |l| l.total_pages.max(1))
    }
}

/// Fetches a fresh token, then profile and logs concurrently. Either fetch
/// failing fails the whole load.
pub async fn load(
    api: Arc<dyn DashboardApi>,
    tokens: Arc<dyn TokenProvider>,
    request: LoadRequest,
) -> Result<Snapshot, ApiError> {
    let token = tokens.bearer_token().await?.filter(|t| !t.is_empty());
    let token = token.as_deref();

    let (profile, logs) = tokio::try_join!(
        api.fetch_profile(token),
        api.fetch_logs(token, request.page, request.limit),
    )?;

    Ok(Snapshot { profile, logs })
}

pub async fn load_profile(
    api: Arc<dyn DashboardApi>,
    tokens: Arc<dyn TokenProvider>,
) -> Result<Profile, ApiError> {
    let token = tokens.bearer_token().await?.filter(|t| !t.is_empty());
    api.fetch_profile(token.as_deref()).await
}
