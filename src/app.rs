//! View fetch state
//!
//! Every page owns one [`RequestTracker`]: a finite [`FetchState`] plus the
//! token of the latest fetch it issued. Only the latest fetch may change the
//! state, so a slow response for an old query cannot overwrite a newer one.

// =============================================================================
// Fetch State
// =============================================================================

/// Lifecycle of one view's data
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// Latest fetch succeeded
    Loaded(T),
    /// Latest fetch failed, with the message to show
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

// =============================================================================
// Request Tokens
// =============================================================================

/// Identifies one issued fetch; later fetches carry larger tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Fetch state guarded by request tokens
#[derive(Debug, Clone)]
pub struct RequestTracker<T> {
    state: FetchState<T>,
    latest: u64,
}

impl<T> Default for RequestTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestTracker<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            latest: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Issue a new fetch: supersedes any in flight and enters `Loading`
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.state = FetchState::Loading;
        RequestToken(self.latest)
    }

    /// Whether `token` is the most recently issued one
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Apply a finished fetch.
    ///
    /// Returns `false` and leaves the state untouched when the fetch has been
    /// superseded (or was already applied).
    pub fn complete(&mut self, token: RequestToken, result: Result<T, String>) -> bool {
        if !self.is_current(token) || !self.state.is_loading() {
            tracing::debug!(token = token.0, latest = self.latest, "Discarding stale response");
            return false;
        }

        self.state = match result {
            Ok(data) => FetchState::Loaded(data),
            Err(msg) => FetchState::Failed(msg),
        };
        true
    }

    /// Back to `Idle`, invalidating anything in flight
    pub fn reset(&mut self) {
        self.latest += 1;
        self.state = FetchState::Idle;
    }
}
