//! Async resource state for one fetched collection.

use storefront_data::FALLBACK_REASON;

/// Lifecycle status of an [`AsyncResource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResourceStatus {
    /// Created, no fetch started yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded.
    Success,
    /// The latest fetch failed.
    Failure,
}

impl ResourceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceStatus::Idle => "idle",
            ResourceStatus::Loading => "loading",
            ResourceStatus::Success => "success",
            ResourceStatus::Failure => "failure",
        }
    }

    /// Success or failure.
    pub fn is_settled(&self) -> bool {
        matches!(self, ResourceStatus::Success | ResourceStatus::Failure)
    }
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies one fetch cycle. Only the latest ticket may settle a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// `{status, data, error}` for one fetched collection.
///
/// Invariants:
/// - `Success` never carries an error
/// - `Failure` never carries data and always carries a non-empty error
/// - once [`begin`](Self::begin) has been called the status never returns to `Idle`
///
/// Loading clears previously loaded data.
#[derive(Debug, Clone, PartialEq)]
pub struct AsyncResource<T> {
    status: ResourceStatus,
    data: Vec<T>,
    error: Option<String>,
    sequence: u64,
}

impl<T> Default for AsyncResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AsyncResource<T> {
    /// A fresh, idle resource.
    pub fn new() -> Self {
        Self {
            status: ResourceStatus::Idle,
            data: Vec::new(),
            error: None,
            sequence: 0,
        }
    }

    pub fn status(&self) -> ResourceStatus {
        self.status
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == ResourceStatus::Loading
    }

    /// Ticket of the most recent fetch cycle, if any started.
    pub fn current_ticket(&self) -> Option<FetchTicket> {
        (self.sequence > 0).then_some(FetchTicket(self.sequence))
    }

    /// Start a fetch cycle. Supersedes any cycle still in flight.
    pub fn begin(&mut self) -> FetchTicket {
        self.sequence += 1;
        self.status = ResourceStatus::Loading;
        self.data.clear();
        self.error = None;
        FetchTicket(self.sequence)
    }

    /// Settle the cycle with a payload. Returns false for a stale ticket.
    pub fn succeed(&mut self, ticket: FetchTicket, payload: Vec<T>) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.status = ResourceStatus::Success;
        self.data = payload;
        self.error = None;
        true
    }

    /// Settle the cycle with a failure. Returns false for a stale ticket.
    ///
    /// A blank reason is replaced with a generic one so the failure is
    /// never silent.
    pub fn fail(&mut self, ticket: FetchTicket, reason: impl Into<String>) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        let reason = reason.into();
        self.status = ResourceStatus::Failure;
        self.data.clear();
        self.error = Some(if reason.trim().is_empty() {
            FALLBACK_REASON.to_string()
        } else {
            reason
        });
        true
    }

    fn accepts(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.sequence && self.status == ResourceStatus::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_idle() {
        let r: AsyncResource<u32> = AsyncResource::new();
        assert_eq!(r.status(), ResourceStatus::Idle);
        assert!(r.data().is_empty());
        assert_eq!(r.error(), None);
        assert_eq!(r.current_ticket(), None);
    }

    #[test]
    fn test_success_clears_error() {
        let mut r = AsyncResource::new();
        let t = r.begin();
        assert!(r.is_loading());
        assert!(r.succeed(t, vec![1, 2]));
        assert_eq!(r.status(), ResourceStatus::Success);
        assert_eq!(r.data(), &[1, 2]);
        assert_eq!(r.error(), None);
    }

    #[test]
    fn test_failure_clears_data() {
        let mut r = AsyncResource::new();
        let t = r.begin();
        assert!(r.succeed(t, vec![1]));

        let t = r.begin();
        assert!(r.data().is_empty(), "loading drops stale data");
        assert!(r.fail(t, "boom"));
        assert_eq!(r.status(), ResourceStatus::Failure);
        assert!(r.data().is_empty());
        assert_eq!(r.error(), Some("boom"));
    }

    #[test]
    fn test_blank_reason_replaced() {
        let mut r: AsyncResource<u32> = AsyncResource::new();
        let t = r.begin();
        r.fail(t, "  ");
        assert_eq!(r.error(), Some(FALLBACK_REASON));
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut r = AsyncResource::new();
        let first = r.begin();
        let second = r.begin();
        assert!(second > first);

        assert!(!r.succeed(first, vec!["old"]));
        assert!(r.is_loading());
        assert!(r.succeed(second, vec!["new"]));
        assert!(!r.fail(first, "late failure"));
        assert_eq!(r.data(), &["new"]);
    }

    #[test]
    fn test_settled_ticket_cannot_settle_twice() {
        let mut r = AsyncResource::new();
        let t = r.begin();
        assert!(r.succeed(t, vec![1]));
        assert!(!r.fail(t, "again"));
        assert_eq!(r.status(), ResourceStatus::Success);
    }

    #[test]
    fn test_never_returns_to_idle() {
        let mut r: AsyncResource<u32> = AsyncResource::new();
        let t = r.begin();
        r.fail(t, "x");
        r.begin();
        assert_ne!(r.status(), ResourceStatus::Idle);
    }
}
