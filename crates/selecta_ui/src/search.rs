//! Search capability and the driver for outstanding remote searches.
//!
//! A remote search is an opaque future handed out by the host's search
//! function. The widget never awaits it inline: futures are parked in a
//! [`SearchDriver`] and their completions are fed back into the reducer as
//! [`DropdownEvent::SearchResolved`], tagged with the sequence number they
//! were issued under.

use std::fmt;
use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::runtime::{self, Runtime};
use tokio::time;

use crate::error::SearchError;
use crate::option::SelectOption;
use crate::state::{DropdownEvent, FilterMode, SearchRequest};

/// Result a search function resolves with.
pub type SearchOutcome = Result<Vec<SelectOption>, SearchError>;

/// Future returned by a search function.
pub type SearchFuture = LocalBoxFuture<'static, SearchOutcome>;

/// Host-supplied asynchronous search function.
pub type SearchFn = Box<dyn Fn(&str) -> SearchFuture>;

/// Where results come from. Chosen once per widget.
#[derive(Default)]
pub enum SearchBackend {
    /// Substring filtering over the widget's own options
    #[default]
    Local,
    /// Delegated to a host search function
    Remote(SearchFn),
}

impl SearchBackend {
    /// Wrap a search function.
    ///
    /// ```
    /// use selecta_ui::{SearchBackend, SelectOption};
    /// use futures::FutureExt;
    ///
    /// let backend = SearchBackend::remote(|query: &str| {
    ///     let hit = SelectOption::new(query, query);
    ///     async move { Ok(vec![hit]) }.boxed_local()
    /// });
    /// assert!(backend.is_remote());
    /// ```
    pub fn remote<F>(f: F) -> Self
    where
        F: Fn(&str) -> SearchFuture + 'static,
    {
        SearchBackend::Remote(Box::new(f))
    }

    pub fn mode(&self) -> FilterMode {
        match self {
            SearchBackend::Local => FilterMode::Local,
            SearchBackend::Remote(_) => FilterMode::Remote,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, SearchBackend::Remote(_))
    }

    /// Start the search function for `request`. Local backends have nothing to start.
    pub fn start(&self, request: &SearchRequest) -> Option<SearchFuture> {
        match self {
            SearchBackend::Local => None,
            SearchBackend::Remote(f) => Some(f(&request.query)),
        }
    }
}

impl fmt::Debug for SearchBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchBackend::Local => f.write_str("Local"),
            SearchBackend::Remote(_) => f.write_str("Remote(..)"),
        }
    }
}

/// A finished search, ready to be fed back into the reducer.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub seq: u64,
    pub outcome: SearchOutcome,
}

impl From<Completion> for DropdownEvent {
    fn from(completion: Completion) -> Self {
        DropdownEvent::SearchResolved {
            seq: completion.seq,
            outcome: completion.outcome,
        }
    }
}

/// Outstanding searches for one widget.
///
/// Searches run on a private current-thread tokio runtime, so search
/// functions may use tokio timers. Completions come out in the order they
/// finish, not the order they were issued. Nothing is cancelled; the reducer
/// discards stale results.
pub struct SearchDriver {
    // Declared before the runtime so pending timers drop while it is alive
    pending: FuturesUnordered<LocalBoxFuture<'static, Completion>>,
    runtime: Runtime,
}

impl SearchDriver {
    pub fn new() -> std::io::Result<Self> {
        let runtime = runtime::Builder::new_current_thread().enable_time().build()?;
        Ok(Self {
            pending: FuturesUnordered::new(),
            runtime,
        })
    }

    /// Park a started search under its sequence number.
    pub fn push(&mut self, seq: u64, future: SearchFuture) {
        self.pending
            .push(future.map(move |outcome| Completion { seq, outcome }).boxed_local());
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Collect every search that has finished, without waiting for the rest.
    pub fn poll_ready(&mut self) -> Vec<Completion> {
        if self.pending.is_empty() {
            return Vec::new();
        }

        let pending = &mut self.pending;
        self.runtime.block_on(async move {
            let mut done = Vec::new();
            // A zero timeout lets the timer driver fire expired deadlines once
            while let Ok(Some(completion)) = time::timeout(Duration::ZERO, pending.next()).await {
                done.push(completion);
            }
            done
        })
    }

    /// Block until the next search finishes. Returns `None` when nothing is pending.
    pub fn wait_next(&mut self) -> Option<Completion> {
        if self.pending.is_empty() {
            return None;
        }
        self.runtime.block_on(self.pending.next())
    }
}

impl fmt::Debug for SearchDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchDriver")
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;

    fn option(value: &str) -> SelectOption {
        SelectOption::new(value, value)
    }

    fn channel_future(rx: oneshot::Receiver<SearchOutcome>) -> SearchFuture {
        async move { rx.await.unwrap_or_else(|canceled| Err(canceled.into())) }.boxed_local()
    }

    #[test]
    fn test_local_backend_starts_nothing() {
        let backend = SearchBackend::Local;
        let request = SearchRequest {
            seq: 1,
            query: "x".into(),
        };
        assert!(backend.start(&request).is_none());
        assert_eq!(backend.mode(), FilterMode::Local);
    }

    #[test]
    fn test_remote_backend_passes_query() {
        let backend = SearchBackend::remote(|query: &str| {
            let hit = option(query);
            async move { Ok(vec![hit]) }.boxed_local()
        });
        let request = SearchRequest {
            seq: 7,
            query: "lviv".into(),
        };
        let future = backend.start(&request).expect("remote backend starts a search");
        assert_eq!(pollster::block_on(future), Ok(vec![option("lviv")]));
        assert_eq!(backend.mode(), FilterMode::Remote);
    }

    #[test]
    fn test_poll_ready_returns_completion_order() {
        let mut driver = SearchDriver::new().expect("runtime starts");
        let (tx_a, rx_a) = oneshot::channel();
        let (tx_b, rx_b) = oneshot::channel();
        driver.push(1, channel_future(rx_a));
        driver.push(2, channel_future(rx_b));

        assert!(driver.poll_ready().is_empty());
        assert_eq!(driver.len(), 2);

        tx_b.send(Ok(vec![option("b")])).expect("receiver alive");
        let done = driver.poll_ready();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].seq, 2);

        tx_a.send(Ok(vec![option("a")])).expect("receiver alive");
        let done = driver.poll_ready();
        assert_eq!(done[0].seq, 1);
        assert!(driver.is_empty());
    }

    #[test]
    fn test_dropped_sender_completes_as_cancelled() {
        let mut driver = SearchDriver::new().expect("runtime starts");
        let (tx, rx) = oneshot::channel::<SearchOutcome>();
        driver.push(3, channel_future(rx));
        drop(tx);

        let completion = driver.wait_next().expect("one search pending");
        assert_eq!(completion.seq, 3);
        assert_eq!(completion.outcome, Err(SearchError::Cancelled));
        assert!(driver.wait_next().is_none());
    }

    fn timed_future(deadline: time::Instant, value: &str) -> SearchFuture {
        let hit = option(value);
        async move {
            time::sleep_until(deadline).await;
            Ok(vec![hit])
        }
        .boxed_local()
    }

    #[test]
    fn test_timer_search_is_picked_up_after_deadline() {
        let mut driver = SearchDriver::new().expect("runtime starts");
        driver.push(5, timed_future(time::Instant::now() + Duration::from_millis(30), "late"));

        assert!(driver.poll_ready().is_empty());
        assert_eq!(driver.len(), 1);

        std::thread::sleep(Duration::from_millis(50));
        let done = driver.poll_ready();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].outcome, Ok(vec![option("late")]));
        assert!(driver.is_empty());
    }

    #[test]
    fn test_wait_next_follows_timer_order() {
        let mut driver = SearchDriver::new().expect("runtime starts");
        let now = time::Instant::now();
        driver.push(1, timed_future(now + Duration::from_millis(40), "slow"));
        driver.push(2, timed_future(now + Duration::from_millis(5), "fast"));

        assert_eq!(driver.wait_next().map(|c| c.seq), Some(2));
        assert_eq!(driver.wait_next().map(|c| c.seq), Some(1));
        assert!(driver.wait_next().is_none());
    }

    #[test]
    fn test_completion_into_event() {
        let event: DropdownEvent = Completion {
            seq: 4,
            outcome: Ok(vec![]),
        }
        .into();
        assert_eq!(
            event,
            DropdownEvent::SearchResolved {
                seq: 4,
                outcome: Ok(vec![])
            }
        );
    }
}
