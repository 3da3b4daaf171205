//! Simulated remote search with an artificial network delay.

use std::time::Duration;

use futures::FutureExt;
use tokio::time::{self, Instant};

use crate::option::{filter_options, SelectOption};
use crate::search::SearchFuture;

/// Build a search function that filters `options` like the local filter,
/// answering `delay_for(query)` after the call.
///
/// The returned futures sleep on tokio's timer and must be polled inside a
/// tokio runtime with time enabled, such as the one behind a dropdown's
/// search driver.
pub fn simulated_search<D>(options: Vec<SelectOption>, delay_for: D) -> impl Fn(&str) -> SearchFuture + 'static
where
    D: Fn(&str) -> Duration + 'static,
{
    move |query: &str| {
        let results = filter_options(&options, query);
        let delay = delay_for(query);
        // Deadline counts from the call, not from the first poll
        let deadline = Instant::now() + delay;
        log::debug!("Simulated search for {:?}: {} results in {:?}", query, results.len(), delay);
        async move {
            time::sleep_until(deadline).await;
            Ok(results)
        }
        .boxed_local()
    }
}
