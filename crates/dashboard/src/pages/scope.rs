//! Lifetime and ordering guard for a page's requests.
//!
//! Each request takes a [`Ticket`]; its result is applied only if the page
//! is still open and no newer request was started since. Closing the page
//! cancels whatever is in flight.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

/// Owned by one page; clones share state.
#[derive(Debug, Clone, Default)]
pub struct PageScope {
    cancel: CancellationToken,
    seq: Arc<AtomicU64>,
}

/// Proof that a request was started at a given point.
#[derive(Debug, Clone)]
pub struct Ticket {
    seq: u64,
    scope: PageScope,
}

impl PageScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding any earlier one.
    pub fn begin(&self) -> Ticket {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            seq,
            scope: self.clone(),
        }
    }

    /// Close the page. In-flight requests resolve to `None`.
    pub fn close(&self) {
        self.cancel.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Run `fut` under a fresh ticket. Returns `None` when the page closed
    /// first or a newer request started while this one was in flight.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        let ticket = self.begin();
        ticket.run(fut).await
    }
}

impl Ticket {
    /// Whether results for this ticket may still be applied.
    pub fn is_current(&self) -> bool {
        !self.scope.is_closed() && self.scope.seq.load(Ordering::SeqCst) == self.seq
    }

    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        let output = tokio::select! {
            _ = self.scope.cancel.cancelled() => return None,
            output = fut => output,
        };
        if self.is_current() {
            Some(output)
        } else {
            tracing::debug!(seq = self.seq, "Discarding stale result");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn newer_ticket_supersedes_older() {
        let scope = PageScope::new();
        let first = scope.begin();
        let second = scope.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn close_invalidates_everything() {
        let scope = PageScope::new();
        let ticket = scope.begin();
        scope.close();
        assert!(!ticket.is_current());
    }

    #[tokio::test(start_paused = true)]
    async fn close_during_flight_discards_result() {
        let scope = PageScope::new();
        let closer = scope.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            closer.close();
        });

        let result = scope
            .run(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                42
            })
            .await;
        assert_eq!(result, None);
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_result_is_discarded() {
        let scope = PageScope::new();
        let slow = scope.begin();
        let fast = scope.begin();

        let (slow_result, fast_result) = tokio::join!(
            slow.run(async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                "slow"
            }),
            fast.run(async {
                tokio::time::sleep(Duration::from_secs(1)).await;
                "fast"
            }),
        );
        assert_eq!(slow_result, None);
        assert_eq!(fast_result, Some("fast"));
    }
}
