//! Progress reporting and cancellation for matching runs
//!
//! A run reports one event per completed source entity (not per pair,
//! to bound callback overhead) over an mpsc channel, and checks a
//! shared cancel flag between source iterations. Both halves are
//! optional: a silent sink runs the same algorithm without observers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Progress events emitted during a matching run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchProgress {
    /// The run started after catalog filtering succeeded
    Started {
        /// Matcher being executed
        matcher_id: String,
        /// Number of source entities that will be scanned
        total_sources: usize,
    },

    /// One source entity's inner loop completed
    SourceScanned {
        /// 1-based index of the completed source entity
        current: usize,
        /// Total source entities
        total: usize,
        /// Candidates queued so far across the whole run
        queued: usize,
    },
}

/// Handle for requesting cancellation of a running match
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Request cancellation; the run stops at the next source iteration
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// Receiver side of a run's progress stream, plus the cancel flag
///
/// Passed into the orchestrator; the caller keeps the mpsc receiver
/// and the cancel handle.
#[derive(Debug)]
pub struct ProgressSink {
    sender: Option<mpsc::Sender<MatchProgress>>,
    cancelled: Arc<AtomicBool>,
}

impl ProgressSink {
    /// A sink that reports nothing and never cancels
    pub fn silent() -> Self {
        Self {
            sender: None,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A sink streaming events over a bounded channel
    ///
    /// Returns the sink together with the event receiver.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<MatchProgress>) {
        let (sender, receiver) = mpsc::channel(capacity);
        let sink = Self {
            sender: Some(sender),
            cancelled: Arc::new(AtomicBool::new(false)),
        };
        (sink, receiver)
    }

    /// A handle the caller can use to cancel the run
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(Arc::clone(&self.cancelled))
    }

    /// Whether cancellation has been requested
    pub fn cancel_requested(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Emit a progress event (best-effort)
    ///
    /// A full or closed channel drops the event rather than stalling
    /// the run; progress is advisory, the summary is authoritative.
    pub fn report(&self, event: MatchProgress) {
        if let Some(sender) = &self.sender {
            let _ = sender.try_send(event);
        }
    }
}

impl Default for ProgressSink {
    fn default() -> Self {
        Self::silent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_silent_sink_never_cancels() {
        let sink = ProgressSink::silent();
        assert!(!sink.cancel_requested());
        // Reporting into a silent sink is a no-op
        sink.report(MatchProgress::SourceScanned {
            current: 1,
            total: 2,
            queued: 0,
        });
    }

    #[tokio::test]
    async fn test_channel_delivers_events() {
        let (sink, mut receiver) = ProgressSink::channel(8);

        sink.report(MatchProgress::Started {
            matcher_id: "challenge-solution".to_string(),
            total_sources: 3,
        });

        let event = receiver.recv().await.unwrap();
        assert_eq!(
            event,
            MatchProgress::Started {
                matcher_id: "challenge-solution".to_string(),
                total_sources: 3,
            }
        );
    }

    #[tokio::test]
    async fn test_full_channel_drops_events() {
        let (sink, mut receiver) = ProgressSink::channel(1);

        for i in 0..5 {
            sink.report(MatchProgress::SourceScanned {
                current: i,
                total: 5,
                queued: 0,
            });
        }

        // Only the first event fit; the rest were dropped, not queued
        assert!(receiver.recv().await.is_some());
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_cancel_handle() {
        let sink = ProgressSink::silent();
        let handle = sink.cancel_handle();

        assert!(!sink.cancel_requested());
        handle.cancel();
        assert!(sink.cancel_requested());
    }
}
