//! Rotating status line shown while a request is pending.
//!
//! `StatusRotation::start` spawns a ticker that advances through the phrase
//! list on a fixed interval, wrapping at the end. The returned
//! `RotationHandle` aborts the ticker when stopped or dropped, so the timer
//! never outlives the pending period that started it. Stopping also rewinds
//! to the first phrase, so a reader never sees a phrase left over from an
//! earlier period.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::trace;

/// Rotation state packed as `(epoch << 32) | index`. Every start and stop
/// moves to a new epoch, and a ticker only writes within its own epoch.
#[derive(Debug, Default)]
struct Position(AtomicU64);

impl Position {
    fn pack(epoch: u64, index: usize) -> u64 {
        ((epoch & u64::from(u32::MAX)) << 32) | (index as u64 & u64::from(u32::MAX))
    }

    fn epoch(state: u64) -> u64 {
        state >> 32
    }

    fn index(&self) -> usize {
        (self.0.load(Ordering::Acquire) & u64::from(u32::MAX)) as usize
    }

    /// Open a new epoch at the first phrase and return it.
    fn rewind(&self) -> u64 {
        let prev = self
            .0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |s| {
                Some(Self::pack(Self::epoch(s) + 1, 0))
            })
            .unwrap_or_else(|s| s);
        (Self::epoch(prev) + 1) & u64::from(u32::MAX)
    }

    /// Rewind only if `epoch` is still current.
    fn rewind_if(&self, epoch: u64) {
        let _ = self.0.fetch_update(Ordering::AcqRel, Ordering::Acquire, |s| {
            (Self::epoch(s) == epoch).then(|| Self::pack(epoch + 1, 0))
        });
    }

    /// Step to the next phrase. `None` once `epoch` is no longer current.
    fn advance(&self, epoch: u64, len: usize) -> Option<usize> {
        self.0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |s| {
                let index = (s & u64::from(u32::MAX)) as usize;
                (Self::epoch(s) == epoch).then(|| Self::pack(epoch, (index + 1) % len))
            })
            .ok()
            .map(|s| ((s & u64::from(u32::MAX)) as usize + 1) % len)
    }
}

pub struct StatusRotation {
    phrases: Arc<[String]>,
    interval: Duration,
    position: Arc<Position>,
}

impl StatusRotation {
    pub fn new(phrases: Vec<String>, interval: Duration) -> Self {
        Self {
            phrases: phrases.into(),
            interval,
            position: Arc::new(Position::default()),
        }
    }

    /// Reset to the first phrase and begin rotating.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&self) -> RotationHandle {
        let epoch = self.position.rewind();

        let len = self.phrases.len();
        if len < 2 {
            return RotationHandle {
                task: None,
                position: Arc::clone(&self.position),
                epoch,
            };
        }

        let position = Arc::clone(&self.position);
        let interval = self.interval;
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(next) = position.advance(epoch, len) else {
                    break;
                };
                trace!(index = next, "status phrase advanced");
            }
        });

        RotationHandle {
            task: Some(task),
            position: Arc::clone(&self.position),
            epoch,
        }
    }

    /// Phrase at the current position. Empty if there are no phrases.
    pub fn current(&self) -> &str {
        self.phrases
            .get(self.position.index())
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Owns the ticker task of one pending period.
pub struct RotationHandle {
    task: Option<JoinHandle<()>>,
    position: Arc<Position>,
    epoch: u64,
}

impl RotationHandle {
    /// Stop rotating and rewind to the first phrase. Dropping the handle has
    /// the same effect.
    pub fn stop(self) {
        drop(self);
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for RotationHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.position.rewind_if(self.epoch);
    }
}
