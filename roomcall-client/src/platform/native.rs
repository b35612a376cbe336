/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Tokio-backed timers and task spawning.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::runtime::{Handle, TryCurrentError};

/// Returns the current time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as f64
}

/// A repeating timer that fires a callback at a fixed interval.
///
/// The first tick happens one full period after creation, never immediately.
/// The timer stops on [`cancel`](Self::cancel) or when the handle is dropped,
/// whichever comes first; a callback never runs after `cancel` returns.
#[derive(Debug)]
pub struct IntervalHandle {
    quit: Arc<AtomicBool>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl IntervalHandle {
    /// Start a repeating timer on the current tokio runtime.
    ///
    /// Fails when called outside of a runtime context.
    ///
    /// # Arguments
    /// * `period_ms`: interval period in milliseconds
    /// * `callback`: closure to invoke on each tick
    pub fn try_new<F: Fn() + Send + 'static>(
        period_ms: u64,
        callback: F,
    ) -> Result<Self, TryCurrentError> {
        let runtime = Handle::try_current()?;
        let quit = Arc::new(AtomicBool::new(false));
        let quit_clone = quit.clone();
        let period = Duration::from_millis(period_ms.max(1));

        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            interval.tick().await;

            loop {
                interval.tick().await;
                if quit_clone.load(Ordering::Acquire) {
                    break;
                }
                callback();
            }
        });

        Ok(Self {
            quit,
            handle: Some(handle),
        })
    }

    /// Stop the timer. Returns `false` if it was already stopped.
    pub fn cancel(&mut self) -> bool {
        let was_running = !self.quit.swap(true, Ordering::AcqRel);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        was_running
    }

    pub fn is_running(&self) -> bool {
        !self.quit.load(Ordering::Acquire)
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Spawn an async task on the current tokio runtime.
pub fn spawn<F: Future<Output = ()> + Send + 'static>(future: F) {
    tokio::spawn(future);
}
