// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Lifecycle deadline scheduler.
//!
//! Records absolute uptime-millisecond deadlines for delayed reboot and
//! shutdown. The deadlines are advisory state: an external timer loop polls
//! them and performs the actual reboot/shutdown. Last write wins; setting a
//! new deadline (including "unset") discards any previous value silently.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Stored value meaning "no deadline armed".
const UNSET: u64 = 0;

/// Process-wide reboot/shutdown deadline slots.
///
/// The two slots are independent. They use relaxed atomics: the timer loop
/// only needs eventually-visible monotonic snapshots, not ordering against
/// other state.
#[derive(Debug)]
pub struct LifecycleScheduler {
    started: Instant,
    reboot_at_ms: AtomicU64,
    shutdown_at_ms: AtomicU64,
}

impl LifecycleScheduler {
    /// Scheduler with both slots unset, anchored to the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            reboot_at_ms: AtomicU64::new(UNSET),
            shutdown_at_ms: AtomicU64::new(UNSET),
        }
    }

    /// Milliseconds since the scheduler was created (the node's uptime clock).
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Arm the reboot deadline `delay_secs` from now; negative clears it.
    pub fn schedule_reboot(&self, delay_secs: i32) {
        Self::arm(&self.reboot_at_ms, self.now_ms(), delay_secs);
    }

    /// Arm the shutdown deadline `delay_secs` from now; negative clears it.
    pub fn schedule_shutdown(&self, delay_secs: i32) {
        Self::arm(&self.shutdown_at_ms, self.now_ms(), delay_secs);
    }

    /// Absolute reboot deadline in uptime milliseconds, if armed.
    #[must_use]
    pub fn reboot_at_ms(&self) -> Option<u64> {
        match self.reboot_at_ms.load(Ordering::Relaxed) {
            UNSET => None,
            at => Some(at),
        }
    }

    /// Absolute shutdown deadline in uptime milliseconds, if armed.
    #[must_use]
    pub fn shutdown_at_ms(&self) -> Option<u64> {
        match self.shutdown_at_ms.load(Ordering::Relaxed) {
            UNSET => None,
            at => Some(at),
        }
    }

    fn arm(slot: &AtomicU64, now_ms: u64, delay_secs: i32) {
        let at = if delay_secs < 0 {
            UNSET
        } else {
            now_ms + delay_secs as u64 * 1000
        };
        slot.store(at, Ordering::Relaxed);
    }
}

impl Default for LifecycleScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminate the simulated node immediately, bypassing any cleanup.
#[cfg(feature = "simulator")]
pub(crate) fn exit_simulator() -> ! {
    std::process::exit(0)
}
