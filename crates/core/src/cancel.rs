// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cooperative cancellation for query execution.
//!
//! A [`CancelToken`] is passed to every execution call. Cancelling it makes
//! queries that have not started fail with [`Error::Cancelled`], and
//! interrupts statements that are running on a connection registered with
//! the token.

use rusqlite::InterruptHandle;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{Error, Result};

/// Cloneable cancellation flag shared between a caller and its queries.
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    cancelled: AtomicBool,
    next_id: AtomicU64,
    running: Mutex<Vec<(u64, InterruptHandle)>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel, interrupting any statement currently running under this token.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
        for (_, handle) in self.running().iter() {
            handle.interrupt();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Fail fast if the token is already cancelled.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Register a connection's interrupt handle for the lifetime of the
    /// returned guard.
    pub(crate) fn register(&self, handle: InterruptHandle) -> Registration<'_> {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        let mut running = self.running();
        // Checked under the lock so a concurrent cancel() cannot slip
        // between registration and the flag check.
        if self.is_cancelled() {
            handle.interrupt();
        }
        running.push((id, handle));
        Registration { token: self, id }
    }

    fn running(&self) -> MutexGuard<'_, Vec<(u64, InterruptHandle)>> {
        self.inner
            .running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .field("running", &self.running().len())
            .finish()
    }
}

/// Unregisters an interrupt handle when dropped.
pub(crate) struct Registration<'a> {
    token: &'a CancelToken,
    id: u64,
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        self.token.running().retain(|(id, _)| *id != self.id);
    }
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod tests;
