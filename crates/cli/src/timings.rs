// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phase timings for query commands.
//!
//! Every phase is logged at debug level. With `THINGS_TIMINGS` set, the
//! duration is also printed to stderr as `[timings] phase::name XXms`.

use std::time::Instant;

/// Record how long `phase` took since `start`.
pub fn print_timing(phase: &str, start: Instant) {
    let elapsed_ms = elapsed_millis(start);
    tracing::debug!(phase, elapsed_ms, "phase finished");
    if crate::env::timings() {
        eprintln!("[timings] {phase} {elapsed_ms}ms");
    }
}

/// Milliseconds since `start`, saturating at `u64::MAX`.
pub fn elapsed_millis(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Macro for timing a block of code.
///
/// Usage:
/// ```rust,ignore
/// let tasks = time_phase!("query::tasks", { query.all(&token)? });
/// ```
#[macro_export]
macro_rules! time_phase {
    ($phase:expr, $block:expr) => {{
        let __start = std::time::Instant::now();
        let __result = $block;
        $crate::timings::print_timing($phase, __start);
        __result
    }};
}

#[cfg(test)]
#[path = "timings_tests.rs"]
mod tests;
