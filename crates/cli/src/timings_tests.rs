// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::time::Duration;

#[test]
fn elapsed_millis_counts_from_start() {
    let start = Instant::now()
        .checked_sub(Duration::from_millis(1500))
        .unwrap();
    assert!(elapsed_millis(start) >= 1500);
}

#[test]
fn elapsed_millis_is_zero_for_now() {
    assert!(elapsed_millis(Instant::now()) < 1000);
}

#[test]
fn time_phase_returns_block_value() {
    let value = crate::time_phase!("test::phase", { 40 + 2 });
    assert_eq!(value, 42);
}
