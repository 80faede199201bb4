// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Parsing tests for the command line, split by command.

use super::*;

mod global_tests;
mod tags_tests;
mod tasks_tests;
