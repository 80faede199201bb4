// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture databases with the Things schema, for tests and benches.
//!
//! [`Fixture::sample`] writes a small library covering every entity kind:
//!
//! ```text
//! Work (area, tag Office)
//!   Launch site (project, deadline 2099-12-31)
//!     Prep (heading)
//!       Write copy (to-do, tag Urgent, start 2021-03-28, 2 checklist items)
//!     Deploy (to-do, completed 2021-04-01, tag Office)
//! Home (area)
//!   Buy milk (to-do, inbox, tags Errand Urgent, deadline 2021-03-28, reminder 12:34)
//!   Abandoned (project, trashed)
//!     Orphan (to-do)
//!     Later (heading)
//!       Stranded (to-do)
//! Call mom's friend (to-do, someday, canceled)
//! Old trash (to-do, trashed)
//! ```

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::db::Database;
use crate::error::Result;

/// Tables and columns read by the query builders.
pub const SCHEMA: &str = r#"
CREATE TABLE TMTask (
    uuid TEXT PRIMARY KEY,
    title TEXT,
    notes TEXT,
    type INTEGER NOT NULL DEFAULT 0,
    status INTEGER NOT NULL DEFAULT 0,
    start INTEGER NOT NULL DEFAULT 1,
    trashed INTEGER NOT NULL DEFAULT 0,
    startDate INTEGER,
    deadline INTEGER,
    deadlineSuppressionDate INTEGER,
    reminderTime INTEGER,
    stopDate REAL,
    creationDate REAL,
    userModificationDate REAL,
    area TEXT,
    project TEXT,
    heading TEXT,
    "index" INTEGER NOT NULL DEFAULT 0,
    todayIndex INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE TMArea (
    uuid TEXT PRIMARY KEY,
    title TEXT,
    visible INTEGER,
    "index" INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE TMTag (
    uuid TEXT PRIMARY KEY,
    title TEXT,
    shortcut TEXT,
    usedDate REAL,
    parent TEXT,
    "index" INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE TMTaskTag (tasks TEXT NOT NULL, tags TEXT NOT NULL);
CREATE TABLE TMAreaTag (areas TEXT NOT NULL, tags TEXT NOT NULL);
CREATE TABLE TMChecklistItem (
    uuid TEXT PRIMARY KEY,
    title TEXT,
    status INTEGER NOT NULL DEFAULT 0,
    stopDate REAL,
    creationDate REAL,
    task TEXT,
    "index" INTEGER NOT NULL DEFAULT 0
);
"#;

/// Rows of the sample library. Dates are packed Things dates:
/// 132464128 = 2021-03-28, 137613184 = 2099-12-31. 1614556800 is
/// 2021-03-01T00:00:00Z, 1617278400 is 2021-04-01T12:00:00Z.
pub const SAMPLE_DATA: &str = r#"
INSERT INTO TMArea (uuid, title, visible, "index") VALUES
    ('A-work', 'Work', 1, 1),
    ('A-home', 'Home', NULL, 2);

INSERT INTO TMTag (uuid, title, shortcut, parent, "index") VALUES
    ('G-errand', 'Errand', 'e', NULL, 1),
    ('G-office', 'Office', NULL, NULL, 2),
    ('G-urgent', 'Urgent', 'u', 'G-office', 3);

INSERT INTO TMTask (uuid, title, notes, type, status, start, trashed,
                    startDate, deadline, reminderTime, stopDate, creationDate,
                    area, project, heading, "index") VALUES
    ('P-launch', 'Launch site', '', 1, 0, 1, 0,
        NULL, 137613184, NULL, NULL, 1614556800, 'A-work', NULL, NULL, 1),
    ('H-prep', 'Prep', NULL, 2, 0, 1, 0,
        NULL, NULL, NULL, NULL, 1614556800, NULL, 'P-launch', NULL, 2),
    ('T-copy', 'Write copy', 'draft the copy', 0, 0, 1, 0,
        132464128, NULL, NULL, NULL, 1614556800, NULL, NULL, 'H-prep', 3),
    ('T-deploy', 'Deploy', NULL, 0, 3, 1, 0,
        NULL, NULL, NULL, 1617278400, 1614556800, NULL, 'P-launch', NULL, 4),
    ('T-milk', 'Buy milk', 'whole, not skim', 0, 0, 0, 0,
        NULL, 132464128, 840957952, NULL, CAST(strftime('%s', 'now') AS REAL),
        'A-home', NULL, NULL, 5),
    ('T-call', 'Call mom''s friend', NULL, 0, 2, 2, 0,
        NULL, NULL, NULL, 1617278400, 1614556800, NULL, NULL, NULL, 6),
    ('T-trash', 'Old trash', NULL, 0, 0, 1, 1,
        NULL, NULL, NULL, NULL, 1614556800, NULL, NULL, NULL, 7),
    ('P-abandoned', 'Abandoned', NULL, 1, 0, 1, 1,
        NULL, NULL, NULL, NULL, 1614556800, 'A-home', NULL, NULL, 8),
    ('T-orphan', 'Orphan', NULL, 0, 0, 1, 0,
        NULL, NULL, NULL, NULL, 1614556800, NULL, 'P-abandoned', NULL, 9),
    ('H-later', 'Later', NULL, 2, 0, 1, 0,
        NULL, NULL, NULL, NULL, 1614556800, NULL, 'P-abandoned', NULL, 10),
    ('T-stranded', 'Stranded', NULL, 0, 0, 1, 0,
        NULL, NULL, NULL, NULL, 1614556800, NULL, NULL, 'H-later', 11);

INSERT INTO TMTaskTag (tasks, tags) VALUES
    ('T-copy', 'G-urgent'),
    ('T-deploy', 'G-office'),
    ('T-milk', 'G-errand'),
    ('T-milk', 'G-urgent');

INSERT INTO TMAreaTag (areas, tags) VALUES
    ('A-work', 'G-office');

INSERT INTO TMChecklistItem (uuid, title, status, stopDate, task, "index") VALUES
    ('C-outline', 'Outline', 3, 1617278400, 'T-copy', 1),
    ('C-polish', 'Polish', 0, NULL, 'T-copy', 2);
"#;

/// Tasks that are neither trashed nor inside a trashed project, any status.
pub const SAMPLE_VISIBLE_TASKS: usize = 6;

/// Total rows in `TMTask` of the sample library.
pub const SAMPLE_TOTAL_TASKS: usize = 11;

/// A Things database file living in a temporary directory.
pub struct Fixture {
    _dir: TempDir,
    path: PathBuf,
}

impl Fixture {
    /// Schema only, no rows.
    pub fn empty() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("main.sqlite");
        let conn = Connection::open(&path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Fixture { _dir: dir, path })
    }

    /// Schema plus [`SAMPLE_DATA`].
    pub fn sample() -> Result<Self> {
        let fixture = Self::empty()?;
        fixture.execute(SAMPLE_DATA)?;
        Ok(fixture)
    }

    /// Run statements through a separate writable connection.
    pub fn execute(&self, sql: &str) -> Result<()> {
        Connection::open(&self.path)?.execute_batch(sql)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the fixture read-only, the way callers open a real library.
    pub fn open(&self) -> Result<Database> {
        Database::open(&self.path)
    }
}
