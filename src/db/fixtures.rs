//! On-disk SQLite fixture mirroring the employee events schema.

use std::path::PathBuf;

use rusqlite::Connection;

use super::DbSource;

const SCHEMA: &str = "
    CREATE TABLE team (
        team_id INTEGER PRIMARY KEY,
        team_name TEXT NOT NULL,
        shift TEXT,
        manager_name TEXT
    );
    CREATE TABLE employee (
        employee_id INTEGER PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        team_id INTEGER REFERENCES team(team_id)
    );
    CREATE TABLE employee_events (
        event_date TEXT NOT NULL,
        employee_id INTEGER REFERENCES employee(employee_id),
        team_id INTEGER REFERENCES team(team_id),
        positive_events INTEGER,
        negative_events INTEGER
    );
    CREATE TABLE notes (
        employee_id INTEGER REFERENCES employee(employee_id),
        team_id INTEGER REFERENCES team(team_id),
        note TEXT,
        note_date TEXT
    );
";

const SEED: &str = "
    INSERT INTO team (team_id, team_name, shift, manager_name) VALUES
        (1, 'Analytics', 'day', 'Mary'),
        (2, 'Platform', 'night', 'Joe');
    INSERT INTO employee (employee_id, first_name, last_name, team_id) VALUES
        (2, 'Ada', 'Lovelace', 1),
        (3, 'Grace', 'Hopper', 1),
        (4, 'Alan', 'Turing', 2);
    INSERT INTO employee_events (event_date, employee_id, team_id, positive_events, negative_events) VALUES
        ('2024-01-02', 2, 1, 0, 2),
        ('2024-01-01', 2, 1, 3, 1),
        ('2024-01-03', 3, 1, 2, 1),
        ('2024-01-01', 3, 1, 1, NULL),
        ('2024-01-03', 3, 1, 1, 0);
    INSERT INTO notes (employee_id, team_id, note, note_date) VALUES
        (2, 1, 'Led the quarterly <review>', '2024-01-05'),
        (3, 1, 'Asked about the night shift', '2024-01-04'),
        (4, 2, 'On leave next month', '2024-01-06');
";

/// Create the schema (without data) in a fresh temp file.
pub(crate) fn empty_source() -> DbSource {
    let path = temp_db_path("reports_empty.db");
    let conn = Connection::open(&path).expect("create fixture db");
    conn.execute_batch(SCHEMA).expect("apply fixture schema");
    DbSource::new(path)
}

/// Create the schema and the sample employees, teams, events and notes.
pub(crate) fn seeded_source() -> DbSource {
    let path = temp_db_path("reports_seeded.db");
    let conn = Connection::open(&path).expect("create fixture db");
    conn.execute_batch(SCHEMA).expect("apply fixture schema");
    conn.execute_batch(SEED).expect("seed fixture data");
    DbSource::new(path)
}

/// A source whose file is never created: every query hits a storage error.
pub(crate) fn unavailable_source() -> DbSource {
    DbSource::new(temp_db_path("reports_missing.db"))
}

fn temp_db_path(name: &str) -> PathBuf {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(name);
    std::mem::forget(dir);
    path
}
