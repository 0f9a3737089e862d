//! SQL schema for the registration SQLite store.
//!
//! Executed once at connection startup. There are no migrations; the DDL only
//! ever creates what is missing.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS customers (
    customer_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name     TEXT,             -- up to 50 characters
    surname        TEXT,             -- up to 50 characters
    policy_number  TEXT,             -- XX-999999
    date_of_birth  TEXT,             -- RFC 3339 UTC or NULL
    email_address  TEXT,
    created        TEXT NOT NULL     -- RFC 3339 UTC; server-assigned
);

PRAGMA user_version = 1;
";
