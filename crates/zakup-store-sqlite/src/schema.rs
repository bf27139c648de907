//! SQL schema for the zakup SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- First-write-wins: a firm row is written on first sighting in any role
-- (customer, winner, participant) and never updated.
CREATE TABLE IF NOT EXISTS firms (
    inn     TEXT PRIMARY KEY,
    name    TEXT NOT NULL,
    region  TEXT
);

CREATE TABLE IF NOT EXISTS sessions (
    ks_id            INTEGER PRIMARY KEY,
    url              TEXT NOT NULL,
    customer_inn     TEXT NOT NULL REFERENCES firms(inn),
    winner_inn       TEXT NOT NULL REFERENCES firms(inn),
    legal_basis      TEXT NOT NULL,
    start_time       TEXT NOT NULL,   -- '%Y-%m-%d %H:%M:%S', sortable
    end_time         TEXT NOT NULL,
    start_price      REAL NOT NULL,
    end_price        REAL NOT NULL,   -- final (winning) price
    kpgz_code        TEXT NOT NULL,
    offer_start_date TEXT NOT NULL,   -- '%Y-%m-%d'
    offer_end_date   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS participants (
    inn    TEXT    NOT NULL REFERENCES firms(inn),
    ks_id  INTEGER NOT NULL REFERENCES sessions(ks_id),
    PRIMARY KEY (inn, ks_id)
);

CREATE TABLE IF NOT EXISTS classification_codes (
    code  TEXT PRIMARY KEY,
    name  TEXT NOT NULL
);

-- Line items carry no natural key; re-ingesting a file duplicates them.
CREATE TABLE IF NOT EXISTS line_items (
    item_id          INTEGER PRIMARY KEY AUTOINCREMENT,
    ks_id            INTEGER NOT NULL REFERENCES sessions(ks_id),
    link             TEXT NOT NULL,
    name             TEXT NOT NULL,
    quantity         INTEGER NOT NULL,
    unit_start_price REAL NOT NULL,
    unit_offer_price REAL NOT NULL
);

-- Report subscriptions; the one table that is upserted by replace.
CREATE TABLE IF NOT EXISTS subscriptions (
    inn             TEXT    NOT NULL,
    subscriber_id   INTEGER NOT NULL,
    subscriber_name TEXT,
    period_days     INTEGER NOT NULL,
    last_sent_at    TEXT,
    PRIMARY KEY (inn, subscriber_id)
);

CREATE INDEX IF NOT EXISTS sessions_winner_idx   ON sessions(winner_inn);
CREATE INDEX IF NOT EXISTS sessions_end_time_idx ON sessions(end_time);
CREATE INDEX IF NOT EXISTS participants_ks_idx   ON participants(ks_id);

PRAGMA user_version = 1;
";
