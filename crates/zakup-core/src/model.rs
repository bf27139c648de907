//! Persisted entities of the tender analytics schema.
//!
//! Everything here is created once during batch ingestion and never updated
//! in place afterwards (the subscription side table is the single exception:
//! it is upserted by replace). Deletion is not supported; the store is an
//! append-mostly analytical snapshot rebuilt by re-ingesting into an empty
//! database.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ─── Firms ───────────────────────────────────────────────────────────────────

/// A legal entity, identified by its tax number (INN). A firm may appear in
/// customer, winner, and participant roles; the row is written on first
/// sighting in any role and never touched again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Firm {
  pub inn:    String,
  pub name:   String,
  pub region: Option<String>,
}

// ─── Quotation sessions ──────────────────────────────────────────────────────

/// A quotation session (KS) — the core transaction record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
  pub ks_id:            i64,
  pub url:              String,
  pub customer_inn:     String,
  pub winner_inn:       String,
  /// Legal-basis code (e.g. "44-ФЗ").
  pub legal_basis:      String,
  pub start_time:       NaiveDateTime,
  pub end_time:         NaiveDateTime,
  pub start_price:      f64,
  /// Final price offered by the winner.
  pub end_price:        f64,
  pub kpgz_code:        String,
  pub offer_start_date: NaiveDate,
  pub offer_end_date:   NaiveDate,
}

impl Session {
  /// Price reduction the winner conceded relative to the starting price.
  pub fn concession(&self) -> f64 {
    self.start_price - self.end_price
  }
}

/// A session joined with its customer firm and classification name, as
/// served by the read API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDetail {
  #[serde(flatten)]
  pub session:         Session,
  pub customer_name:   Option<String>,
  pub customer_region: Option<String>,
  pub kpgz_name:       Option<String>,
  /// `start_price − end_price`.
  pub concession:      f64,
}

// ─── Participation ───────────────────────────────────────────────────────────

/// "This firm placed a bid in this session." Composite key (inn, ks_id).
/// The winner is normally also listed as a participant, but that is not
/// structurally enforced by the source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
  pub inn:   String,
  pub ks_id: i64,
}

// ─── Classification codes ────────────────────────────────────────────────────

/// A KPGZ classification code for procured goods/services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
  pub code: String,
  pub name: String,
}

// ─── Line items ──────────────────────────────────────────────────────────────

/// An individual priced item line (SKU) within a session. Line items carry
/// no natural key; re-ingesting a source file duplicates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
  pub item_id:          i64,
  pub ks_id:            i64,
  pub link:             String,
  pub name:             String,
  pub quantity:         i64,
  pub unit_start_price: f64,
  pub unit_offer_price: f64,
}

/// A line item before the store assigns its `item_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLineItem {
  pub link:             String,
  pub name:             String,
  pub quantity:         i64,
  pub unit_start_price: f64,
  pub unit_offer_price: f64,
}

// ─── Ingestion ───────────────────────────────────────────────────────────────

/// One normalized source-spreadsheet row, ready for insertion.
///
/// The source is denormalized: a session spans multiple rows, one per
/// participant list / line item combination. Deduplication happens at
/// insert time (first-write-wins on every keyed table).
#[derive(Debug, Clone)]
pub struct IngestRecord {
  pub customer:       Firm,
  pub winner:         Firm,
  pub session:        Session,
  pub participants:   Vec<Firm>,
  pub classification: Classification,
  pub line_item:      NewLineItem,
}

/// Row counts actually inserted by one [`ingest_batch`] call. Rows rejected
/// as duplicates are not counted.
///
/// [`ingest_batch`]: crate::store::TenderStore::ingest_batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
  pub firms:           usize,
  pub sessions:        usize,
  pub participations:  usize,
  pub classifications: usize,
  pub line_items:      usize,
}

// ─── Subscriptions ───────────────────────────────────────────────────────────

/// A report subscription: a subscriber follows one firm and receives a
/// summary every `period_days` days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
  pub inn:             String,
  pub subscriber_id:   i64,
  pub subscriber_name: Option<String>,
  pub period_days:     i64,
  pub last_sent_at:    Option<NaiveDateTime>,
}

/// Subscription input; `last_sent_at` is reset on every upsert so the next
/// scheduler pass delivers immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubscription {
  pub inn:             String,
  pub subscriber_id:   i64,
  pub subscriber_name: Option<String>,
  pub period_days:     i64,
}
