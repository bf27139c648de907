//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as `%Y-%m-%d %H:%M:%S` (lexicographically
//! sortable, so string comparison and `date()`/`strftime()` work directly),
//! dates as `%Y-%m-%d`.

use chrono::{NaiveDate, NaiveDateTime};
use zakup_core::model::{Session, SessionDetail};

use crate::{Error, Result};

pub const DT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Timestamps ──────────────────────────────────────────────────────────────

pub fn encode_dt(dt: NaiveDateTime) -> String {
  dt.format(DT_FORMAT).to_string()
}

pub fn decode_dt(s: &str) -> Result<NaiveDateTime> {
  NaiveDateTime::parse_from_str(s, DT_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

pub fn encode_date(d: NaiveDate) -> String {
  d.format(DATE_FORMAT).to_string()
}

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read from a `sessions` row joined with the customer firm and
/// classification name.
pub struct RawSessionDetail {
  pub ks_id:            i64,
  pub url:              String,
  pub customer_inn:     String,
  pub winner_inn:       String,
  pub legal_basis:      String,
  pub start_time:       String,
  pub end_time:         String,
  pub start_price:      f64,
  pub end_price:        f64,
  pub kpgz_code:        String,
  pub offer_start_date: String,
  pub offer_end_date:   String,
  // joins
  pub customer_name:    Option<String>,
  pub customer_region:  Option<String>,
  pub kpgz_name:        Option<String>,
}

impl RawSessionDetail {
  pub fn into_detail(self) -> Result<SessionDetail> {
    let session = Session {
      ks_id:            self.ks_id,
      url:              self.url,
      customer_inn:     self.customer_inn,
      winner_inn:       self.winner_inn,
      legal_basis:      self.legal_basis,
      start_time:       decode_dt(&self.start_time)?,
      end_time:         decode_dt(&self.end_time)?,
      start_price:      self.start_price,
      end_price:        self.end_price,
      kpgz_code:        self.kpgz_code,
      offer_start_date: decode_date(&self.offer_start_date)?,
      offer_end_date:   decode_date(&self.offer_end_date)?,
    };
    let concession = session.concession();

    Ok(SessionDetail {
      session,
      customer_name: self.customer_name,
      customer_region: self.customer_region,
      kpgz_name: self.kpgz_name,
      concession,
    })
  }
}
