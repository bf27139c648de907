//! Derived-metric result types returned by the analytics queries.
//!
//! Nothing in this module is persisted; every value is computed on read from
//! the committed schema. Percentages are rounded to two decimal places and
//! defined as 0 whenever their denominator is 0.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::SessionDetail;

/// Round to two decimal places, the precision used by every percentage and
/// money summary in the API.
pub fn round2(x: f64) -> f64 {
  (x * 100.0).round() / 100.0
}

/// `wins / total * 100`, rounded; 0 when `total` is 0.
pub fn percentage(wins: i64, total: i64) -> f64 {
  if total == 0 {
    return 0.0;
  }
  round2(wins as f64 / total as f64 * 100.0)
}

// ─── Winners ranking ─────────────────────────────────────────────────────────

/// One row of the winners ranking: a firm and how many sessions it won.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinnerRow {
  pub inn:    String,
  pub name:   String,
  pub region: Option<String>,
  pub wins:   i64,
}

// ─── Competitor overlap ──────────────────────────────────────────────────────

/// A firm that co-participated in at least one session with the subject
/// firm ("supplier"), with the win split across those shared sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorRow {
  pub inn:    String,
  pub name:   String,
  pub region: Option<String>,
  /// Concatenated "code name" pairs of the classifications the shared
  /// sessions fell under.
  pub kpgz_info: Option<String>,
  pub total_contracts: i64,
  pub competitor_wins: i64,
  pub competitor_win_percentage: f64,
  pub supplier_wins: i64,
  pub supplier_win_percentage: f64,
  /// Shared sessions won by neither side: `total − (competitor + supplier)`.
  pub other_wins: i64,
  pub other_win_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorReport {
  /// Contract-weighted mean of the supplier win percentage across all
  /// listed competitors; 0 when there are no shared contracts.
  pub kpi:         f64,
  pub competitors: Vec<CompetitorRow>,
}

// ─── Win trend ───────────────────────────────────────────────────────────────

/// Daily aggregate of the sessions a firm won: prices and concession summed
/// over all wins whose `end_time` falls on `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinTrendPoint {
  pub date:        NaiveDate,
  pub start_price: f64,
  pub end_price:   f64,
  pub concession:  f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinTrendSummary {
  pub total_concession: f64,
  /// `Σ concession / Σ start_price × 100` across the whole series.
  pub average_concession_percentage: f64,
}

/// Win-trend series over the trailing two-year window, ordered by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinTrend {
  pub summary: WinTrendSummary,
  pub points:  Vec<WinTrendPoint>,
}

// ─── Yearly contract trend ───────────────────────────────────────────────────

/// Sessions a firm participated in and won during one calendar year (year
/// of the session start time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRow {
  pub year:         i32,
  pub participated: i64,
  pub wins:         i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
  pub total_participated: i64,
  pub total_wins:         i64,
  pub win_percentage:     f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyTrend {
  pub summary: YearlySummary,
  pub years:   Vec<YearRow>,
}

// ─── Filtered search ─────────────────────────────────────────────────────────

/// Parameters for [`TenderStore::search_sessions`]. Every `None` field is a
/// wildcard; a default filter matches all sessions.
///
/// [`TenderStore::search_sessions`]: crate::store::TenderStore::search_sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionFilter {
  /// Prefix match on the classification code.
  pub kpgz_prefix:   Option<String>,
  pub winner_region: Option<String>,
  /// Inclusive bounds on the session end time (date granularity).
  pub start_date:    Option<NaiveDate>,
  pub end_date:      Option<NaiveDate>,
  pub winner_inn:    Option<String>,
  pub customer_inn:  Option<String>,
  /// Bounds on the final (winning) price.
  pub min_price:     Option<f64>,
  pub max_price:     Option<f64>,
  /// Only sessions in which this firm placed a bid.
  pub participant_inn: Option<String>,
}

/// Filtered search result plus its KPI summary scalars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiReport {
  /// `Σ(start − end) / Σ(start) × 100` over the matched sessions.
  pub average_concession_percentage: f64,
  /// `|Σ(start − end)|` over the matched sessions.
  pub total_concession: f64,
  pub sessions: Vec<SessionDetail>,
}

// ─── Facets ──────────────────────────────────────────────────────────────────

/// A customer firm as offered in the dashboard filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFacet {
  pub inn:  String,
  pub name: String,
}

/// Distinct filter values for the dashboard, plus a first page of sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facets {
  pub regions:   Vec<String>,
  pub kpgz:      Vec<crate::model::Classification>,
  pub customers: Vec<CustomerFacet>,
  pub first100:  Vec<SessionDetail>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round2_truncates_noise() {
    assert_eq!(round2(33.333), 33.33);
    assert_eq!(round2(0.1 + 0.2), 0.3);
  }

  #[test]
  fn percentage_zero_total_is_zero() {
    assert_eq!(percentage(0, 0), 0.0);
    assert_eq!(percentage(5, 0), 0.0);
  }

  #[test]
  fn percentage_rounds() {
    assert_eq!(percentage(1, 3), 33.33);
    assert_eq!(percentage(2, 3), 66.67);
  }
}
