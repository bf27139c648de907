//! The `TenderStore` trait.
//!
//! Implemented by storage backends (e.g. `zakup-store-sqlite`). Higher
//! layers (`zakup-api`, `zakup-server`) depend on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use chrono::NaiveDateTime;

use crate::{
  analytics::{
    CompetitorReport, Facets, KpiReport, SessionFilter, WinTrend, WinnerRow,
    YearlyTrend,
  },
  model::{
    Firm, IngestRecord, IngestStats, LineItem, NewSubscription,
    SessionDetail, Subscription,
  },
};

/// Abstraction over a tender analytics store backend.
///
/// Writes happen in two places only: batch ingestion (first-write-wins on
/// every keyed table, one transaction per batch) and the subscription side
/// table (upsert by replace). Every read is a pure aggregate over the
/// committed schema.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait TenderStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Ingestion ─────────────────────────────────────────────────────────

  /// Insert a batch of normalized spreadsheet rows in a single
  /// transaction, committed once at the end.
  ///
  /// Duplicate keys on firms, sessions, participations and classification
  /// codes are suppressed (only the unique-constraint conflict — anything
  /// else propagates). Line items carry no key and insert unconditionally.
  fn ingest_batch(
    &self,
    records: Vec<IngestRecord>,
  ) -> impl Future<Output = Result<IngestStats, Self::Error>> + Send + '_;

  // ── Entity reads ──────────────────────────────────────────────────────

  fn list_firms(
    &self,
  ) -> impl Future<Output = Result<Vec<Firm>, Self::Error>> + Send + '_;

  /// Look up a firm by tax number. Returns `None` if not found.
  fn get_firm<'a>(
    &'a self,
    inn: &'a str,
  ) -> impl Future<Output = Result<Option<Firm>, Self::Error>> + Send + 'a;

  /// All sessions joined with customer firm and classification name.
  fn list_sessions(
    &self,
  ) -> impl Future<Output = Result<Vec<SessionDetail>, Self::Error>> + Send + '_;

  /// Line items of one session, in insertion order.
  fn line_items(
    &self,
    ks_id: i64,
  ) -> impl Future<Output = Result<Vec<LineItem>, Self::Error>> + Send + '_;

  // ── Analytics ─────────────────────────────────────────────────────────

  /// Top `limit` firms by sessions won, descending. Fewer than `limit`
  /// distinct winners returns them all.
  fn top_winners(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<WinnerRow>, Self::Error>> + Send + '_;

  /// Competitor overlap for one firm: every other firm that shared at
  /// least one session, with the win split and percentages. Capped at 100
  /// competitors, ordered by competitor wins then shared contracts.
  fn competitors<'a>(
    &'a self,
    inn: &'a str,
  ) -> impl Future<Output = Result<CompetitorReport, Self::Error>> + Send + 'a;

  /// Daily win/concession series for the trailing 730 days before `now`.
  /// `None` when the firm won nothing inside the window.
  fn win_trend<'a>(
    &'a self,
    inn: &'a str,
    now: NaiveDateTime,
  ) -> impl Future<Output = Result<Option<WinTrend>, Self::Error>> + Send + 'a;

  /// Participation and win counts per calendar year of the session start.
  fn contracts_by_years<'a>(
    &'a self,
    inn: &'a str,
  ) -> impl Future<Output = Result<YearlyTrend, Self::Error>> + Send + 'a;

  /// Filtered session search plus KPI summary. Absent filter fields are
  /// wildcards; a default filter matches everything.
  fn search_sessions<'a>(
    &'a self,
    filter: &'a SessionFilter,
  ) -> impl Future<Output = Result<KpiReport, Self::Error>> + Send + 'a;

  /// Distinct filter values for the dashboard plus a first page of
  /// sessions.
  fn search_facets(
    &self,
  ) -> impl Future<Output = Result<Facets, Self::Error>> + Send + '_;

  // ── Subscriptions ─────────────────────────────────────────────────────

  /// Insert or replace a subscription; `last_sent_at` is cleared so the
  /// next scheduler pass delivers immediately.
  fn upsert_subscription(
    &self,
    sub: NewSubscription,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn list_subscriptions(
    &self,
  ) -> impl Future<Output = Result<Vec<Subscription>, Self::Error>> + Send + '_;

  /// Record a successful report delivery.
  fn mark_report_sent<'a>(
    &'a self,
    inn: &'a str,
    subscriber_id: i64,
    at: NaiveDateTime,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
