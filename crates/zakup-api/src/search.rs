//! Handlers for `GET /search` and `GET /facets`.
//!
//! Query params map directly to [`SessionFilter`] fields; every absent
//! parameter is a wildcard, so `/search` with no params returns the whole
//! dataset plus its KPI summary.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;
use zakup_core::{
  analytics::{Facets, KpiReport, SessionFilter},
  store::TenderStore,
};

use crate::error::ApiError;

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
  /// Prefix match on the classification code.
  pub kpgz_prefix:   Option<String>,
  pub winner_region: Option<String>,
  /// Inclusive bounds on the session end time.
  pub start_date:    Option<NaiveDate>,
  pub end_date:      Option<NaiveDate>,
  pub winner_inn:    Option<String>,
  pub customer_inn:  Option<String>,
  pub min_price:     Option<f64>,
  pub max_price:     Option<f64>,
  /// Only sessions in which this firm placed a bid.
  pub participant_inn: Option<String>,
}

/// `GET /search[?kpgz_prefix=...][&winner_region=...][&start_date=...]...`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<KpiReport>, ApiError>
where
  S: TenderStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let filter = SessionFilter {
    kpgz_prefix:     params.kpgz_prefix,
    winner_region:   params.winner_region,
    start_date:      params.start_date,
    end_date:        params.end_date,
    winner_inn:      params.winner_inn,
    customer_inn:    params.customer_inn,
    min_price:       params.min_price,
    max_price:       params.max_price,
    participant_inn: params.participant_inn,
  };

  let report = store
    .search_sessions(&filter)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(report))
}

/// `GET /facets` — distinct filter values for the dashboard dropdowns plus
/// a first page of sessions.
pub async fn facets<S>(State(store): State<Arc<S>>) -> Result<Json<Facets>, ApiError>
where
  S: TenderStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let facets = store
    .search_facets()
    .await
    .map_err(ApiError::store)?;
  Ok(Json(facets))
}
