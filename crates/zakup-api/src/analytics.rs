//! Handlers for the derived-metrics endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/winners` | Optional `?limit=` (default 100) |
//! | `GET`  | `/competitors` | `?inn=` required |
//! | `GET`  | `/wins_dots` | `?inn=` required; "no data" marker when the firm won nothing recently |
//! | `GET`  | `/contracts_by_years` | `?inn=` required |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use zakup_core::{
  analytics::{CompetitorReport, WinTrend, WinnerRow, YearlyTrend},
  store::TenderStore,
};

use crate::error::ApiError;

const DEFAULT_WINNERS_LIMIT: usize = 100;

// ─── Winners ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct WinnersParams {
  pub limit: Option<usize>,
}

/// `GET /winners[?limit=<n>]`
pub async fn winners<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<WinnersParams>,
) -> Result<Json<Vec<WinnerRow>>, ApiError>
where
  S: TenderStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let rows = store
    .top_winners(params.limit.unwrap_or(DEFAULT_WINNERS_LIMIT))
    .await
    .map_err(ApiError::store)?;
  Ok(Json(rows))
}

// ─── Competitors ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FirmParams {
  pub inn: String,
}

/// `GET /competitors?inn=<inn>`
pub async fn competitors<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<FirmParams>,
) -> Result<Json<CompetitorReport>, ApiError>
where
  S: TenderStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let report = store
    .competitors(&params.inn)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(report))
}

// ─── Win trend ───────────────────────────────────────────────────────────────

/// Either the trend series or an explicit "no data" marker — the original
/// dashboard distinguishes an empty chart from an unknown firm.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum WinsDotsResponse {
  Data(WinTrend),
  NoData { message: String },
}

/// `GET /wins_dots?inn=<inn>`
pub async fn wins_dots<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<FirmParams>,
) -> Result<Json<WinsDotsResponse>, ApiError>
where
  S: TenderStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let now = chrono::Local::now().naive_local();
  let trend = store
    .win_trend(&params.inn, now)
    .await
    .map_err(ApiError::store)?;

  Ok(Json(match trend {
    Some(t) => WinsDotsResponse::Data(t),
    None => WinsDotsResponse::NoData {
      message: format!("no wins in the last two years for {}", params.inn),
    },
  }))
}

// ─── Yearly trend ────────────────────────────────────────────────────────────

/// `GET /contracts_by_years?inn=<inn>`
pub async fn contracts_by_years<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<FirmParams>,
) -> Result<Json<YearlyTrend>, ApiError>
where
  S: TenderStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let trend = store
    .contracts_by_years(&params.inn)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(trend))
}
