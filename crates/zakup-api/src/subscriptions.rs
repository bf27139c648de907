//! Handlers for `/subscriptions` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/subscriptions` | All report subscriptions |
//! | `POST` | `/subscriptions` | Upsert-by-replace; period must be 1, 7 or 30 |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use zakup_core::{
  model::{NewSubscription, Subscription},
  store::TenderStore,
};

use crate::error::ApiError;

/// Delivery periods the bot offers: daily, weekly, monthly.
const ALLOWED_PERIODS: [i64; 3] = [1, 7, 30];

/// `GET /subscriptions`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Subscription>>, ApiError>
where
  S: TenderStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let subs = store
    .list_subscriptions()
    .await
    .map_err(ApiError::store)?;
  Ok(Json(subs))
}

#[derive(Debug, Deserialize)]
pub struct UpsertBody {
  pub inn:             String,
  pub subscriber_id:   i64,
  pub subscriber_name: Option<String>,
  pub period_days:     i64,
}

/// `POST /subscriptions` — body: `{"inn":"...","subscriber_id":42,"period_days":7}`
pub async fn upsert<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<UpsertBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TenderStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if !ALLOWED_PERIODS.contains(&body.period_days) {
    return Err(ApiError::BadRequest(format!(
      "period_days must be one of {ALLOWED_PERIODS:?}, got {}",
      body.period_days
    )));
  }
  if body.inn.is_empty() {
    return Err(ApiError::BadRequest("inn must not be empty".into()));
  }

  store
    .upsert_subscription(NewSubscription {
      inn:             body.inn,
      subscriber_id:   body.subscriber_id,
      subscriber_name: body.subscriber_name,
      period_days:     body.period_days,
    })
    .await
    .map_err(ApiError::store)?;

  Ok(StatusCode::CREATED)
}
