//! Handlers for `/sessions` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/sessions` | All sessions with customer, classification and concession |
//! | `GET`  | `/sessions/:id/items` | Line items of one session |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use zakup_core::{
  model::{LineItem, SessionDetail},
  store::TenderStore,
};

use crate::error::ApiError;

/// `GET /sessions`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<SessionDetail>>, ApiError>
where
  S: TenderStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let sessions = store
    .list_sessions()
    .await
    .map_err(ApiError::store)?;
  Ok(Json(sessions))
}

/// `GET /sessions/:id/items`
pub async fn items<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Vec<LineItem>>, ApiError>
where
  S: TenderStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let items = store
    .line_items(id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(items))
}
