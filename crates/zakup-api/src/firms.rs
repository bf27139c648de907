//! Handlers for `/firms` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/firms` | All firms |
//! | `GET`  | `/firms/:inn` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use zakup_core::{model::Firm, store::TenderStore};

use crate::error::ApiError;

/// `GET /firms`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Firm>>, ApiError>
where
  S: TenderStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let firms = store
    .list_firms()
    .await
    .map_err(ApiError::store)?;
  Ok(Json(firms))
}

/// `GET /firms/:inn`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(inn): Path<String>,
) -> Result<Json<Firm>, ApiError>
where
  S: TenderStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let firm = store
    .get_firm(&inn)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("firm {inn} not found")))?;
  Ok(Json(firm))
}
