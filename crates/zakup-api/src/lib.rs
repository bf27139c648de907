//! JSON REST API for the zakup tender analytics store.
//!
//! Exposes an axum [`Router`] backed by any [`zakup_core::store::TenderStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", zakup_api::api_router(store.clone()))
//! ```

pub mod analytics;
pub mod error;
pub mod firms;
pub mod search;
pub mod sessions;
pub mod subscriptions;

use std::sync::Arc;

use axum::{Router, routing::get};
use zakup_core::store::TenderStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: TenderStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Entities
    .route("/firms", get(firms::list::<S>))
    .route("/firms/{inn}", get(firms::get_one::<S>))
    .route("/sessions", get(sessions::list::<S>))
    .route("/sessions/{id}/items", get(sessions::items::<S>))
    // Analytics
    .route("/winners", get(analytics::winners::<S>))
    .route("/competitors", get(analytics::competitors::<S>))
    .route("/wins_dots", get(analytics::wins_dots::<S>))
    .route("/contracts_by_years", get(analytics::contracts_by_years::<S>))
    // Filtered search
    .route("/search", get(search::handler::<S>))
    .route("/facets", get(search::facets::<S>))
    // Report subscriptions
    .route(
      "/subscriptions",
      get(subscriptions::list::<S>).post(subscriptions::upsert::<S>),
    )
    .with_state(store)
}
