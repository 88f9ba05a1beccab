//! Award category listing service.
//!
//! An axum JSON API serving award category rows from Postgres, plus the
//! listing-view state machine that consumes it (load, search filtering,
//! card rendering).

pub mod api;
pub mod config;
pub mod store;
pub mod view;
