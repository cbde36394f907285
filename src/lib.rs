//! Stockroom - fixed asset management backend
//!
//! A record-keeping HTTP API for tracking organizational fixed assets:
//! one POST and one GET per record kind (asset, location, assignment,
//! audit), backed by MongoDB. Records are insert-only; there are no
//! update or delete endpoints.

pub mod config;
pub mod db;
pub mod routes;
pub mod server;
pub mod types;

pub use config::Args;
pub use server::{run, AppState};
pub use types::{Result, StockroomError};
