//! Giglink — workflow core of a marketplace connecting job posters
//! with helpers.
//!
//! The library owns the job lifecycle state machine (open → assigned →
//! completed, or cancelled), application arbitration, identity and
//! document verification gating, and notification emission. Storage is
//! an in-memory relational store behind a transaction boundary; the
//! HTTP layer, auth, and file uploads live elsewhere.

pub mod config;
pub mod error;
pub mod market;
pub mod model;
pub mod store;
pub mod workflow;

pub use config::MarketConfig;
pub use error::{GiglinkError, Result};
pub use market::Market;
