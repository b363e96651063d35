//! Client-side model and HTTP bindings for the growth-forecast service.
//!
//! The service owns all forecast computation; this crate only carries the
//! parameter set a front end edits and the two calls that synchronize it:
//! fetching the stored parameters and submitting an updated set, which
//! returns a recomputed yearly summary.

pub mod api;
pub mod params;

pub use api::{ApiError, ForecastClient, UpdateResponse, YearlySummary};
pub use params::{ActorType, GROWTH_YEARS, ParameterSet};
