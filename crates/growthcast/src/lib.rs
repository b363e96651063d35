//! Terminal front end for the growth-forecast service.
//!
//! Renders the forecast parameter set as an editable form (population
//! counts, per-year growth-rate sliders, pricing and cost inputs) and
//! submits it to the service, which recomputes the forecast and returns a
//! yearly summary. All computation lives in the service; this crate only
//! manages the local working copy and the fetch/submit round trips.

pub mod app;
pub mod components;
pub mod fields;
pub mod logging;
pub mod screens;
pub mod state;
pub mod util;
pub mod worker;

#[cfg(test)]
mod tests;

pub use app::App;
pub use logging::init_logging;
