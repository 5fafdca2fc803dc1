//! rent-chart: interactive rent-over-time line chart.
//!
//! The crate loads a `date,rent` CSV into a sorted series, fits a time scale
//! and a rent scale to it, and resolves pointer positions to the nearest
//! sample for a hover marker and tooltip. Drawing goes through a
//! backend-agnostic [`render::RenderFrame`] so the interaction logic stays
//! testable without a display.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartEngine, ChartEngineConfig, ChartState};
pub use error::{ChartError, ChartResult};
