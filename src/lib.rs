//! loupe-graph: throughput line graphs over a pluggable charting backend.
//!
//! This crate adapts a charting backend to named render targets: it builds a
//! declarative line-graph spec, mounts it where the host says the target
//! lives, and hands back an owned handle whose destruction tears the chart
//! down. Both consumed interfaces are traits, so tests run against in-memory
//! fakes.

pub mod api;
pub mod backend;
pub mod core;
pub mod error;
pub mod host;
pub mod telemetry;

pub use api::{GraphAdapter, THROUGHPUT_SERIES_LABEL};
pub use error::{GraphError, GraphResult};
