//! Service layer for filtering, aggregation and chart construction.
//!
//! Everything here is a pure function of the immutable dataset and the current
//! control state; the HTTP layer and the [`dashboard::Dashboard`] binder are
//! thin callers.

pub mod charts;
pub mod controls;
pub mod dashboard;
pub mod figure;
pub mod filtering;
pub mod stats;

pub use charts::{build_pie_chart, build_scatter_chart};
pub use controls::describe_controls;
pub use dashboard::{pie_edge, scatter_edge, Dashboard};
pub use figure::{pie_figure, scatter_figure};
pub use filtering::{compute_pie_data, compute_scatter_data};
pub use stats::payload_stats;
