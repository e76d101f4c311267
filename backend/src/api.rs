//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::controls::ControlsData;
pub use crate::routes::controls::DropdownOption;
pub use crate::routes::controls::PayloadSlider;
pub use crate::routes::controls::SiteDropdown;
pub use crate::routes::controls::SliderMark;
pub use crate::routes::dashboard::ControlEvent;
pub use crate::routes::dashboard::DashboardUpdate;
pub use crate::routes::pie::OutcomeCounts;
pub use crate::routes::pie::PieChartData;
pub use crate::routes::pie::PieSlice;
pub use crate::routes::scatter::PayloadStats;
pub use crate::routes::scatter::ScatterChartData;
pub use crate::routes::scatter::ScatterPoint;
pub use crate::routes::scatter::ScatterSeries;

pub use crate::models::{
    ControlState, LaunchRecord, OutcomeClass, PayloadBounds, PayloadMass, PayloadRange,
    SiteSelection, ALL_SITES,
};
