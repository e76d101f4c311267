use serde::{Deserialize, Serialize};

use crate::models::{PayloadMass, PayloadRange, SiteSelection};

// =========================================================
// Control description types + route
// =========================================================

/// Dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: SiteSelection,
}

/// Site selector description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDropdown {
    pub options: Vec<DropdownOption>,
    pub default_value: SiteSelection,
    pub placeholder: String,
    pub searchable: bool,
}

/// Labelled tick on the payload slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: i64,
    pub label: String,
}

/// Payload range selector description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSlider {
    pub min: PayloadMass,
    pub max: PayloadMass,
    pub step: u32,
    pub default_value: PayloadRange,
    pub marks: Vec<SliderMark>,
}

/// Everything the page needs to render its controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlsData {
    pub page_title: String,
    pub site_dropdown: SiteDropdown,
    pub payload_slider: PayloadSlider,
}

/// Route path for control descriptions
pub const CONTROLS_PATH: &str = "/controls";
