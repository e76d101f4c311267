//! Control descriptions derived from the dataset.

use crate::api::{
    ControlsData, DropdownOption, PayloadSlider, SiteDropdown, SliderMark,
};
use crate::db::config::ControlSettings;
use crate::db::LaunchDataset;
use crate::models::{PayloadBounds, PayloadRange, SiteSelection, ALL_SITES_LABEL};

pub const SITE_PLACEHOLDER: &str = "Select a Launch Site here";

/// Dropdown options: `All Sites` first, then each site in dataset order.
pub fn site_options(dataset: &LaunchDataset) -> Vec<DropdownOption> {
    std::iter::once(DropdownOption {
        label: ALL_SITES_LABEL.to_string(),
        value: SiteSelection::All,
    })
    .chain(dataset.launch_sites().iter().map(|site| DropdownOption {
        label: site.clone(),
        value: SiteSelection::site(site.clone()),
    }))
    .collect()
}

/// Upper bound on the number of slider marks.
pub const MAX_SLIDER_MARKS: i64 = 200;

/// Marks every `step` kilograms from the truncated minimum to the truncated
/// maximum, inclusive of both when they fall on the grid.
///
/// When the range would need more than [`MAX_SLIDER_MARKS`] marks, the stride
/// widens to a multiple of `step`.
pub fn slider_marks(bounds: PayloadBounds, step: u32) -> Vec<SliderMark> {
    let start = bounds.min.value().trunc() as i64;
    let end = bounds.max.value().trunc() as i64;
    let step = i64::from(step.max(1));

    let intervals = end.saturating_sub(start).max(0) / step;
    let stride = step.saturating_mul(intervals / MAX_SLIDER_MARKS + 1);

    let mut marks = Vec::new();
    let mut next = Some(start);
    while let Some(value) = next.filter(|v| *v <= end) {
        marks.push(SliderMark {
            value,
            label: value.to_string(),
        });
        next = value.checked_add(stride);
    }
    marks
}

/// Describe both controls and the page header.
pub fn describe_controls(dataset: &LaunchDataset, settings: &ControlSettings) -> ControlsData {
    let bounds = dataset.payload_bounds();

    ControlsData {
        page_title: settings.page_title.clone(),
        site_dropdown: SiteDropdown {
            options: site_options(dataset),
            default_value: SiteSelection::All,
            placeholder: SITE_PLACEHOLDER.to_string(),
            searchable: true,
        },
        payload_slider: PayloadSlider {
            min: bounds.min,
            max: bounds.max,
            step: settings.payload_step,
            default_value: PayloadRange::full(bounds),
            marks: slider_marks(bounds, settings.payload_step),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchRecord, OutcomeClass};

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, OutcomeClass::Failure, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, OutcomeClass::Success, "B4"),
            LaunchRecord::new("CCAFS LC-40", 4000.0, OutcomeClass::Success, "FT"),
        ])
        .unwrap()
    }

    #[test]
    fn test_site_options() {
        let options = site_options(&dataset());
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].label, "All Sites");
        assert_eq!(options[0].value, SiteSelection::All);
        assert_eq!(options[1].value, SiteSelection::site("CCAFS LC-40"));
        assert_eq!(options[2].label, "VAFB SLC-4E");
    }

    #[test]
    fn test_slider_marks() {
        let bounds = PayloadBounds {
            min: 0.0.into(),
            max: 9600.0.into(),
        };
        let marks = slider_marks(bounds, 1000);
        assert_eq!(marks.len(), 10);
        assert_eq!(marks[0].value, 0);
        assert_eq!(marks[9].value, 9000);
        assert_eq!(marks[3].label, "3000");
    }

    #[test]
    fn test_slider_marks_fractional_bounds() {
        let bounds = PayloadBounds {
            min: 362.5.into(),
            max: 2362.9.into(),
        };
        let values: Vec<i64> = slider_marks(bounds, 1000).iter().map(|m| m.value).collect();
        assert_eq!(values, vec![362, 1362, 2362]);
    }

    #[test]
    fn test_slider_marks_near_integer_limit() {
        let bounds = PayloadBounds {
            min: 9.223372036854775e18.into(),
            max: 1e19.into(),
        };
        let marks = slider_marks(bounds, 1000);
        assert!(!marks.is_empty());
        assert!(marks.len() as i64 <= MAX_SLIDER_MARKS);
        assert!(marks.windows(2).all(|w| w[0].value < w[1].value));
    }

    #[test]
    fn test_slider_marks_wide_range_is_capped() {
        let bounds = PayloadBounds {
            min: 0.0.into(),
            max: 1e12.into(),
        };
        let marks = slider_marks(bounds, 1000);
        assert!(marks.len() as i64 <= MAX_SLIDER_MARKS);
        assert!(marks.len() > 1);
        assert_eq!(marks[0].value, 0);
        assert_eq!(marks[1].value % 1000, 0);
    }

    #[test]
    fn test_slider_marks_single_point() {
        let bounds = PayloadBounds {
            min: 500.0.into(),
            max: 500.0.into(),
        };
        let values: Vec<i64> = slider_marks(bounds, 1000).iter().map(|m| m.value).collect();
        assert_eq!(values, vec![500]);
    }

    #[test]
    fn test_describe_controls() {
        let controls = describe_controls(&dataset(), &ControlSettings::default());
        assert_eq!(controls.page_title, "SpaceX Launch Records Dashboard");
        assert_eq!(controls.site_dropdown.default_value, SiteSelection::All);
        assert_eq!(controls.site_dropdown.placeholder, "Select a Launch Site here");
        assert!(controls.site_dropdown.searchable);
        assert_eq!(controls.payload_slider.step, 1000);
        assert_eq!(controls.payload_slider.min.value(), 0.0);
        assert_eq!(controls.payload_slider.max.value(), 9600.0);
        assert_eq!(controls.payload_slider.default_value, PayloadRange::new(0.0, 9600.0));
    }
}
