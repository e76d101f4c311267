//! User-selectable control state.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::launch::{PayloadBounds, PayloadMass};

/// Selector value meaning "no site filter".
pub const ALL_SITES: &str = "ALL";

/// Human-readable label for [`SiteSelection::All`].
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Site dropdown value: either the `ALL` sentinel or one launch site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn site(name: impl Into<String>) -> Self {
        Self::from(name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    /// Whether a row at `launch_site` passes this selection.
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => site == launch_site,
        }
    }

    /// Wire value: `ALL` or the site name.
    pub fn as_value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    /// Name used in chart titles.
    pub fn display_name(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES_LABEL,
            SiteSelection::Site(site) => site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Closed payload interval `[low, high]` in kilograms.
///
/// An inverted interval (`low > high`) is representable and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: PayloadMass,
    pub high: PayloadMass,
}

impl PayloadRange {
    pub fn new(low: impl Into<PayloadMass>, high: impl Into<PayloadMass>) -> Self {
        Self {
            low: low.into(),
            high: high.into(),
        }
    }

    /// The full dataset range.
    pub fn full(bounds: PayloadBounds) -> Self {
        Self {
            low: bounds.min,
            high: bounds.max,
        }
    }

    pub fn contains(&self, mass: PayloadMass) -> bool {
        self.low.value() <= mass.value() && mass.value() <= self.high.value()
    }

    pub fn is_inverted(&self) -> bool {
        self.low.value() > self.high.value()
    }
}

/// The two pieces of user-selected state driving the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl ControlState {
    /// Defaults: all sites, full payload range.
    pub fn initial(bounds: PayloadBounds) -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: PayloadRange::full(bounds),
        }
    }
}
