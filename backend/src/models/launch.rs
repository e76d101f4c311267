use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary launch outcome as recorded in the `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OutcomeClass {
    Failure,
    Success,
}

/// Raised when a `class` value is neither 0 nor 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid outcome class {0}, expected 0 or 1")]
pub struct InvalidOutcomeClass(pub u8);

impl OutcomeClass {
    pub fn value(self) -> u8 {
        match self {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = InvalidOutcomeClass;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(InvalidOutcomeClass(other)),
        }
    }
}

impl From<OutcomeClass> for u8 {
    fn from(class: OutcomeClass) -> Self {
        class.value()
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Payload mass carried by a launch.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct PayloadMass(qtty::Kilograms);

impl PayloadMass {
    pub fn new<V: Into<qtty::Kilograms>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw mass in kilograms.
    pub fn value(&self) -> f64 {
        self.0.value()
    }
}

impl From<f64> for PayloadMass {
    fn from(v: f64) -> Self {
        PayloadMass::new(qtty::Kilograms::new(v))
    }
}

/// One historical launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass: PayloadMass,
    pub class: OutcomeClass,
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass: impl Into<PayloadMass>,
        class: OutcomeClass,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass: payload_mass.into(),
            class,
            booster_version_category: booster_version_category.into(),
        }
    }
}

/// Global payload bounds of a dataset, fixed at load time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: PayloadMass,
    pub max: PayloadMass,
}

impl PayloadBounds {
    /// Bounds of `records`, or `None` when there are no records.
    pub fn of(records: &[LaunchRecord]) -> Option<Self> {
        let mut masses = records.iter().map(|r| r.payload_mass.value());
        let first = masses.next()?;
        let (min, max) = masses.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m)));
        Some(Self {
            min: min.into(),
            max: max.into(),
        })
    }
}
