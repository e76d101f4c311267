//! The immutable launch dataset.

use std::fmt::Write;

use super::checksum::calculate_checksum;
use super::error::{DatasetError, DatasetResult};
use crate::models::{LaunchRecord, PayloadBounds};

/// Launch records loaded once at startup.
///
/// Fields are private and there are no `&mut self` methods: after construction
/// the records, the site list and the payload bounds never change.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    bounds: PayloadBounds,
    checksum: String,
}

impl LaunchDataset {
    /// Build a dataset from parsed records and the checksum of their source.
    ///
    /// Fails with [`DatasetError::Empty`] when `records` is empty since the
    /// payload bounds would be undefined.
    pub fn new(records: Vec<LaunchRecord>, checksum: impl Into<String>) -> DatasetResult<Self> {
        let bounds = PayloadBounds::of(&records).ok_or_else(DatasetError::empty)?;

        // Distinct sites in order of first appearance.
        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.iter().any(|s| s == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        Ok(Self {
            records,
            sites,
            bounds,
            checksum: checksum.into(),
        })
    }

    /// Build a dataset from in-memory records, fingerprinting their contents.
    pub fn from_records(records: Vec<LaunchRecord>) -> DatasetResult<Self> {
        let mut canonical = String::new();
        for r in &records {
            let _ = writeln!(
                canonical,
                "{}\t{}\t{}\t{}",
                r.launch_site,
                r.payload_mass.value(),
                r.class,
                r.booster_version_category
            );
        }
        let checksum = calculate_checksum(canonical.as_bytes());
        Self::new(records, checksum)
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in order of first appearance.
    pub fn launch_sites(&self) -> &[String] {
        &self.sites
    }

    pub fn payload_bounds(&self) -> PayloadBounds {
        self.bounds
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }
}
