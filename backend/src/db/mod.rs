//! Dataset storage for launch records.
//!
//! The launch file is read exactly once per process into an immutable
//! [`LaunchDataset`] held in a process-wide singleton.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (HTTP handlers, Reactive Binder)     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - filtering, charts          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  LaunchDataset (dataset.rs) - read-only after load      │
//! │  loaded by loader.rs from CSV                           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//! ```ignore
//! use launch_dash::db;
//!
//! db::init_dataset("spacex_launch_dash.csv")?;
//! let dataset = db::get_dataset()?;
//! println!("{} launches", dataset.len());
//! ```

pub mod checksum;
pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;

pub use checksum::calculate_checksum;
pub use config::DashboardConfig;
pub use dataset::LaunchDataset;
pub use error::{DatasetError, DatasetResult, ErrorContext};
pub use loader::{load_dataset, parse_launch_csv, REQUIRED_COLUMNS};

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Global dataset instance initialized once per process.
static DATASET: OnceLock<Arc<LaunchDataset>> = OnceLock::new();

/// Load the launch file into the global dataset singleton.
///
/// The first successful call wins; later calls return the already-loaded
/// dataset without touching `path`.
pub fn init_dataset<P: AsRef<Path>>(path: P) -> Result<&'static Arc<LaunchDataset>> {
    if let Some(existing) = DATASET.get() {
        return Ok(existing);
    }

    let path = path.as_ref();
    let dataset = load_dataset(path)
        .with_context(|| format!("Failed to load launch dataset from {}", path.display()))?;
    let _ = DATASET.set(Arc::new(dataset));

    DATASET
        .get()
        .context("Dataset singleton was not set after loading")
}

/// Get a reference to the global dataset instance.
pub fn get_dataset() -> DatasetResult<&'static Arc<LaunchDataset>> {
    DATASET.get().ok_or_else(|| DatasetError::NotInitialized {
        message: "Call init_dataset() first.".to_string(),
    })
}
