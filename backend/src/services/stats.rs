use crate::api::PayloadStats;
use crate::models::LaunchRecord;

/// Payload summary for the rows shown on the scatter chart.
pub fn payload_stats(rows: &[&LaunchRecord]) -> PayloadStats {
    let mut masses: Vec<f64> = rows.iter().map(|r| r.payload_mass.value()).collect();
    masses.sort_by(f64::total_cmp);

    let (Some(&min), Some(&max)) = (masses.first(), masses.last()) else {
        return PayloadStats::default();
    };

    let count = masses.len();
    let n = count as f64;
    let sum: f64 = masses.iter().sum();
    let mean = sum / n;

    let mid = count / 2;
    let median = if count % 2 == 1 {
        masses[mid]
    } else {
        (masses[mid - 1] + masses[mid]) / 2.0
    };

    // population variance
    let std_dev = (masses.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / n).sqrt();

    PayloadStats {
        count,
        mean,
        median,
        std_dev,
        min,
        max,
        sum,
    }
}
