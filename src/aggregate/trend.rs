use crate::models::{Scan, TrendPoint};

/// Default number of scans shown in the history trend.
pub const TREND_WINDOW: usize = 10;

/// Emits one point per scan for the last `window` scans in storage order.
///
/// This is a suffix slice of the stored sequence, never a sort by
/// scan_time, and the points carry the scans' own precomputed counts.
pub fn build_trend(scans: &[Scan], window: usize) -> Vec<TrendPoint> {
    let start = scans.len().saturating_sub(window);
    scans[start..]
        .iter()
        .map(|scan| TrendPoint {
            scan_time: scan.scan_time.clone(),
            high: scan.high,
            low: scan.low,
        })
        .collect()
}
