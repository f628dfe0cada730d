use crate::types::StateRecord;

/// Median income averaged across records, weighted by household count.
///
/// Returns `None` when there is nothing to weight: an empty slice, or records
/// whose households all sum to zero.
///
/// Each record contributes `(households / total) * median_income`, and the
/// contributions are summed smallest first. The result does not depend on the
/// order of `records`, and a single record yields its own income exactly.
pub fn weighted_average(records: &[StateRecord]) -> Option<f64> {
    let total: u64 = records.iter().map(|r| r.households).sum();
    if total == 0 {
        return None;
    }

    let total = total as f64;
    let mut contributions: Vec<f64> = records
        .iter()
        .filter(|r| r.households > 0)
        .map(|r| (r.households as f64 / total) * r.median_income)
        .collect();
    contributions.sort_by(f64::total_cmp);

    Some(contributions.iter().sum())
}
