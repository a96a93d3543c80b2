//! Record counts per normalized status.

use std::collections::BTreeMap;

use crate::models::{StatusCount, normalize_status};

/// Folds grouped counts into a map keyed by trimmed status.
///
/// Raw labels that collapse to the same trimmed value have their counts
/// summed. Labels that are blank after trimming are dropped.
///
/// ```
/// use mindscope_core::distribution::aggregate;
/// use mindscope_core::StatusCount;
///
/// let counts = aggregate(vec![
///     StatusCount::new("Anxiety", 1),
///     StatusCount::new(" Anxiety ", 1),
/// ]);
/// assert_eq!(counts["Anxiety"], 2);
/// ```
pub fn aggregate<I>(rows: I) -> BTreeMap<String, i64>
where
    I: IntoIterator<Item = StatusCount>,
{
    let mut totals: BTreeMap<String, i64> = BTreeMap::new();
    for row in rows {
        let Some(status) = normalize_status(&row.status) else {
            continue;
        };
        *totals.entry(status.to_string()).or_insert(0) += row.count;
    }
    totals
}
