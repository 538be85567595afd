//! Peak occupancy detection.
//!
//! Entry and exit times are sorted independently and swept like a merge.
//! Which exit belongs to which entry is irrelevant: only the number of
//! people inside at any instant matters, so the dataset is treated as n
//! arrival events and n departure events on one timeline.
//!
//! An arrival at the same minute as a departure counts as an overlap.

use crate::domain::model::{Minutes, PeakResult, VisitorDataset};

/// Returns the highest simultaneous occupancy and the `(entry, exit)` pair
/// that was current when it was first reached. Ties keep the earliest window.
///
/// Runs in O(n log n) and allocates two vectors of length n.
pub fn find_peak(dataset: &VisitorDataset) -> PeakResult {
    let (mut entries, mut exits): (Vec<Minutes>, Vec<Minutes>) = dataset
        .visits()
        .iter()
        .map(|visit| (visit.entry, visit.exit))
        .unzip();

    entries.sort_unstable();
    exits.sort_unstable();

    let n = entries.len();
    // signed: inverted visits from lenient input can consume more exits
    // than entries
    let mut occupancy: i64 = 1;
    let mut result = PeakResult {
        window_start: entries[0],
        window_end: exits[0],
        peak_count: 1,
    };

    let (mut i, mut j) = (1, 0);
    while i < n && j < n {
        if entries[i] <= exits[j] {
            occupancy += 1;
            if occupancy > result.peak_count as i64 {
                result.peak_count += 1;
                result.window_start = entries[i];
                result.window_end = exits[j];
            }
            i += 1;
        } else {
            occupancy -= 1;
            j += 1;
        }
    }

    tracing::debug!(
        "Peak of {} visitors between {} and {} minutes",
        result.peak_count,
        result.window_start,
        result.window_end
    );
    result
}
