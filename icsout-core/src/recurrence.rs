//! Weekly recurrence expansion.
//!
//! A seed repeats every 7 days after its own start date. The terminator marks
//! the start of the final week's window, so the last generated occurrence falls
//! on or before `recurrence_until - 7 days`.

use chrono::NaiveDate;
use tracing::debug;

use crate::date::shift;
use crate::event::EventRecord;
use crate::sequence::EventSequence;

const WEEK_DAYS: i64 = 7;

/// The occurrences generated by `seed`, excluding the seed itself.
///
/// Returns nothing for records without a terminator.
pub fn occurrences(seed: &EventRecord) -> Vec<EventRecord> {
    let Some(until) = seed.recurrence_until else {
        return Vec::new();
    };

    let last = shift(until, -WEEK_DAYS);
    let mut generated = Vec::new();
    let mut current = next_week(seed.start_date);

    while let Some(date) = current.filter(|d| *d <= last) {
        generated.push(seed.occurrence_on(date));
        current = next_week(date);
    }

    generated
}

fn next_week(date: NaiveDate) -> Option<NaiveDate> {
    let next = shift(date, WEEK_DAYS);
    (next > date).then_some(next)
}

/// Insert the occurrences of every seed in `sequence`.
///
/// Seeds are visited in sequence order. Generated records are never seeds,
/// so expansion does not recurse.
pub fn expand(sequence: &mut EventSequence) -> usize {
    let seeds: Vec<EventRecord> = sequence.iter().filter(|e| e.is_seed()).cloned().collect();

    let mut added = 0;
    for seed in &seeds {
        let generated = occurrences(seed);
        debug!(
            summary = %seed.summary,
            start = %seed.start_date,
            count = generated.len(),
            "expanded weekly event"
        );
        added += generated.len();
        for record in generated {
            sequence.insert(record);
        }
    }

    added
}
