//! Event record types.
//!
//! An `EventRecord` is one concrete occurrence of a calendar event. A record
//! that carries `recurrence_until` is the seed of a weekly series and is itself
//! the first occurrence of that series.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use crate::date::{shift, to_sortable};

/// A single calendar occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    /// Display only; events are assumed to end on their start date.
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
    pub summary: String,
    pub location: String,
    /// Last day of a weekly repeat, set only on seed records.
    pub recurrence_until: Option<NaiveDate>,
}

impl EventRecord {
    pub fn is_seed(&self) -> bool {
        self.recurrence_until.is_some()
    }

    /// Copy of this record moved to `date`.
    ///
    /// Occurrences never repeat themselves, so the copy has no terminator.
    pub fn occurrence_on(&self, date: NaiveDate) -> Self {
        let offset = (date - self.start_date).num_days();
        EventRecord {
            start_date: date,
            start_time: self.start_time,
            end_date: shift(self.end_date, offset),
            end_time: self.end_time,
            summary: self.summary.clone(),
            location: self.location.clone(),
            recurrence_until: None,
        }
    }

    /// Compare by start date, then start time.
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        to_sortable(self.start_date)
            .cmp(&to_sortable(other.start_date))
            .then(self.start_time.cmp(&other.start_time))
    }

    pub fn same_day_as(&self, other: &Self) -> bool {
        self.start_date == other.start_date
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EVENT: {}T{} {}T{} '{}' '{}'",
            self.start_date.format("%Y%m%d"),
            self.start_time.format("%H%M"),
            self.end_date.format("%Y%m%d"),
            self.end_time.format("%H%M"),
            self.summary,
            self.location
        )?;
        if let Some(until) = self.recurrence_until {
            write!(f, " '{}'", until.format("%Y%m%d"))?;
        }
        Ok(())
    }
}
