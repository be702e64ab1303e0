//! Core types for icsout.
//!
//! This crate turns the text of an .ics file into a chronologically ordered
//! sequence of event occurrences and renders a day-grouped report from it:
//! - `ics` extracts `EventRecord`s from `VEVENT` blocks
//! - `recurrence` expands weekly-repeating seeds into their occurrences
//! - `sequence` keeps every occurrence ordered by start date and time
//! - `report` classifies day groups and renders the output lines

pub mod config;
pub mod date;
pub mod date_range;
pub mod error;
pub mod event;
pub mod ics;
pub mod pipeline;
pub mod recurrence;
pub mod report;
pub mod sequence;

pub use date_range::DateRange;
pub use error::{IcsoutError, IcsoutResult};
pub use event::EventRecord;
pub use sequence::EventSequence;
