//! ICS file parsing.
//!
//! Only the fields needed for reporting are read from each `VEVENT` block.

mod parse;

pub use parse::parse_calendar;
