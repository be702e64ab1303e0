//! Line-oriented `VEVENT` extraction.

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, warn};

use crate::date::{parse_ics_date, parse_ics_time};
use crate::error::{IcsoutError, IcsoutResult};
use crate::event::EventRecord;
use crate::sequence::EventSequence;

/// Parse ICS content into an ordered sequence with one record per `VEVENT`.
///
/// Fields are read only inside `VEVENT` blocks (or at the top level of files
/// that omit `BEGIN` lines), so `VTIMEZONE` and nested `VALARM` properties are
/// ignored. A finished block without a usable `DTSTART` is a `MalformedRecord`.
pub fn parse_calendar(content: &str) -> IcsoutResult<EventSequence> {
    let mut sequence = EventSequence::new();
    let mut components: Vec<String> = Vec::new();
    let mut pending: Option<PendingEvent> = None;

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let Some((key, value)) = split_property(raw) else {
            continue;
        };

        match key.as_str() {
            "BEGIN" => {
                let name = value.trim().to_ascii_uppercase();
                if name == "VEVENT" {
                    pending = Some(PendingEvent::default());
                }
                components.push(name);
            }
            "END" => {
                let name = value.trim().to_ascii_uppercase();
                if name == "VEVENT" {
                    let record = pending.take().unwrap_or_default().finish(line_no)?;
                    debug!(line = line_no, %record, "parsed event");
                    sequence.insert(record);
                }
                if components.last() == Some(&name) {
                    components.pop();
                }
            }
            _ if in_event_scope(&components) => {
                pending
                    .get_or_insert_with(PendingEvent::default)
                    .apply(&key, value, line_no)?;
            }
            _ => {}
        }
    }

    debug!(count = sequence.len(), "parsed calendar");
    Ok(sequence)
}

/// Split `NAME;PARAM=...:value` into the upper-cased name and the raw value.
fn split_property(line: &str) -> Option<(String, &str)> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (name, value) = line.split_once(':')?;
    let name = name.split(';').next().unwrap_or(name).trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_ascii_uppercase(), value))
}

fn in_event_scope(components: &[String]) -> bool {
    match components.last() {
        Some(name) if name == "VEVENT" => true,
        _ => components.iter().all(|c| c == "VCALENDAR"),
    }
}

/// Fields collected for the `VEVENT` currently being read.
#[derive(Debug, Default)]
struct PendingEvent {
    start: Option<(NaiveDate, NaiveTime)>,
    end: Option<(NaiveDate, NaiveTime)>,
    summary: String,
    location: String,
    until: Option<NaiveDate>,
}

impl PendingEvent {
    fn apply(&mut self, key: &str, value: &str, line: usize) -> IcsoutResult<()> {
        match key {
            "DTSTART" => self.start = Some(parse_date_time(key, value, line)?),
            "DTEND" => self.end = Some(parse_date_time(key, value, line)?),
            "SUMMARY" => self.summary = value.to_string(),
            "LOCATION" => self.location = value.to_string(),
            "RRULE" => self.until = parse_until(value, line)?,
            _ => {}
        }
        Ok(())
    }

    fn finish(self, line: usize) -> IcsoutResult<EventRecord> {
        let (start_date, start_time) = self.start.ok_or_else(|| IcsoutError::MalformedRecord {
            line,
            reason: "missing DTSTART".to_string(),
        })?;
        let (end_date, end_time) = self.end.unwrap_or((start_date, start_time));

        Ok(EventRecord {
            start_date,
            start_time,
            end_date,
            end_time,
            summary: self.summary,
            location: self.location,
            recurrence_until: self.until,
        })
    }
}

/// Split `YYYYMMDDTHHMMSS` at the `T`; a bare date starts at midnight.
fn parse_date_time(key: &str, value: &str, line: usize) -> IcsoutResult<(NaiveDate, NaiveTime)> {
    let value = value.trim();
    let (date_part, time_part) = match value.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (value, None),
    };

    let date = parse_ics_date(date_part);
    let time = match time_part {
        Some(t) => parse_ics_time(t),
        None => Some(NaiveTime::MIN),
    };

    match (date, time) {
        (Some(date), Some(time)) => Ok((date, time)),
        _ => Err(IcsoutError::MalformedRecord {
            line,
            reason: format!("invalid {key} value '{value}'"),
        }),
    }
}

/// Extract the `UNTIL=` date of a repeat rule; other rule parts are ignored.
fn parse_until(value: &str, line: usize) -> IcsoutResult<Option<NaiveDate>> {
    let Some(until) = value
        .split(';')
        .find_map(|part| part.trim().strip_prefix("UNTIL="))
    else {
        warn!(line, rule = value, "ignoring repeat rule without UNTIL");
        return Ok(None);
    };

    parse_ics_date(until)
        .map(Some)
        .ok_or_else(|| IcsoutError::MalformedRecord {
            line,
            reason: format!("invalid UNTIL value '{until}'"),
        })
}
