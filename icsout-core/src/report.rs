//! Day-grouped text report.
//!
//! Each day opens with its formatted date and a dashed underline, followed by
//! one line per event. Days are separated by a single blank line and nothing
//! trails the final event.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::date::format_display;
use crate::date_range::DateRange;
use crate::event::EventRecord;
use crate::sequence::EventSequence;

/// Position of a record within its day group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRole {
    /// The only record on its date.
    Singleton,
    First,
    Mid,
    Last,
}

impl GroupRole {
    fn from_neighbors(same_as_prev: bool, same_as_next: bool) -> Self {
        match (same_as_prev, same_as_next) {
            (false, false) => GroupRole::Singleton,
            (false, true) => GroupRole::First,
            (true, true) => GroupRole::Mid,
            (true, false) => GroupRole::Last,
        }
    }

    /// Whether the day header is printed before this record.
    pub fn opens_day(self) -> bool {
        matches!(self, GroupRole::Singleton | GroupRole::First)
    }

    /// Whether this record ends its day group.
    pub fn closes_day(self) -> bool {
        matches!(self, GroupRole::Singleton | GroupRole::Last)
    }
}

/// Classify the record at `index` against its neighbors in the full sequence.
pub fn classify(sequence: &EventSequence, index: usize) -> Option<GroupRole> {
    let event = sequence.get(index)?;
    let (prev, next) = sequence.neighbors(index);
    let same_as_prev = prev.is_some_and(|p| p.same_day_as(event));
    let same_as_next = next.is_some_and(|n| n.same_day_as(event));
    Some(GroupRole::from_neighbors(same_as_prev, same_as_next))
}

/// Render every record whose start date lies in `range`.
pub fn render_range(sequence: &EventSequence, range: &DateRange) -> Vec<String> {
    let matched_count = sequence
        .iter()
        .filter(|e| range.contains(e.start_date))
        .count();

    let mut lines = Vec::new();
    let mut printed = 0;

    for (index, event) in sequence.iter().enumerate() {
        if !range.contains(event.start_date) {
            continue;
        }
        printed += 1;

        let Some(role) = classify(sequence, index) else {
            continue;
        };

        if role.opens_day() {
            lines.extend(day_header(event.start_date));
        }
        lines.push(event_line(event));
        if role.closes_day() && printed != matched_count {
            lines.push(String::new());
        }
    }

    lines
}

/// Render the header and events of a single day; empty if nothing is scheduled.
pub fn events_for_day(sequence: &EventSequence, date: NaiveDate) -> Vec<String> {
    render_range(sequence, &DateRange::single_day(date))
}

/// The formatted date and a dashed underline of the same width.
pub fn day_header(date: NaiveDate) -> [String; 2] {
    let title = format_display(date);
    let underline = "-".repeat(title.chars().count());
    [title, underline]
}

/// `<start> to <end>: <summary> {{<location>}}`
pub fn event_line(event: &EventRecord) -> String {
    format!(
        "{} to {}: {} {{{{{}}}}}",
        format_clock(event.start_time),
        format_clock(event.end_time),
        event.summary,
        event.location
    )
}

/// 12-hour clock time; single-digit hours get a leading space.
pub fn format_clock(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let period = if is_pm { "PM" } else { "AM" };
    format!("{:>2}:{:02} {}", hour, time.minute(), period)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(date: NaiveDate, start: NaiveTime, end: NaiveTime, summary: &str) -> EventRecord {
        EventRecord {
            start_date: date,
            start_time: start,
            end_date: date,
            end_time: end,
            summary: summary.to_string(),
            location: "ECS 116".to_string(),
            recurrence_until: None,
        }
    }

    fn sequence_of(events: Vec<EventRecord>) -> EventSequence {
        events.into_iter().collect()
    }

    #[test]
    fn clock_special_hours() {
        assert_eq!(format_clock(hm(0, 0)), "12:00 AM");
        assert_eq!(format_clock(hm(12, 30)), "12:30 PM");
        assert_eq!(format_clock(hm(9, 15)), " 9:15 AM");
        assert_eq!(format_clock(hm(13, 45)), " 1:45 PM");
        assert_eq!(format_clock(hm(23, 5)), "11:05 PM");
    }

    #[test]
    fn event_line_padding_patterns() {
        let day = ymd(2021, 3, 6);
        let cases = [
            ((9, 0), (9, 50), " 9:00 AM to  9:50 AM"),
            ((9, 30), (10, 20), " 9:30 AM to 10:20 AM"),
            ((11, 30), (13, 0), "11:30 AM to  1:00 PM"),
            ((10, 0), (12, 0), "10:00 AM to 12:00 PM"),
        ];
        for ((sh, sm), (eh, em), times) in cases {
            let line = event_line(&event(day, hm(sh, sm), hm(eh, em), "Lab"));
            assert_eq!(line, format!("{times}: Lab {{{{ECS 116}}}}"));
        }
    }

    #[test]
    fn header_underline_matches_width() {
        let [title, underline] = day_header(ymd(2019, 5, 20));
        assert_eq!(title, "May 20, 2019 (Mon)");
        assert_eq!(underline, "------------------");
    }

    #[test]
    fn classifies_day_groups() {
        let day = ymd(2021, 3, 6);
        let sequence = sequence_of(vec![
            event(ymd(2021, 3, 5), hm(9, 0), hm(10, 0), "alone"),
            event(day, hm(8, 0), hm(9, 0), "a"),
            event(day, hm(10, 0), hm(11, 0), "b"),
            event(day, hm(12, 0), hm(13, 0), "c"),
            event(ymd(2021, 3, 7), hm(9, 0), hm(10, 0), "pair-1"),
            event(ymd(2021, 3, 7), hm(11, 0), hm(12, 0), "pair-2"),
        ]);

        let roles: Vec<GroupRole> = (0..sequence.len())
            .filter_map(|i| classify(&sequence, i))
            .collect();
        assert_eq!(
            roles,
            [
                GroupRole::Singleton,
                GroupRole::First,
                GroupRole::Mid,
                GroupRole::Last,
                GroupRole::First,
                GroupRole::Last,
            ]
        );
        assert!(classify(&sequence, 6).is_none());
    }

    #[test]
    fn two_days_are_separated_by_one_blank_line() {
        let sequence = sequence_of(vec![
            event(ymd(2021, 2, 14), hm(18, 0), hm(21, 0), "Dinner"),
            event(ymd(2021, 2, 10), hm(9, 30), hm(10, 20), "Lecture"),
        ]);
        let range = DateRange::new(ymd(2021, 2, 1), ymd(2021, 2, 28));

        assert_eq!(
            render_range(&sequence, &range),
            [
                "February 10, 2021 (Wed)",
                "-----------------------",
                " 9:30 AM to 10:20 AM: Lecture {{ECS 116}}",
                "",
                "February 14, 2021 (Sun)",
                "-----------------------",
                " 6:00 PM to  9:00 PM: Dinner {{ECS 116}}",
            ]
        );
    }

    #[test]
    fn same_day_group_gets_one_header() {
        let day = ymd(2021, 3, 6);
        let sequence = sequence_of(vec![
            event(day, hm(8, 0), hm(9, 0), "a"),
            event(day, hm(10, 0), hm(11, 0), "b"),
            event(day, hm(12, 0), hm(13, 0), "c"),
            event(ymd(2021, 3, 8), hm(8, 0), hm(9, 0), "next"),
        ]);
        let lines = render_range(&sequence, &DateRange::new(day, ymd(2021, 3, 8)));

        assert_eq!(
            lines,
            [
                "March 06, 2021 (Sat)",
                "--------------------",
                " 8:00 AM to  9:00 AM: a {{ECS 116}}",
                "10:00 AM to 11:00 AM: b {{ECS 116}}",
                "12:00 PM to  1:00 PM: c {{ECS 116}}",
                "",
                "March 08, 2021 (Mon)",
                "--------------------",
                " 8:00 AM to  9:00 AM: next {{ECS 116}}",
            ]
        );
        assert_eq!(lines.iter().filter(|l| l.starts_with("March 06")).count(), 1);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let sequence = sequence_of(vec![
            event(ymd(2021, 1, 31), hm(9, 0), hm(10, 0), "before"),
            event(ymd(2021, 2, 1), hm(9, 0), hm(10, 0), "from"),
            event(ymd(2021, 2, 28), hm(9, 0), hm(10, 0), "to"),
            event(ymd(2021, 3, 1), hm(9, 0), hm(10, 0), "after"),
        ]);
        let lines = render_range(&sequence, &DateRange::new(ymd(2021, 2, 1), ymd(2021, 2, 28)));

        let events: Vec<&String> = lines.iter().filter(|l| l.contains("{{")).collect();
        assert_eq!(events.len(), 2);
        assert!(events[0].contains(": from "));
        assert!(events[1].contains(": to "));
        assert_ne!(lines.last().map(String::as_str), Some(""));
    }

    #[test]
    fn empty_range_renders_nothing() {
        let sequence = sequence_of(vec![event(ymd(2021, 1, 1), hm(9, 0), hm(10, 0), "x")]);
        let range = DateRange::new(ymd(2022, 1, 1), ymd(2022, 12, 31));
        assert!(render_range(&sequence, &range).is_empty());
        assert!(render_range(&EventSequence::new(), &range).is_empty());
    }

    #[test]
    fn events_for_single_day() {
        let day = ymd(2021, 3, 6);
        let sequence = sequence_of(vec![
            event(ymd(2021, 3, 5), hm(9, 0), hm(10, 0), "yesterday"),
            event(day, hm(8, 0), hm(9, 0), "a"),
            event(day, hm(10, 0), hm(11, 0), "b"),
        ]);

        assert_eq!(
            events_for_day(&sequence, day),
            [
                "March 06, 2021 (Sat)",
                "--------------------",
                " 8:00 AM to  9:00 AM: a {{ECS 116}}",
                "10:00 AM to 11:00 AM: b {{ECS 116}}",
            ]
        );
        assert!(events_for_day(&sequence, ymd(2021, 3, 9)).is_empty());
    }
}
