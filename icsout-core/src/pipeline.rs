//! End-to-end report pipeline: read, parse, expand, render.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::date_range::DateRange;
use crate::error::{IcsoutError, IcsoutResult};
use crate::ics::parse_calendar;
use crate::recurrence;
use crate::report::render_range;
use crate::sequence::EventSequence;

/// Read the whole calendar file.
pub fn read_source(path: &Path) -> IcsoutResult<String> {
    std::fs::read_to_string(path).map_err(|source| IcsoutError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse `content` and expand every weekly series into the same sequence.
///
/// The returned sequence is final: grouping depends on adjacency, so nothing
/// may be inserted after reporting starts.
pub fn build_sequence(content: &str) -> IcsoutResult<EventSequence> {
    let mut sequence = parse_calendar(content)?;
    let seeds = sequence.len();
    let added = recurrence::expand(&mut sequence);
    info!(seeds, added, total = sequence.len(), "built event sequence");
    Ok(sequence)
}

/// Render the report for `range` from raw calendar text.
pub fn run(content: &str, range: &DateRange) -> IcsoutResult<Vec<String>> {
    let sequence = build_sequence(content)?;
    Ok(render_range(&sequence, range))
}

/// Write each line followed by a newline.
pub fn write_report<W: Write>(lines: &[String], out: &mut W) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
