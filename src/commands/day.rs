use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use icsout_core::date::format_display;
use icsout_core::pipeline::write_report;
use icsout_core::report::events_for_day;
use owo_colors::OwoColorize;

use super::load_sequence;

pub fn run(path: &Path, date: NaiveDate) -> Result<()> {
    let sequence = load_sequence(path)?;
    let lines = events_for_day(&sequence, date);

    if lines.is_empty() {
        let notice = format!("No events on {}", format_display(date));
        eprintln!("{}", notice.dimmed());
        return Ok(());
    }

    write_report(&lines, &mut std::io::stdout().lock())?;
    Ok(())
}
