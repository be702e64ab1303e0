use std::path::Path;

use anyhow::Result;
use icsout_core::pipeline::write_report;
use icsout_core::report::render_range;
use icsout_core::DateRange;
use owo_colors::OwoColorize;

use super::load_sequence;

pub fn run(path: &Path, range: &DateRange) -> Result<()> {
    let sequence = load_sequence(path)?;
    let lines = render_range(&sequence, range);

    if lines.is_empty() {
        eprintln!("{}", "No events in range".dimmed());
        return Ok(());
    }

    write_report(&lines, &mut std::io::stdout().lock())?;
    Ok(())
}
