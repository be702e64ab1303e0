use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use super::load_sequence;

/// One debug line per occurrence, in report order.
pub fn run(path: &Path) -> Result<()> {
    let sequence = load_sequence(path)?;

    if sequence.is_empty() {
        eprintln!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in &sequence {
        println!("{}", event);
    }

    Ok(())
}
