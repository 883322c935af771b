pub mod config;
pub mod display;
pub mod sorting;

use std::io::Write;

use anyhow::{Context, Result};

use config::Config;
use display::write_sequence;
use sorting::heap_sort;

/// Prints every configured sequence before and after sorting it.
pub fn run<W>(config: Config, out: &mut W) -> Result<()>
where
    W: Write
{
    tracing::debug!(sequences = config.sequences.len(), "running");
    for (i, mut sequence) in config.sequences.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "===== Example {} =====", i + 1)?;
        write_sequence(out, &sequence)?;
        heap_sort(&mut sequence);
        write_sequence(out, &sequence).context("unable to write sorted sequence")?;
    }
    Ok(())
}
