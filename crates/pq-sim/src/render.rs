//! Console and JSON Lines rendering of the ranked award list.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use pq_core::Award;

use crate::simulation::{DaySnapshot, Simulation};

/// How a simulated day is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `"<rank>. Name: ... | Quality: ... | Expires In: ..."` line per award.
    #[default]
    Text,
    /// One JSON object per day.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other} (expected text or json)")),
        }
    }
}

/// Write the 1-indexed ranked list, one award per line.
pub fn render_text<W: Write>(awards: &[Award], out: &mut W) -> io::Result<()> {
    for (i, award) in awards.iter().enumerate() {
        writeln!(
            out,
            "{}. Name: {} | Quality: {} | Expires In: {}",
            i + 1,
            award.name(),
            award.quality(),
            award.expires_in()
        )?;
    }
    Ok(())
}

/// Write `snapshot` as a single JSON line.
pub fn render_json<W: Write>(snapshot: &DaySnapshot, out: &mut W) -> io::Result<()> {
    serde_json::to_writer(&mut *out, snapshot)?;
    writeln!(out)
}

/// Render the simulation's current day in `format`.
pub fn render_day<W: Write>(sim: &Simulation, format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(sim.awards(), out),
        OutputFormat::Json => render_json(&sim.snapshot(), out),
    }
}
