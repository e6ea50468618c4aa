//! Interactive and batch console sessions.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use pq_sim::{render_day, should_stop, OutputFormat, Simulation};
use tracing::info;

use crate::config::CliConfig;

/// ANSI: clear the screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

pub const BANNER: &str = "Updating award metrics...!";
pub const PROMPT: &str = "Keep Going? Press q to stop program.";

/// Advance, redraw and prompt until the user enters `q` or input ends.
///
/// In JSON mode the banner and prompt go to `status` so `out` carries only
/// JSON lines. Returns the number of days simulated.
pub fn run_interactive<R: BufRead, W: Write, S: Write>(
    sim: &mut Simulation,
    config: &CliConfig,
    input: &mut R,
    out: &mut W,
    status: &mut S,
) -> Result<u64> {
    let json = config.format == OutputFormat::Json;

    {
        let target: &mut dyn Write = if json { &mut *status } else { &mut *out };
        writeln!(target, "{BANNER}").context("failed to write banner")?;
    }

    let mut line = String::new();
    loop {
        sim.tick();
        if config.clear_screen && !json {
            write!(out, "{CLEAR_SCREEN}").context("failed to clear screen")?;
        }
        render_day(sim, config.format, out).context("failed to render awards")?;
        out.flush().context("failed to flush output")?;
        {
            let target: &mut dyn Write = if json { &mut *status } else { &mut *out };
            writeln!(target, "\n{PROMPT}").context("failed to write prompt")?;
            target.flush().context("failed to flush prompt")?;
        }

        line.clear();
        let read = input.read_line(&mut line).context("failed to read input")?;
        if read == 0 {
            info!(day = sim.day(), "input closed, stopping");
            break;
        }
        if should_stop(&line) {
            info!(day = sim.day(), "stop requested");
            break;
        }
    }
    Ok(sim.day())
}

/// Simulate `days` days, rendering each one without prompting.
pub fn run_batch<W: Write>(
    sim: &mut Simulation,
    days: u64,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    for _ in 0..days {
        sim.tick();
        if format == OutputFormat::Text {
            writeln!(out, "Day {}", sim.day()).context("failed to write day header")?;
        }
        render_day(sim, format, out).context("failed to render awards")?;
        if format == OutputFormat::Text {
            writeln!(out).context("failed to write separator")?;
        }
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn no_clear() -> CliConfig {
        CliConfig {
            clear_screen: false,
            ..CliConfig::default()
        }
    }

    fn interactive_split(input: &str, config: &CliConfig) -> (u64, String, String) {
        let mut sim = Simulation::new();
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut status = Vec::new();
        let days = run_interactive(&mut sim, config, &mut reader, &mut out, &mut status).unwrap();
        (
            days,
            String::from_utf8(out).unwrap(),
            String::from_utf8(status).unwrap(),
        )
    }

    fn interactive(input: &str, config: &CliConfig) -> (u64, String) {
        let (days, out, _) = interactive_split(input, config);
        (days, out)
    }

    // --- interactive ---

    #[test]
    fn q_on_first_prompt_runs_one_day() {
        let (days, out) = interactive("q\n", &no_clear());
        assert_eq!(days, 1);
        assert!(out.starts_with(BANNER));
        assert!(out.contains("1. Name: Blue Distinction Plus | Quality: 80 | Expires In: 0"));
        assert_eq!(out.matches(PROMPT).count(), 1);
    }

    #[test]
    fn uppercase_q_stops() {
        let (days, _) = interactive("\n\nQ\n", &no_clear());
        assert_eq!(days, 3);
    }

    #[test]
    fn other_input_continues() {
        let (days, _) = interactive("y\nquit\n\nq\n", &no_clear());
        assert_eq!(days, 4);
    }

    #[test]
    fn end_of_input_stops() {
        let (days, _) = interactive("", &no_clear());
        assert_eq!(days, 1);
        let (days, _) = interactive("\n\n", &no_clear());
        assert_eq!(days, 3);
    }

    #[test]
    fn clears_screen_before_each_redraw() {
        let (_, out) = interactive("\nq\n", &CliConfig::default());
        assert_eq!(out.matches(CLEAR_SCREEN).count(), 2);
        let (_, out) = interactive("\nq\n", &no_clear());
        assert!(!out.contains(CLEAR_SCREEN));
    }

    #[test]
    fn json_mode_never_clears() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..CliConfig::default()
        };
        let (_, out) = interactive("q\n", &config);
        assert!(!out.contains(CLEAR_SCREEN));
        assert!(out.contains("\"day\":1"));
    }

    #[test]
    fn json_mode_stdout_is_only_json_lines() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..CliConfig::default()
        };
        let (days, out, status) = interactive_split("\nq\n", &config);
        assert_eq!(days, 2);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(
                serde_json::from_str::<serde_json::Value>(line).is_ok(),
                "not JSON: {line:?}"
            );
        }
        assert!(status.starts_with(BANNER));
        assert_eq!(status.matches(PROMPT).count(), 2);
    }

    #[test]
    fn text_mode_keeps_prompt_on_output() {
        let (_, out, status) = interactive_split("q\n", &no_clear());
        assert!(out.contains(PROMPT));
        assert!(status.is_empty());
    }

    // --- batch ---

    #[test]
    fn batch_prints_each_day() {
        let mut sim = Simulation::new();
        let mut out = Vec::new();
        run_batch(&mut sim, 3, OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(sim.day(), 3);
        assert!(text.contains("Day 1\n1. Name: Blue Distinction Plus"));
        assert!(text.contains("Day 3\n"));
        assert_eq!(text.matches("7. Name:").count(), 3);
    }

    #[test]
    fn batch_zero_days_prints_nothing() {
        let mut sim = Simulation::new();
        let mut out = Vec::new();
        run_batch(&mut sim, 0, OutputFormat::Json, &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(sim.day(), 0);
    }

    #[test]
    fn batch_json_has_no_headers() {
        let mut sim = Simulation::new();
        let mut out = Vec::new();
        run_batch(&mut sim, 2, OutputFormat::Json, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(!text.contains("Day "));
    }
}
