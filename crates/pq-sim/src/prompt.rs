//! Continue/stop decision for the interactive loop.

/// Input that ends the simulation.
pub const STOP_KEY: &str = "q";

/// True when `line` is the stop key, ignoring case and surrounding
/// whitespace.
pub fn should_stop(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(STOP_KEY)
}
