//! Console configuration derived from command-line flags.

use pq_core::AwardKind;
use pq_sim::OutputFormat;

/// Settings for one console run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Run this many days without prompting. `None` means interactive.
    pub days: Option<u64>,
    /// Awards to simulate, in starting order.
    pub kinds: Vec<AwardKind>,
    pub format: OutputFormat,
    /// Clear the terminal before each interactive redraw.
    pub clear_screen: bool,
    /// Log level filter string (e.g. "warn", "debug", "pq_sim=trace").
    pub log_level: String,
    /// Log output format ("text" or "json").
    pub log_format: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            days: None,
            kinds: AwardKind::ALL.to_vec(),
            format: OutputFormat::Text,
            clear_screen: true,
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl CliConfig {
    pub fn is_interactive(&self) -> bool {
        self.days.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_interactive() {
        assert!(CliConfig::default().is_interactive());
    }

    #[test]
    fn default_simulates_full_catalog() {
        assert_eq!(CliConfig::default().kinds, AwardKind::ALL.to_vec());
    }

    #[test]
    fn default_log_level_is_warn() {
        let cfg = CliConfig::default();
        assert_eq!(cfg.log_level, "warn");
        assert_eq!(cfg.log_format, "text");
    }

    #[test]
    fn default_renders_text_and_clears() {
        let cfg = CliConfig::default();
        assert_eq!(cfg.format, OutputFormat::Text);
        assert!(cfg.clear_screen);
    }

    #[test]
    fn batch_run_is_not_interactive() {
        let cfg = CliConfig {
            days: Some(5),
            ..CliConfig::default()
        };
        assert!(!cfg.is_interactive());
    }
}
