//! Driver configuration, collected from the environment and the command line.

use neo_diagnostic::ColorMode;

/// Last phase a compilation runs.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub enum Phase {
    Lex,
    Parse,
    #[default]
    Check,
}

/// Settings shared by every command.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DriverConfig {
    /// Diagnostic coloring. `NO_COLOR` turns the default into `Never`.
    pub color: ColorMode,
    /// Suppress diagnostic rendering; exit codes are unaffected.
    pub quiet: bool,
    pub stop_after: Phase,
    /// Whether stderr is a terminal, consulted by `ColorMode::Auto`.
    pub stderr_tty: bool,
}

impl DriverConfig {
    /// Defaults adjusted for the current process: `NO_COLOR` and whether
    /// stderr is a terminal.
    pub fn from_env() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        DriverConfig {
            color: if no_color {
                ColorMode::Never
            } else {
                ColorMode::Auto
            },
            stderr_tty: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            ..Self::default()
        }
    }

    /// Copy of `self` that stops after `phase`.
    #[must_use]
    pub fn stopping_after(&self, phase: Phase) -> Self {
        DriverConfig {
            stop_after: phase,
            ..self.clone()
        }
    }

    pub fn use_colors(&self) -> bool {
        self.color.should_use_colors(self.stderr_tty)
    }
}

/// Parse the value of `--color=<mode>`.
pub fn parse_color_mode(value: &str) -> Option<ColorMode> {
    match value {
        "auto" => Some(ColorMode::Auto),
        "always" => Some(ColorMode::Always),
        "never" => Some(ColorMode::Never),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_mode() {
        assert_eq!(parse_color_mode("auto"), Some(ColorMode::Auto));
        assert_eq!(parse_color_mode("always"), Some(ColorMode::Always));
        assert_eq!(parse_color_mode("never"), Some(ColorMode::Never));
        assert_eq!(parse_color_mode("sometimes"), None);
    }

    #[test]
    fn test_default_checks_everything() {
        let config = DriverConfig::default();
        assert_eq!(config.stop_after, Phase::Check);
        assert!(!config.quiet);
        assert!(!config.use_colors());
    }

    #[test]
    fn test_stopping_after_keeps_other_settings() {
        let config = DriverConfig {
            color: ColorMode::Always,
            quiet: true,
            ..DriverConfig::default()
        };
        let lex_only = config.stopping_after(Phase::Lex);
        assert_eq!(lex_only.stop_after, Phase::Lex);
        assert!(lex_only.quiet);
        assert!(lex_only.use_colors());
    }

    #[test]
    fn test_phase_order() {
        assert!(Phase::Lex < Phase::Parse);
        assert!(Phase::Parse < Phase::Check);
    }
}
