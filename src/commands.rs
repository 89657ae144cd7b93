//! Command-line parsing
//!
//! Parses `phishcheck [command] [args...]` into a [`Command`].

/// Parsed command from the process arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the checker window (no arguments)
    Gui,
    /// One headless check: check <url>
    Check { url: String },
    /// Probe the prediction service: health
    Health,
    /// Print the resolved configuration: config
    Config,
    /// Show help: help
    Help,
    /// Anything else, carrying the message to print
    Invalid { message: String },
}

impl Command {
    /// Parse arguments, excluding the program name
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let Some(first) = args.first() else {
            return Command::Gui;
        };

        let cmd = first.as_ref().to_lowercase();
        let rest = args[1..]
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        let rest = rest.trim();

        match cmd.as_str() {
            "check" | "c" => {
                if rest.is_empty() {
                    Command::Invalid {
                        message: "Usage: phishcheck check <url>".to_string(),
                    }
                } else {
                    Command::Check { url: rest.to_string() }
                }
            }
            "health" | "status" => Command::Health,
            "config" => Command::Config,
            "gui" | "open" => Command::Gui,
            "help" | "--help" | "-h" => Command::Help,
            _ => Command::Invalid {
                message: format!("Unknown command: {}. Run 'phishcheck help' for usage.", cmd),
            },
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"phishcheck - phishing URL checker

Usage: phishcheck [command]

Commands:
  (none), gui     Open the checker window
  check <url>     Check one URL and print the verdict
  health          Ask the prediction service whether it is up
  config          Print the resolved configuration
  help            Show this help message

Environment:
  PHISHCHECK_API_BASE       Base URL of the prediction service
  PHISHCHECK_PREDICT_PATH   Path of the prediction endpoint (default /predict)
  PHISHCHECK_API_KEY        Value sent as X-API-Key
  PHISHCHECK_STALE_POLICY   drop-stale (default) or last-settled-wins
  RUST_LOG                  Log filter, e.g. phishcheck=debug"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let args: [&str; 0] = [];
        assert_eq!(Command::parse(&args), Command::Gui);
    }

    #[test]
    fn test_parse_check() {
        match Command::parse(&["check", "http://a.co"]) {
            Command::Check { url } => assert_eq!(url, "http://a.co"),
            other => panic!("Expected Check command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_without_url() {
        match Command::parse(&["check", "  "]) {
            Command::Invalid { message } => assert!(message.starts_with("Usage")),
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse(&["HEALTH"]), Command::Health);
        assert_eq!(Command::parse(&["--help"]), Command::Help);
    }

    #[test]
    fn test_parse_unknown() {
        match Command::parse(&["scan"]) {
            Command::Invalid { message } => assert!(message.contains("scan")),
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }
}
