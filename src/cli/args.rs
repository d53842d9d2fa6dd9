// src/cli/args.rs
// Command-line arguments

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sardinai")]
#[command(about = "Sardinian trip planner: preference wizard and itinerary generation")]
#[command(version)]
pub struct CliArgs {
    /// Log filter (overrides RUST_LOG and SARDINAI_LOG_LEVEL), e.g. "debug" or "sardinai=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl CliArgs {
    /// Resolve the tracing filter: `--log-level`, then `rust_log`, then the
    /// configured level. The planner falls back to "warn" instead.
    pub fn log_filter(&self, rust_log: Option<String>, configured: &str) -> String {
        if let Some(level) = &self.log_level {
            return level.clone();
        }
        if let Some(filter) = rust_log.filter(|f| !f.trim().is_empty()) {
            return filter;
        }
        match self.command {
            Command::Plan { .. } => "warn".to_string(),
            Command::Serve { .. } => configured.to_string(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP API
    Serve {
        /// Bind host (default: SARDINAI_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (default: SARDINAI_PORT)
        #[arg(long, short = 'p')]
        port: Option<u16>,
    },

    /// Walk through the trip wizard in the terminal
    Plan {
        /// Print the compiled prompt without calling the model
        #[arg(long)]
        prompt_only: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_overrides() {
        let args = CliArgs::parse_from(["sardinai", "serve", "--host", "127.0.0.1", "-p", "8080"]);
        assert_eq!(
            args.command,
            Command::Serve {
                host: Some("127.0.0.1".to_string()),
                port: Some(8080),
            }
        );
    }

    #[test]
    fn parses_plan_with_global_log_level() {
        let args = CliArgs::parse_from(["sardinai", "plan", "--prompt-only", "--log-level", "debug"]);
        assert_eq!(args.command, Command::Plan { prompt_only: true });
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn log_level_flag_beats_rust_log() {
        let args = CliArgs::parse_from(["sardinai", "--log-level", "debug", "serve"]);
        assert_eq!(args.log_filter(Some("error".to_string()), "info"), "debug");

        let args = CliArgs::parse_from(["sardinai", "serve"]);
        assert_eq!(args.log_filter(Some("error".to_string()), "info"), "error");
        assert_eq!(args.log_filter(Some("  ".to_string()), "info"), "info");
        assert_eq!(args.log_filter(None, "info"), "info");

        let args = CliArgs::parse_from(["sardinai", "plan"]);
        assert_eq!(args.log_filter(None, "info"), "warn");
    }

    #[test]
    fn subcommand_is_required() {
        assert!(CliArgs::try_parse_from(["sardinai"]).is_err());
    }
}
