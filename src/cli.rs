//! CLI definitions for Hookbook.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use hookbook_protocols::EventTrigger;

/// Hookbook CLI.
#[derive(Parser)]
#[command(name = "hookbook")]
#[command(about = "Manage booking webhook subscriptions and embed snippets")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.hookbook/config.toml)
    #[arg(short, long, global = true, env = "HOOKBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List webhook subscriptions
    List {
        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Create a webhook subscription
    Create {
        /// Subscriber URL that receives the events
        #[arg(long)]
        url: String,

        /// Do not listen for BOOKING_CREATED
        #[arg(long)]
        no_created: bool,

        /// Do not listen for BOOKING_RESCHEDULED
        #[arg(long)]
        no_rescheduled: bool,

        /// Do not listen for BOOKING_CANCELLED
        #[arg(long)]
        no_cancelled: bool,
    },

    /// Edit a webhook subscription
    Edit {
        /// Subscription ID
        id: String,

        /// New subscriber URL
        #[arg(long)]
        url: Option<String>,

        /// Replace the event triggers (repeatable)
        #[arg(long = "trigger", value_name = "TRIGGER")]
        triggers: Vec<EventTrigger>,

        /// Enable or disable the subscription
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a webhook subscription
    Delete {
        /// Subscription ID
        id: String,
    },

    /// Print embed snippets for a booking page
    Embed {
        /// Username of the booking page
        #[arg(long)]
        username: String,

        /// Print the standalone HTML page instead of the iframe
        #[arg(long)]
        html: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create() {
        let cli = Cli::parse_from([
            "hookbook",
            "create",
            "--url",
            "https://x.test/hook",
            "--no-rescheduled",
        ]);
        match cli.command {
            Commands::Create {
                url,
                no_created,
                no_rescheduled,
                no_cancelled,
            } => {
                assert_eq!(url, "https://x.test/hook");
                assert!(!no_created);
                assert!(no_rescheduled);
                assert!(!no_cancelled);
            }
            _ => panic!("Expected create command"),
        }
    }

    #[test]
    fn test_parse_edit_triggers() {
        let cli = Cli::parse_from([
            "hookbook",
            "edit",
            "wh_1",
            "--trigger",
            "booking_created",
            "--trigger",
            "BOOKING_CANCELLED",
            "--active",
            "false",
        ]);
        match cli.command {
            Commands::Edit {
                id,
                url,
                triggers,
                active,
            } => {
                assert_eq!(id, "wh_1");
                assert!(url.is_none());
                assert_eq!(
                    triggers,
                    vec![EventTrigger::BookingCreated, EventTrigger::BookingCancelled]
                );
                assert_eq!(active, Some(false));
            }
            _ => panic!("Expected edit command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_trigger() {
        let result = Cli::try_parse_from(["hookbook", "edit", "wh_1", "--trigger", "meeting_ended"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["hookbook", "list", "--config", "/tmp/h.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/h.toml")));
    }
}
