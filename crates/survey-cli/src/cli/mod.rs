use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `survey` binary.
#[derive(Debug, Parser)]
#[command(name = "survey", version, about = "Survey store - users, forms, and assignments")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database path (overrides `database.path` from config)
    #[arg(short, long, global = true)]
    pub database: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            database: self.database.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::{AssignmentCommands, FormCommands, UserCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "survey",
            "--format",
            "raw",
            "--limit",
            "5",
            "--database",
            "/tmp/s.db",
            "user",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.limit, Some(5));
        assert_eq!(cli.database.as_deref(), Some("/tmp/s.db"));
        assert!(matches!(
            cli.command,
            Commands::User {
                action: UserCommands::List { skip: 0, .. }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["survey", "user", "get", "3", "--quiet"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::User {
                action: UserCommands::Get { id: 3 }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["survey", "--format", "table", "user", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn form_update_accepts_raw_state() {
        let cli = Cli::try_parse_from(["survey", "form", "update", "1", "--state", "archived"])
            .expect("cli should parse");
        let Commands::Form {
            action: FormCommands::Update { id, state, title, .. },
        } = cli.command
        else {
            panic!("expected form update");
        };
        assert_eq!(id, 1);
        assert_eq!(state.as_deref(), Some("archived"));
        assert_eq!(title, None);
    }

    #[test]
    fn assignment_update_takes_state_positionally() {
        let cli = Cli::try_parse_from([
            "survey",
            "assignment",
            "update",
            "1",
            "2",
            "finished",
            "--response",
            r#"{"q1":"ok"}"#,
        ])
        .expect("cli should parse");
        let Commands::Assignment {
            action:
                AssignmentCommands::Update {
                    user_id,
                    form_id,
                    state,
                    response,
                },
        } = cli.command
        else {
            panic!("expected assignment update");
        };
        assert_eq!((user_id, form_id), (1, 2));
        assert_eq!(state, "finished");
        assert_eq!(response.as_deref(), Some(r#"{"q1":"ok"}"#));
    }

    #[test]
    fn field_type_is_kebab_case() {
        let cli = Cli::try_parse_from(["survey", "field-type", "list"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::FieldType { .. }));
    }
}
