use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "uitag", bin_name = "uitag", version)]
#[command(about = "Tag assignment widget driven by event scripts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print a state snapshot after every event
    #[arg(long, global = true, help_heading = "Options")]
    pub debug: bool,

    /// Directory holding uitag.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Board container the `target` attribute may name (repeatable)
    #[arg(
        long,
        global = true,
        value_name = "NAME",
        default_value = "tags",
        help_heading = "Options"
    )]
    pub target: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay an event script (stdin when FILE is omitted)
    Run {
        /// Script file
        file: Option<PathBuf>,
    },

    /// List the selectable tag types
    Types,

    /// Print the resolved configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_with_file() {
        let cli = Cli::try_parse_from(["uitag", "run", "demo.tag"]).unwrap();
        match cli.command {
            Commands::Run { file } => assert_eq!(file, Some(PathBuf::from("demo.tag"))),
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.target, vec!["tags".to_string()]);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_run_reads_stdin_without_file() {
        let cli = Cli::try_parse_from(["uitag", "run"]).unwrap();
        assert!(matches!(cli.command, Commands::Run { file: None }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "uitag", "run", "-v", "--debug", "--config", "/tmp/cfg", "--target", "sidebar",
            "--target", "footer",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.debug);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/cfg")));
        assert_eq!(cli.target, vec!["sidebar".to_string(), "footer".to_string()]);
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["uitag"]).is_err());
    }
}
