//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

use taskscout::models::OutputFormat;

/// Match git commits to tracked tasks.
#[derive(Parser, Debug)]
#[command(
    name = "taskscout",
    version = taskscout::constants::VERSION,
    about = "Match git commits to tracked tasks using explicit ids, keywords and touched files",
)]
pub struct Cli {
    /// Only log warnings and errors.
    #[arg(long, short = 'q', global = true, default_value_t = false)]
    pub quiet: bool,

    /// Log debug details (skipped log lines, scan timing).
    #[arg(long, short = 'v', global = true, default_value_t = false, conflicts_with = "quiet")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Scan new commits once and report task matches.
    Scan(ScanArgs),

    /// Poll the repository and report matches as commits land.
    Watch(WatchArgs),

    /// Report acceptance-criteria coverage for tasks over recent commits.
    Criteria(CriteriaArgs),

    /// Print version and build information.
    Version,
}

/// Repository and task list location, shared by every command.
#[derive(clap::Args, Debug)]
pub struct SourceArgs {
    /// Path to the repository (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// JSON task list (default: `tasks.json` in the repository root).
    #[arg(long)]
    pub tasks: Option<PathBuf>,

    /// Maximum number of commits read per scan.
    #[arg(long)]
    pub max_commits: Option<usize>,
}

/// Arguments for the `scan` subcommand.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only consider commits after this one (the previous run's last commit).
    #[arg(long)]
    pub since: Option<String>,

    /// Output format.
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `watch` subcommand.
#[derive(Parser, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Start after this commit instead of the most recent window.
    #[arg(long)]
    pub since: Option<String>,

    /// Seconds between polls.
    #[arg(long)]
    pub interval: Option<u64>,

    /// Output format for each batch of matches.
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `criteria` subcommand.
#[derive(Parser, Debug)]
pub struct CriteriaArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only report this task id.
    #[arg(long)]
    pub task: Option<String>,

    /// Emit JSON instead of terminal text.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_scan_with_defaults() {
        let cli = Cli::try_parse_from(["taskscout", "scan"]).unwrap();
        match cli.command {
            Command::Scan(args) => {
                assert_eq!(args.source.path, PathBuf::from("."));
                assert!(args.source.tasks.is_none());
                assert!(args.since.is_none());
                assert!(args.format.is_none());
            }
            other => panic!("expected scan, got {other:?}"),
        }
    }

    #[test]
    fn parse_scan_with_options() {
        let cli = Cli::try_parse_from([
            "taskscout",
            "scan",
            "--path",
            "/repo",
            "--tasks",
            "t.json",
            "--since",
            "abc123",
            "--format",
            "json",
            "--max-commits",
            "10",
        ])
        .unwrap();
        let Command::Scan(args) = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(args.source.path, PathBuf::from("/repo"));
        assert_eq!(args.source.tasks, Some(PathBuf::from("t.json")));
        assert_eq!(args.source.max_commits, Some(10));
        assert_eq!(args.since.as_deref(), Some("abc123"));
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn parse_watch_interval() {
        let cli = Cli::try_parse_from(["taskscout", "watch", "--interval", "5"]).unwrap();
        let Command::Watch(args) = cli.command else {
            panic!("expected watch");
        };
        assert_eq!(args.interval, Some(5));
    }

    #[test]
    fn parse_criteria_task_filter() {
        let cli = Cli::try_parse_from(["taskscout", "-q", "criteria", "--task", "hk-4"]).unwrap();
        assert!(cli.quiet);
        let Command::Criteria(args) = cli.command else {
            panic!("expected criteria");
        };
        assert_eq!(args.task.as_deref(), Some("hk-4"));
        assert!(!args.json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["taskscout", "-q", "-v", "scan"]).is_err());
    }
}
