//! taskscout: match git commits to tracked tasks.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use taskscout::config;
use taskscout::constants;
use taskscout::env;
use taskscout::git;
use taskscout::matcher;
use taskscout::models;
use taskscout::monitor;
use taskscout::output;
use taskscout::tasks;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{Cli, Command, CriteriaArgs, ScanArgs, SourceArgs, WatchArgs};
use config::Config;
use env::Env;
use git::{CommitSource, GitLogSource};
use matcher::TaskCommitMatcher;
use models::{AnalysisResult, Task};
use monitor::{MatchSink, ProjectMonitor};
use output::OutputRenderer;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.quiet, cli.verbose)?;

    match cli.command {
        Command::Scan(args) => run_scan(args).await,
        Command::Watch(args) => run_watch(args).await,
        Command::Criteria(args) => run_criteria(args).await,
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Everything a command needs once the repository and tasks are resolved.
struct Workspace {
    config: Config,
    source: GitLogSource,
    tasks: Vec<Task>,
}

/// Resolve the repository root, layer config, and load the task list.
async fn prepare(args: &SourceArgs) -> Result<Workspace> {
    let start = args
        .path
        .canonicalize()
        .with_context(|| format!("repository path not found: {}", args.path.display()))?;
    let repo_root = match git::command::find_repo_root(&start).await {
        Ok(root) => PathBuf::from(root),
        Err(e) => {
            tracing::warn!("{e}; using {} as given", start.display());
            start
        }
    };

    let mut config =
        Config::load(Some(&repo_root), &Env::real()).context("failed to load configuration")?;
    if let Some(ref tasks) = args.tasks {
        config.tasks.file = Some(tasks.clone());
    }
    if let Some(max) = args.max_commits {
        config.log.max_commits = max;
    }

    let tasks_path = config.tasks_path(&repo_root);
    let tasks = tasks::load_tasks(&tasks_path)
        .await
        .context("failed to load tasks")?;
    if tasks.is_empty() {
        tracing::info!("task list {} is empty", tasks_path.display());
    }

    let source = GitLogSource::new(&repo_root).with_max_commits(config.log.max_commits);
    Ok(Workspace {
        config,
        source,
        tasks,
    })
}

/// Scan once and print matches plus the new watermark.
async fn run_scan(args: ScanArgs) -> Result<()> {
    let ws = prepare(&args.source).await?;
    let format = args.format.unwrap_or(ws.config.output.format);

    let matcher = TaskCommitMatcher::new(Arc::new(ws.source));
    let result = matcher
        .analyze_commits(&ws.tasks, args.since.as_deref())
        .await;

    if !result.matches.is_empty() {
        monitor::log_matches(&result.matches);
    }

    print!("{}", output::renderer_for(format).render(&result));
    Ok(())
}

/// Prints each batch of matches with the chosen renderer.
struct PrintSink {
    renderer: Box<dyn OutputRenderer>,
}

impl MatchSink for PrintSink {
    fn on_matches(&self, result: &AnalysisResult) {
        print!("{}", self.renderer.render(result));
    }
}

/// Poll until Ctrl-C.
async fn run_watch(args: WatchArgs) -> Result<()> {
    let ws = prepare(&args.source).await?;
    let format = args.format.unwrap_or(ws.config.output.format);
    let mut watch = ws.config.watch.clone();
    if let Some(secs) = args.interval {
        watch.poll_interval_secs = secs;
    }

    tracing::info!(
        "watching {} every {}s",
        ws.source.repo_path().display(),
        watch.poll_interval().as_secs()
    );

    let monitor = ProjectMonitor::new(
        TaskCommitMatcher::new(Arc::new(ws.source)),
        Arc::new(PrintSink {
            renderer: output::renderer_for(format),
        }),
        watch.poll_interval(),
    )
    .with_watermark(args.since);
    monitor.set_tasks(ws.tasks);

    monitor
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("failed to listen for Ctrl-C: {e}");
                std::future::pending::<()>().await;
            }
        })
        .await;

    if let Some(last) = monitor.watermark() {
        println!("last commit: {last}");
    }
    Ok(())
}

/// Report acceptance-criteria coverage over the recent commit window.
async fn run_criteria(args: CriteriaArgs) -> Result<()> {
    let ws = prepare(&args.source).await?;

    let selected: Vec<&Task> = match args.task.as_deref() {
        Some(id) => {
            let id = id.trim().to_uppercase();
            let found: Vec<&Task> = ws.tasks.iter().filter(|t| t.id == id).collect();
            if found.is_empty() {
                bail!("task {id} not found in task list");
            }
            found
        }
        None => ws.tasks.iter().collect(),
    };

    let commits = match ws.source.commits_since(None).await {
        Ok(commits) => commits,
        Err(e) => {
            tracing::warn!("{e}");
            Vec::new()
        }
    };

    let reports: Vec<_> = selected
        .into_iter()
        .map(|task| matcher::criteria::check_acceptance_criteria(task, &commits))
        .collect();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("failed to serialize report")?
        );
        return Ok(());
    }

    print_criteria(&reports);
    Ok(())
}

fn print_criteria(reports: &[matcher::criteria::CriteriaReport]) {
    use colored::Colorize;

    if reports.is_empty() {
        println!("No tasks to check.");
        return;
    }

    for report in reports {
        let status = if report.met {
            "✔".green().bold()
        } else {
            "✖".red().bold()
        };
        println!(
            "  {} {}  {}/{} criteria ({}%)",
            status,
            report.task_id.bold(),
            report.met_count,
            report.total,
            report.percentage,
        );
        for detail in &report.details {
            match (&detail.commit, &detail.message) {
                (Some(commit), Some(message)) => println!(
                    "      {} {}  {} {}",
                    "✔".green(),
                    detail.criterion,
                    commit.dimmed(),
                    message.dimmed()
                ),
                _ => println!("      {} {}", "·".dimmed(), detail.criterion),
            }
        }
    }
}
