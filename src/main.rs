//! taskgraph CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use taskgraph::{select, Config, OutputFormat, TaskFile};

/// Display dependencies for the selected tasks without executing actions
#[derive(Debug, Parser)]
#[command(name = "taskgraph", version, about)]
struct Cli {
    /// Tasks to inspect (default: configured default tasks, or all tasks)
    #[arg(value_name = "TASK")]
    tasks: Vec<String>,

    /// Output format [default: text]
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    /// Task file (default: tasks.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Fail on dependencies that cannot be resolved instead of skipping them
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the graph
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let path = match cli.file {
        Some(path) => path,
        None => TaskFile::locate(&std::env::current_dir()?)?,
    };
    log::info!("Loading tasks from: {}", path.display());

    let task_file = TaskFile::from_file(&path)?;
    let config = Config::load_user()
        .context("failed to load user config")?
        .merge(task_file.config.clone());
    let format = config.output_format(cli.output);

    let registry = select::validate(task_file.into_registry()?)?;
    let roots = select::select(&registry, &cli.tasks, &config)?;
    let entries = taskgraph::inspect(registry, &roots, cli.strict)?;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    taskgraph::render::render(&entries, format, &mut out).context("failed to write output")?;
    out.flush().context("failed to write output")?;

    Ok(())
}
