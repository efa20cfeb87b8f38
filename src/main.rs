use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, info};

use region_splice::{ApplyMode, JobLoader, JobSpec, RegionSplicer};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML job file with path, markers and payload
    #[arg(short, long)]
    job: Option<PathBuf>,

    /// File to rewrite (overrides the job file)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Substring marking the first line of the region
    #[arg(short, long)]
    start: Option<String>,

    /// Substring marking the line right after the region
    #[arg(short, long)]
    end: Option<String>,

    /// Replacement text
    #[arg(short, long, conflicts_with = "payload_file")]
    payload: Option<String>,

    /// File holding the replacement text
    #[arg(short = 'P', long)]
    payload_file: Option<PathBuf>,

    /// Show a diff and the summary without writing
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Context lines around the dry-run diff
    #[arg(short = 'C', long, default_value_t = 3)]
    context: usize,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> JobSpec {
        JobSpec {
            path: self.file.clone(),
            start_marker: self.start.clone(),
            end_marker: self.end.clone(),
            payload: self.payload.clone(),
            payload_file: self.payload_file.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    region_splice::logging::init_logging(cli.verbose, std::io::stderr().is_terminal())?;
    debug!("Starting region-splice v{}", region_splice::version());

    let base = match &cli.job {
        Some(job_path) => {
            let loader = JobLoader::with_path(job_path);
            info!("Loading job from {}", loader.path().display());
            loader
                .load()
                .with_context(|| format!("Failed to load job {}", job_path.display()))?
        }
        None => JobSpec::default(),
    };

    let job = base
        .merge(cli.overrides())
        .into_job()
        .context("Incomplete job, pass --job or --file/--start/--end/--payload")?;

    let path = job.path.clone();
    let splicer = RegionSplicer::new(job);
    let mode = if cli.dry_run {
        ApplyMode::DryRun
    } else {
        ApplyMode::Write
    };

    let plan = splicer
        .run(mode)
        .with_context(|| format!("Failed to splice {}", path.display()))?;

    if cli.dry_run && !cli.json {
        print!(
            "{}",
            region_splice::diff::unified_preview(&plan, &path, cli.context)
        );
    }

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&plan.report).context("Failed to serialize report")?
        );
    } else {
        println!("{}", plan.report);
    }

    Ok(())
}
