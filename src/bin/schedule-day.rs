//! schedule-day: plans one day for every resource in a dataset file.
//!
//! Loads the flat JSON dataset, validates it, schedules each resource's
//! eligible tasks, writes `expectedStartDate` / `expectedFinishDate` back
//! and saves the file (unless `--dry-run`).

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{info, warn};

use u_field_schedule::scheduler::{plan_day, ScheduleKpi, ScheduleWriter};
use u_field_schedule::store::Dataset;
use u_field_schedule::validation::validate_input;
use u_field_schedule::SchedulerConfig;

// ── CLI ─────────────────────────────────────────────────────────────

/// Fills each resource's free time with floating tasks for one day.
#[derive(Parser, Debug)]
#[command(name = "schedule-day", version, about)]
struct Cli {
    /// Path to the JSON dataset (resources + tasks).
    #[arg(long, env = "SCHEDULER_DATA", default_value = "data/dispatch.json")]
    data: PathBuf,

    /// Scheduling day (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Path to a scheduler TOML config.
    #[arg(long, env = "SCHEDULER_CONFIG")]
    config: Option<PathBuf>,

    /// Compute and log the plan without saving.
    #[arg(long)]
    dry_run: bool,

    /// Log a KPI summary per resource.
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SchedulerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SchedulerConfig::default(),
    };
    let day = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let mut dataset = Dataset::load(&cli.data)
        .with_context(|| format!("loading dataset {}", cli.data.display()))?;
    info!(
        "Loaded {} resources and {} tasks from {}",
        dataset.resources.len(),
        dataset.tasks.len(),
        cli.data.display()
    );

    if let Err(errors) = validate_input(&dataset.resources, &dataset.tasks, &config.eligible_status) {
        for e in &errors {
            warn!("{:?}: {}", e.kind, e.message);
        }
        let blocking = errors.iter().filter(|e| e.is_blocking()).count();
        if blocking > 0 {
            bail!("dataset failed validation with {} errors", blocking);
        }
    }

    let plan = plan_day(&dataset.resources, &dataset.tasks, day, &config)?;

    if cli.summary {
        for schedule in &plan.schedules {
            let Some(resource) = dataset
                .resources
                .iter()
                .find(|r| r.resource_id == schedule.resource_id)
            else {
                continue;
            };
            let kpi = ScheduleKpi::calculate(schedule, &resource.shift()?);
            info!(
                "{}: {} appt, {} windowed, {} overflow, travel {:.0} min, utilization {:.0}%, overrun {:.0} min",
                schedule.resource_id,
                kpi.appointment_count,
                kpi.windowed_count,
                kpi.overflow_count,
                kpi.total_travel_minutes,
                kpi.utilization * 100.0,
                kpi.overrun_minutes
            );
        }
    }
    for resource_id in plan.overloaded_resources() {
        warn!("{} is overloaded on {}", resource_id, day);
    }

    let written = ScheduleWriter::apply(&mut dataset.tasks, &plan);
    if cli.dry_run {
        info!("Dry run: {} tasks would be updated", written);
        return Ok(());
    }

    dataset
        .save(&cli.data)
        .with_context(|| format!("saving dataset {}", cli.data.display()))?;
    info!("Updated {} tasks in {}", written, cli.data.display());
    Ok(())
}
