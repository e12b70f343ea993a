use std::io::Write;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::cli::{CliCommand, StatsArgs};
use crate::source::{StaticTaskSource, TaskSet, TaskSource};
use crate::stats::{compute_category_stats, compute_stats, CategoryStat, TaskStats};

pub fn execute<W: Write>(command: CliCommand, mut writer: W) -> Result<()> {
    match command {
        CliCommand::Stats(args) => handle_stats(&args, &mut writer),
        CliCommand::Tui => Err(anyhow!("launch interactive surfaces directly")),
    }
}

fn handle_stats<W: Write>(args: &StatsArgs, mut writer: W) -> Result<()> {
    let source = StaticTaskSource::new(args.set, Utc::now())
        .with_context(|| format!("failed to load the {} task set", args.set))?;
    let report = StatsReport::collect(args.set, &source)?;

    if args.json {
        serde_json::to_writer_pretty(&mut writer, &report)?;
        writeln!(writer)?;
    } else {
        report.write_to(&mut writer)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct StatsReport {
    set: &'static str,
    #[serde(flatten)]
    stats: TaskStats,
    categories: Vec<CategoryStat>,
}

impl StatsReport {
    fn collect(set: TaskSet, source: &dyn TaskSource) -> Result<Self> {
        let tasks = source.all_tasks()?;
        Ok(Self {
            set: set.as_str(),
            stats: compute_stats(&tasks),
            categories: compute_category_stats(&tasks),
        })
    }

    fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "{}% complete ({} of {} tasks, {} pending)",
            self.stats.progress_percentage,
            self.stats.completed,
            self.stats.total,
            self.stats.pending
        )?;
        for category in &self.categories {
            writeln!(
                writer,
                "  {:<16} {}/{} {:>3}%",
                category.category, category.completed, category.total, category.percentage
            )?;
        }
        Ok(())
    }
}
