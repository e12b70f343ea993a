use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::source::TaskSet;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "focusboard",
    version,
    about = "Focused, Backlogs, Goals and Progress boards for your tasks, in the terminal.",
    after_help = "Examples:\n  focusboard               Launch the TUI (same as `focusboard tui`)\n  focusboard stats --json\n  focusboard --log debug tui"
)]
pub struct Cli {
    /// Override the data directory (defaults to platform-specific app dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Tracing filter written to the log file (e.g. "info", "focusboard_core=debug")
    #[arg(long = "log", value_name = "DIRECTIVE", global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Launch the keyboard-first terminal UI (default command)
    Tui,
    /// Print completion statistics for a task set
    Stats(StatsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Which task set to summarize
    #[arg(long, value_enum, default_value_t = TaskSet::Progress)]
    pub set: TaskSet,

    /// Emit JSON instead of a text summary
    #[arg(long)]
    pub json: bool,
}
