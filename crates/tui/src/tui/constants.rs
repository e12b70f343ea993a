use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
// Short enough that FAB and toast animations are sampled smoothly.
pub(crate) const TICK_RATE: Duration = Duration::from_millis(50);
pub(crate) const STATUS_TTL: Duration = Duration::from_secs(5);

pub(crate) const FOCUSED_TITLE: &str = "Focused Tasks";
pub(crate) const BACKLOGS_TITLE: &str = "Backlogs";
pub(crate) const BACKLOGS_SUBTITLE: &str = "Organize and prioritize your pending tasks";
pub(crate) const GOALS_TITLE: &str = "Goals";
pub(crate) const GOALS_SUBTITLE: &str = "Set and track your long-term objectives";
pub(crate) const PROGRESS_TITLE: &str = "Progress Overview";
pub(crate) const PROGRESS_SUBTITLE: &str = "Track your task completion";
pub(crate) const CATEGORY_SECTION_TITLE: &str = "Progress by Category";

pub(crate) const NOTICE_REGULAR_TASK: &str = "Create a new regular task in backlog";
pub(crate) const NOTICE_RECURRING_TASK: &str = "Create a new recurring task in backlog";

pub(crate) const STATUS_FAB_OPEN: &str =
    "Quick add: r regular • c recurring • ↑/↓ + Enter choose • Esc close";
pub(crate) const STATUS_FAB_UNAVAILABLE: &str = "Quick add lives on the Backlogs tab";
pub(crate) const STATUS_NOTHING_TO_TOGGLE: &str = "Nothing to toggle";
pub(crate) const STATUS_HELP: &str = "Keyboard reference (Enter/Esc to close)";
