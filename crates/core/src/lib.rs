pub mod config;
pub mod fixtures;
pub mod interaction;
pub mod model;
pub mod source;
pub mod stats;

pub use config::AppConfig;
pub use interaction::{
    CreateTaskIntent, FabAction, FabController, FabState, NavigationHost, NavigationState, Route,
    TabBar, TabEvent, TabEventKind, TabNavigator, Toast, ToastPhase,
};
pub use model::*;
pub use source::{SourceError, StaticTaskSource, TaskSet, TaskSource};
pub use stats::{compute_category_stats, compute_stats, CategoryStat, TaskStats};
