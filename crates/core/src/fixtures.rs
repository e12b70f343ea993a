//! Sample task collections shown by the screens until a real task source exists.

use chrono::{DateTime, Duration, Utc};

use crate::model::{Priority, Task};

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    completed: bool,
    created_days_ago: i64,
    due_in_days: i64,
    priority: Priority,
    category: &'static str,
}

const PROPOSAL: Seed = Seed {
    id: "1",
    title: "Complete project proposal",
    description: "Write and submit the quarterly project proposal",
    completed: false,
    created_days_ago: 0,
    due_in_days: 7,
    priority: Priority::High,
    category: "Work",
};

const CODE_REVIEW: Seed = Seed {
    id: "2",
    title: "Review code changes",
    description: "Review pull requests for the main branch",
    completed: true,
    created_days_ago: 2,
    due_in_days: -1,
    priority: Priority::Medium,
    category: "Development",
};

const DOCUMENTATION: Seed = Seed {
    id: "3",
    title: "Update documentation",
    description: "Update API documentation with new endpoints",
    completed: false,
    created_days_ago: 0,
    due_in_days: 3,
    priority: Priority::Low,
    category: "Documentation",
};

const TEAM_MEETING: Seed = Seed {
    id: "4",
    title: "Team meeting",
    description: "Weekly team sync meeting",
    completed: true,
    created_days_ago: 1,
    due_in_days: -1,
    priority: Priority::Medium,
    category: "Meetings",
};

const BUG_FIXES: Seed = Seed {
    id: "5",
    title: "Bug fixes",
    description: "Fix critical bugs in production",
    completed: true,
    created_days_ago: 3,
    due_in_days: -2,
    priority: Priority::High,
    category: "Development",
};

impl Seed {
    fn build(&self, now: DateTime<Utc>) -> Task {
        Task {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            completed: self.completed,
            created_at: now - Duration::days(self.created_days_ago),
            due_at: Some(now + Duration::days(self.due_in_days)),
            priority: self.priority,
            category: self.category.to_string(),
        }
    }
}

/// Tasks listed on the Focused screen.
pub fn focused_tasks(now: DateTime<Utc>) -> Vec<Task> {
    [PROPOSAL, CODE_REVIEW, DOCUMENTATION]
        .iter()
        .map(|seed| seed.build(now))
        .collect()
}

/// Tasks summarized on the Progress screen.
pub fn progress_tasks(now: DateTime<Utc>) -> Vec<Task> {
    [PROPOSAL, CODE_REVIEW, DOCUMENTATION, TEAM_MEETING, BUG_FIXES]
        .iter()
        .map(|seed| seed.build(now))
        .collect()
}
