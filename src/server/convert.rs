use crate::board::{GroupSummary, Task};

use super::proto;

#[must_use]
pub fn task_to_proto(task: &Task) -> proto::Task {
    proto::Task {
        id: task.id.clone(),
        title: task.title.clone(),
        description: task.description.clone(),
        status: task.status.clone(),
        order: task.order,
        assignee: task.assignee.clone().unwrap_or_default(),
        created_at: task.created_at.clone(),
        updated_at: task.updated_at.clone(),
    }
}

#[must_use]
pub fn group_to_proto(group: &GroupSummary) -> proto::Group {
    proto::Group {
        id: group.id.clone(),
        task_count: u32::try_from(group.task_count).unwrap_or(u32::MAX),
    }
}

/// Empty proto strings mean "not set".
#[must_use]
pub fn nonempty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
