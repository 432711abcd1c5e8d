//! Board operations over a [`TaskStore`].

use std::cmp::Ordering;
use tracing::{debug, info};
use uuid::Uuid;

use super::error::TaskError;
use super::locks::{GroupGuard, GroupLocks};
use super::status::resolve_status;
use super::store::TaskStore;
use super::types::{
    CreateTaskOptions, GroupSummary, NewTask, ReorderTaskOptions, ReorderTaskResult, Task,
    TaskFilter, UpdateTaskOptions,
};
use crate::config::BoardSettings;
use crate::ordering::{
    assign_in, compare, move_to_group, renumber_items, sort_group, KeySpaceExhausted,
    RenumberRequired,
};

/// How often to chase a task that keeps changing column while we wait for locks.
const MAX_LOCK_ATTEMPTS: usize = 3;

/// A task board: status columns of ordered tasks.
#[derive(Debug)]
pub struct Board<S> {
    store: S,
    settings: BoardSettings,
    locks: GroupLocks,
}

impl<S: TaskStore> Board<S> {
    #[must_use]
    pub fn new(store: S, settings: BoardSettings) -> Self {
        Self {
            store,
            settings,
            locks: GroupLocks::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a task at the tail of its column.
    pub async fn create_task(&self, options: CreateTaskOptions) -> Result<Task, TaskError> {
        let title = normalize_title(&options.title)?;
        let status = match options.status.as_deref() {
            Some(s) if !s.trim().is_empty() => self.resolve(s)?,
            _ => self.settings.default_status.clone(),
        };

        let _guard = self.locks.lock(&status).await;
        let column = self.load_group(&status).await?;
        let tail = column.len();
        let (order, _) = self.place(None, &status, column, tail).await?;
        let task = self
            .store
            .create(NewTask {
                title,
                description: options.description.trim().to_string(),
                status,
                order,
                assignee: options.assignee.filter(|a| !a.trim().is_empty()),
            })
            .await?;

        info!(task_id = %task.id, status = %task.status, order = task.order, "Created task");
        Ok(task)
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, TaskError> {
        validate_task_id(id)?;
        self.store
            .load(id)
            .await?
            .ok_or_else(|| TaskError::TaskNotFound(id.to_string()))
    }

    /// All tasks matching `filter`, column by column in configured order.
    pub async fn list_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>, TaskError> {
        let TaskFilter { status, assignee } = filter;
        let status = status.as_deref().map(|s| self.resolve(s)).transpose()?;

        let mut tasks: Vec<Task> = self.store.load_all().await?;
        if let Some(status) = status {
            tasks.retain(|t| t.status == status);
        }
        if let Some(assignee) = assignee {
            tasks.retain(|t| t.assignee.as_ref() == Some(&assignee));
        }

        tasks.sort_by(|a, b| {
            self.column_cmp(&a.status, &b.status)
                .then_with(|| compare(a, b))
        });
        Ok(tasks)
    }

    /// One column in its total order.
    pub async fn group_tasks(&self, status: &str) -> Result<Vec<Task>, TaskError> {
        let status = self.resolve(status)?;
        self.load_group(&status).await
    }

    /// Configured columns with their task counts.
    pub async fn list_groups(&self) -> Result<Vec<GroupSummary>, TaskError> {
        let tasks = self.store.load_all().await?;
        Ok(self
            .settings
            .statuses
            .iter()
            .map(|status| GroupSummary {
                id: status.clone(),
                task_count: tasks.iter().filter(|t| &t.status == status).count(),
            })
            .collect())
    }

    /// Update task fields. A new status moves the task to the tail of that
    /// column.
    pub async fn update_task(
        &self,
        id: &str,
        options: UpdateTaskOptions,
    ) -> Result<Task, TaskError> {
        validate_task_id(id)?;
        let destination = options
            .status
            .as_deref()
            .map(|s| self.resolve(s))
            .transpose()?;
        let title = options.title.as_deref().map(normalize_title).transpose()?;

        let (_guard, mut task) = self.lock_task(id, destination.as_deref()).await?;

        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = options.description {
            task.description = description.trim().to_string();
        }
        if let Some(assignee) = options.assignee {
            task.assignee = (!assignee.trim().is_empty()).then_some(assignee);
        }
        if let Some(status) = destination.filter(|s| s != &task.status) {
            let column = self.load_group(&status).await?;
            let tail = column.len();
            let (order, _) = self.place(Some(&task), &status, column, tail).await?;
            debug!(task_id = %id, from = %task.status, to = %status, "Moved task by status change");
            task.status = status;
            task.order = order;
        }
        self.store.update(&task).await
    }

    /// Delete a task. The rest of its column keeps its keys.
    pub async fn delete_task(&self, id: &str) -> Result<String, TaskError> {
        validate_task_id(id)?;
        let (_guard, task) = self.lock_task(id, None).await?;
        if !self.store.remove(&task.id).await? {
            return Err(TaskError::TaskNotFound(id.to_string()));
        }
        info!(task_id = %id, status = %task.status, "Deleted task");
        Ok(task.id)
    }

    /// Drop a task at `target_index` of `options.group`.
    ///
    /// `target_index` counts the destination column without the moved task.
    /// When `expected_task_ids` is non-empty it must match that column exactly,
    /// otherwise [`TaskError::StaleView`] is returned and nothing changes.
    pub async fn reorder_task(
        &self,
        id: &str,
        options: ReorderTaskOptions,
    ) -> Result<ReorderTaskResult, TaskError> {
        validate_task_id(id)?;
        let ReorderTaskOptions {
            group,
            target_index,
            expected_task_ids,
        } = options;
        let group = self.resolve(&group)?;
        let (_guard, mut task) = self.lock_task(id, Some(&group)).await?;

        let column = self.load_group(&group).await?;
        let others: Vec<&str> = column
            .iter()
            .filter(|t| t.id != task.id)
            .map(|t| t.id.as_str())
            .collect();
        // An index is only meaningful against the column the client saw.
        if !expected_task_ids.is_empty() && others != expected_task_ids {
            debug!(task_id = %id, group = %group, "Rejected reorder against a stale column");
            return Err(TaskError::StaleView(group));
        }
        if target_index > others.len() {
            return Err(TaskError::InvalidIndex {
                index: target_index,
                len: others.len(),
            });
        }

        let (order, renumbered) = self
            .place(Some(&task), &group, column, target_index)
            .await?;
        debug!(
            task_id = %id,
            from = %task.status,
            to = %group,
            index = target_index,
            order,
            renumbered,
            "Reordered task"
        );
        task.status = group;
        task.order = order;
        let task = self.store.update(&task).await?;

        Ok(ReorderTaskResult { task, renumbered })
    }

    /// Give every task in a column a fresh evenly spaced key.
    pub async fn renumber_group(&self, status: &str) -> Result<Vec<Task>, TaskError> {
        let status = self.resolve(status)?;
        let _guard = self.locks.lock(&status).await;
        let column = self.load_group(&status).await?;
        self.renumber_column(&status, column).await
    }

    fn resolve(&self, status: &str) -> Result<String, TaskError> {
        Ok(resolve_status(status, &self.settings.statuses)?)
    }

    fn column_cmp(&self, a: &str, b: &str) -> Ordering {
        match (self.settings.status_rank(a), self.settings.status_rank(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }

    async fn load_group(&self, status: &str) -> Result<Vec<Task>, TaskError> {
        let mut column: Vec<Task> = self
            .store
            .load_all()
            .await?
            .into_iter()
            .filter(|t| t.status == status)
            .collect();
        sort_group(&mut column);
        Ok(column)
    }

    /// Lock the task's current column together with `destination` and return
    /// the task as read under those locks.
    async fn lock_task(
        &self,
        id: &str,
        destination: Option<&str>,
    ) -> Result<(GroupGuard, Task), TaskError> {
        for _ in 0..MAX_LOCK_ATTEMPTS {
            let seen = self.get_task(id).await?;
            let target = destination.unwrap_or(&seen.status);
            let guard = self.locks.lock_pair(&seen.status, target).await;

            let current = self.get_task(id).await?;
            if current.status == seen.status {
                return Ok((guard, current));
            }
            debug!(task_id = %id, "Task changed column while waiting for locks");
        }
        Err(TaskError::Conflict(id.to_string()))
    }

    /// Key for `moving` (a new task when `None`) at `index` of `column`,
    /// renumbering the column once if it has no room there. Must run under
    /// the column's lock.
    async fn place(
        &self,
        moving: Option<&Task>,
        group: &str,
        column: Vec<Task>,
        index: usize,
    ) -> Result<(f64, bool), TaskError> {
        let gap = self.settings.gap;
        let slot = |column: &[Task]| -> Result<f64, RenumberRequired> {
            match moving {
                Some(task) => move_to_group(task, group, column, index, gap).map(|p| p.order),
                None => assign_in(column, index, gap),
            }
        };
        match slot(&column) {
            Ok(order) => Ok((order, false)),
            Err(signal) => {
                debug!(group = %group, index = signal.index, reason = ?signal.reason, "Column out of order keys");
                let count = column.len();
                let column = self.renumber_column(group, column).await?;
                let order = slot(&column).map_err(|_| KeySpaceExhausted { count })?;
                Ok((order, true))
            }
        }
    }

    async fn renumber_column(
        &self,
        group: &str,
        mut column: Vec<Task>,
    ) -> Result<Vec<Task>, TaskError> {
        let keys = renumber_items(&column, self.settings.gap)?;
        for (task, key) in column.iter_mut().zip(keys) {
            task.order = key;
        }
        let column = self.store.update_all(&column).await?;
        info!(group = %group, count = column.len(), "Renumbered column");
        Ok(column)
    }
}

/// Trimmed title; it must be non-empty and fit on the `# Title` line.
fn normalize_title(title: &str) -> Result<String, TaskError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::TitleRequired);
    }
    if title.contains(['\n', '\r']) {
        return Err(TaskError::InvalidTitle);
    }
    Ok(title.to_string())
}

fn validate_task_id(id: &str) -> Result<(), TaskError> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| TaskError::InvalidTaskId(id.to_string()))
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
