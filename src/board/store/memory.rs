use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::TaskStore;
use crate::board::error::TaskError;
use crate::board::types::{NewTask, Task};
use crate::utils::now_iso;

/// Keeps tasks in memory only; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    tasks: RwLock<HashMap<String, Task>>,
}

impl MemoryTaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn refresh(stored: &mut Task, task: &Task, now: &str) {
    stored.title.clone_from(&task.title);
    stored.description.clone_from(&task.description);
    stored.status.clone_from(&task.status);
    stored.order = task.order;
    stored.assignee.clone_from(&task.assignee);
    stored.updated_at = now.to_string();
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    fn location(&self) -> String {
        "memory".to_string()
    }

    async fn create(&self, task: NewTask) -> Result<Task, TaskError> {
        let NewTask {
            title,
            description,
            status,
            order,
            assignee,
        } = task;
        let now = now_iso();
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            status,
            order,
            assignee,
            created_at: now.clone(),
            updated_at: now,
        };
        self.tasks
            .write()
            .await
            .insert(task.id.clone(), task.clone());
        Ok(task)
    }

    async fn load(&self, id: &str) -> Result<Option<Task>, TaskError> {
        Ok(self.tasks.read().await.get(id).cloned())
    }

    async fn load_all(&self) -> Result<Vec<Task>, TaskError> {
        Ok(self.tasks.read().await.values().cloned().collect())
    }

    async fn update(&self, task: &Task) -> Result<Task, TaskError> {
        let mut guard = self.tasks.write().await;
        let stored = guard
            .get_mut(&task.id)
            .ok_or_else(|| TaskError::TaskNotFound(task.id.clone()))?;
        refresh(stored, task, &now_iso());
        Ok(stored.clone())
    }

    async fn update_all(&self, tasks: &[Task]) -> Result<Vec<Task>, TaskError> {
        let mut guard = self.tasks.write().await;
        let now = now_iso();
        let mut updated = Vec::with_capacity(tasks.len());
        for task in tasks {
            let stored = guard
                .get_mut(&task.id)
                .ok_or_else(|| TaskError::TaskNotFound(task.id.clone()))?;
            refresh(stored, task, &now);
            updated.push(stored.clone());
        }
        Ok(updated)
    }

    async fn remove(&self, id: &str) -> Result<bool, TaskError> {
        Ok(self.tasks.write().await.remove(id).is_some())
    }
}
