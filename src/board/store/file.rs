//! Markdown-file task store: `<data_dir>/tasks/<id>.md`, managed by mdstore.

use async_trait::async_trait;
use mdstore::{
    CreateOptions, CustomFieldDef, Filters, IdStrategy, StoreError, TypeConfig, TypeFeatures,
    UpdateOptions,
};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use super::TaskStore;
use crate::board::error::TaskError;
use crate::board::types::{NewTask, Task};
use crate::config::BoardSettings;
use crate::utils::get_tasks_path;

/// Custom field holding the order key.
const ORDER_FIELD: &str = "order";
/// Custom field holding the assignee; empty when unassigned.
const ASSIGNEE_FIELD: &str = "assignee";

/// Storage schema for tasks: the board's status columns plus the custom
/// fields carrying order and assignee.
fn task_type_config(settings: &BoardSettings) -> TypeConfig {
    TypeConfig {
        name: "Task".to_string(),
        identifier: IdStrategy::Uuid,
        features: TypeFeatures {
            status: true,
            ..TypeFeatures::default()
        },
        statuses: settings.statuses.clone(),
        default_status: Some(settings.default_status.clone()),
        priority_levels: None,
        custom_fields: vec![
            CustomFieldDef {
                name: ORDER_FIELD.to_string(),
                field_type: "number".to_string(),
                required: false,
                default_value: None,
                enum_values: Vec::new(),
            },
            CustomFieldDef {
                name: ASSIGNEE_FIELD.to_string(),
                field_type: "string".to_string(),
                required: false,
                default_value: None,
                enum_values: Vec::new(),
            },
        ],
    }
}

fn task_fields(order: f64, assignee: Option<&str>) -> HashMap<String, Value> {
    HashMap::from([
        (ORDER_FIELD.to_string(), Value::from(order)),
        (
            ASSIGNEE_FIELD.to_string(),
            Value::from(assignee.unwrap_or_default()),
        ),
    ])
}

fn task_from_item(item: mdstore::Item) -> Result<Task, TaskError> {
    let malformed = |reason: &str| TaskError::MalformedTask {
        id: item.id.clone(),
        reason: reason.to_string(),
    };
    let fields = &item.frontmatter.custom_fields;
    let order = fields
        .get(ORDER_FIELD)
        .and_then(Value::as_f64)
        .ok_or_else(|| malformed("missing numeric order"))?;
    let assignee = fields
        .get(ASSIGNEE_FIELD)
        .and_then(Value::as_str)
        .filter(|a| !a.is_empty())
        .map(str::to_string);
    let status = item
        .frontmatter
        .status
        .clone()
        .ok_or_else(|| malformed("missing status"))?;

    Ok(Task {
        id: item.id,
        title: item.title,
        description: item.body,
        status,
        order,
        assignee,
        created_at: item.frontmatter.created_at,
        updated_at: item.frontmatter.updated_at,
    })
}

/// Stores each task as a Markdown file with YAML frontmatter.
pub struct FileTaskStore {
    tasks_dir: PathBuf,
    config: TypeConfig,
}

impl fmt::Debug for FileTaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileTaskStore")
            .field("tasks_dir", &self.tasks_dir)
            .finish_non_exhaustive()
    }
}

impl FileTaskStore {
    /// Open the store rooted at `data_dir`, creating the tasks folder.
    pub async fn open(data_dir: &Path, settings: &BoardSettings) -> Result<Self, TaskError> {
        let tasks_dir = get_tasks_path(data_dir);
        fs::create_dir_all(&tasks_dir).await?;
        Ok(Self {
            tasks_dir,
            config: task_type_config(settings),
        })
    }

    #[must_use]
    pub fn tasks_dir(&self) -> &Path {
        &self.tasks_dir
    }
}

#[async_trait]
impl TaskStore for FileTaskStore {
    fn location(&self) -> String {
        self.tasks_dir.display().to_string()
    }

    async fn create(&self, task: NewTask) -> Result<Task, TaskError> {
        let options = CreateOptions {
            title: task.title,
            body: task.description,
            id: None,
            status: Some(task.status),
            priority: None,
            tags: None,
            projects: None,
            custom_fields: task_fields(task.order, task.assignee.as_deref()),
            comment: None,
        };
        let item = mdstore::create(&self.tasks_dir, &self.config, options).await?;
        task_from_item(item)
    }

    async fn load(&self, id: &str) -> Result<Option<Task>, TaskError> {
        match mdstore::get(&self.tasks_dir, id).await {
            Ok(item) => task_from_item(item).map(Some),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn load_all(&self) -> Result<Vec<Task>, TaskError> {
        let items = mdstore::list(&self.tasks_dir, Filters::new()).await?;
        let mut tasks = Vec::with_capacity(items.len());
        for item in items {
            match task_from_item(item) {
                Ok(task) => tasks.push(task),
                Err(e) => warn!(dir = %self.tasks_dir.display(), error = %e, "Skipping malformed task"),
            }
        }
        Ok(tasks)
    }

    async fn update(&self, task: &Task) -> Result<Task, TaskError> {
        let options = UpdateOptions {
            title: Some(task.title.clone()),
            body: Some(task.description.clone()),
            status: Some(task.status.clone()),
            priority: None,
            tags: None,
            projects: None,
            custom_fields: task_fields(task.order, task.assignee.as_deref()),
            comment: None,
        };
        let item = mdstore::update(&self.tasks_dir, &self.config, &task.id, options).await?;
        task_from_item(item)
    }

    async fn remove(&self, id: &str) -> Result<bool, TaskError> {
        match mdstore::delete(&self.tasks_dir, id, true).await {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
