use tonic::{Response, Status};

use crate::board::{Board, TaskFilter, TaskStore};
use crate::server::convert::{nonempty, task_to_proto};
use crate::server::proto::{ListTasksRequest, ListTasksResponse};
use crate::server::structured_error::to_error_json;

pub async fn list_tasks<S: TaskStore>(
    board: &Board<S>,
    req: ListTasksRequest,
) -> Result<Response<ListTasksResponse>, Status> {
    let filter = TaskFilter {
        status: nonempty(req.status),
        assignee: nonempty(req.assignee),
    };

    match board.list_tasks(filter).await {
        Ok(tasks) => {
            let total_count = i32::try_from(tasks.len()).unwrap_or(i32::MAX);
            Ok(Response::new(ListTasksResponse {
                success: true,
                error: String::new(),
                tasks: tasks.iter().map(task_to_proto).collect(),
                total_count,
            }))
        }
        Err(e) => Ok(Response::new(ListTasksResponse {
            success: false,
            error: to_error_json(&board.store().location(), &e),
            ..Default::default()
        })),
    }
}
