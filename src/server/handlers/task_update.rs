use tonic::{Response, Status};

use crate::board::{Board, TaskStore, UpdateTaskOptions};
use crate::server::convert::task_to_proto;
use crate::server::proto::{UpdateTaskRequest, UpdateTaskResponse};
use crate::server::structured_error::to_error_json;

pub async fn update_task<S: TaskStore>(
    board: &Board<S>,
    req: UpdateTaskRequest,
) -> Result<Response<UpdateTaskResponse>, Status> {
    // Presence matters here: an explicit empty assignee clears it
    let options = UpdateTaskOptions {
        title: req.title,
        description: req.description,
        status: req.status,
        assignee: req.assignee,
    };

    match board.update_task(&req.task_id, options).await {
        Ok(task) => Ok(Response::new(UpdateTaskResponse {
            success: true,
            error: String::new(),
            task: Some(task_to_proto(&task)),
        })),
        Err(e) => Ok(Response::new(UpdateTaskResponse {
            success: false,
            error: to_error_json(&board.store().location(), &e),
            ..Default::default()
        })),
    }
}
