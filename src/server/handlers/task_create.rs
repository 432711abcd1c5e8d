use tonic::{Response, Status};

use crate::board::{Board, CreateTaskOptions, TaskStore};
use crate::server::convert::{nonempty, task_to_proto};
use crate::server::proto::{CreateTaskRequest, CreateTaskResponse};
use crate::server::structured_error::to_error_json;

pub async fn create_task<S: TaskStore>(
    board: &Board<S>,
    req: CreateTaskRequest,
) -> Result<Response<CreateTaskResponse>, Status> {
    let options = CreateTaskOptions {
        title: req.title,
        description: req.description,
        status: nonempty(req.status),
        assignee: nonempty(req.assignee),
    };

    match board.create_task(options).await {
        Ok(task) => Ok(Response::new(CreateTaskResponse {
            success: true,
            error: String::new(),
            task: Some(task_to_proto(&task)),
        })),
        Err(e) => Ok(Response::new(CreateTaskResponse {
            success: false,
            error: to_error_json(&board.store().location(), &e),
            ..Default::default()
        })),
    }
}
