use tonic::{Response, Status};

use crate::board::{Board, TaskStore};
use crate::server::convert::task_to_proto;
use crate::server::proto::{GetTaskRequest, GetTaskResponse};
use crate::server::structured_error::to_error_json;

pub async fn get_task<S: TaskStore>(
    board: &Board<S>,
    req: GetTaskRequest,
) -> Result<Response<GetTaskResponse>, Status> {
    match board.get_task(&req.task_id).await {
        Ok(task) => Ok(Response::new(GetTaskResponse {
            success: true,
            error: String::new(),
            task: Some(task_to_proto(&task)),
        })),
        Err(e) => Ok(Response::new(GetTaskResponse {
            success: false,
            error: to_error_json(&board.store().location(), &e),
            ..Default::default()
        })),
    }
}
