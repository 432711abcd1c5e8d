use tonic::{Response, Status};

use crate::board::{Board, TaskStore};
use crate::server::proto::{DeleteTaskRequest, DeleteTaskResponse};
use crate::server::structured_error::to_error_json;

pub async fn delete_task<S: TaskStore>(
    board: &Board<S>,
    req: DeleteTaskRequest,
) -> Result<Response<DeleteTaskResponse>, Status> {
    match board.delete_task(&req.task_id).await {
        Ok(deleted_id) => Ok(Response::new(DeleteTaskResponse {
            success: true,
            error: String::new(),
            deleted_id,
        })),
        Err(e) => Ok(Response::new(DeleteTaskResponse {
            success: false,
            error: to_error_json(&board.store().location(), &e),
            ..Default::default()
        })),
    }
}
