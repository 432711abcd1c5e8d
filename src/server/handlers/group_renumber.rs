use tonic::{Response, Status};

use crate::board::{Board, TaskStore};
use crate::server::convert::task_to_proto;
use crate::server::proto::{RenumberGroupRequest, RenumberGroupResponse};
use crate::server::structured_error::to_error_json;

pub async fn renumber_group<S: TaskStore>(
    board: &Board<S>,
    req: RenumberGroupRequest,
) -> Result<Response<RenumberGroupResponse>, Status> {
    match board.renumber_group(&req.group_id).await {
        Ok(tasks) => Ok(Response::new(RenumberGroupResponse {
            success: true,
            error: String::new(),
            tasks: tasks.iter().map(task_to_proto).collect(),
        })),
        Err(e) => Ok(Response::new(RenumberGroupResponse {
            success: false,
            error: to_error_json(&board.store().location(), &e),
            ..Default::default()
        })),
    }
}
