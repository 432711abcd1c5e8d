use tonic::{Response, Status};

use crate::board::{Board, ReorderTaskOptions, TaskStore};
use crate::server::convert::task_to_proto;
use crate::server::proto::{ReorderTaskRequest, ReorderTaskResponse};
use crate::server::structured_error::to_error_json;

pub async fn reorder_task<S: TaskStore>(
    board: &Board<S>,
    req: ReorderTaskRequest,
) -> Result<Response<ReorderTaskResponse>, Status> {
    let options = ReorderTaskOptions {
        group: req.group_id,
        // Out-of-range indices are rejected by the board
        target_index: usize::try_from(req.target_index).unwrap_or(usize::MAX),
        expected_task_ids: req.expected_task_ids,
    };

    match board.reorder_task(&req.task_id, options).await {
        Ok(result) => Ok(Response::new(ReorderTaskResponse {
            success: true,
            error: String::new(),
            order: result.task.order,
            renumbered: result.renumbered,
            task: Some(task_to_proto(&result.task)),
        })),
        Err(e) => Ok(Response::new(ReorderTaskResponse {
            success: false,
            error: to_error_json(&board.store().location(), &e),
            ..Default::default()
        })),
    }
}

#[cfg(test)]
#[path = "task_reorder_tests.rs"]
mod task_reorder_tests;
