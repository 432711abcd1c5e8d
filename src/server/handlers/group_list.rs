use tonic::{Response, Status};

use crate::board::{Board, TaskStore};
use crate::server::convert::group_to_proto;
use crate::server::proto::{ListGroupsRequest, ListGroupsResponse};
use crate::server::structured_error::to_error_json;

pub async fn list_groups<S: TaskStore>(
    board: &Board<S>,
    _req: ListGroupsRequest,
) -> Result<Response<ListGroupsResponse>, Status> {
    match board.list_groups().await {
        Ok(groups) => Ok(Response::new(ListGroupsResponse {
            success: true,
            error: String::new(),
            groups: groups.iter().map(group_to_proto).collect(),
            default_group: board.settings().default_status.clone(),
        })),
        Err(e) => Ok(Response::new(ListGroupsResponse {
            success: false,
            error: to_error_json(&board.store().location(), &e),
            ..Default::default()
        })),
    }
}
