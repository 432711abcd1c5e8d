use crate::board::TaskStore;
use crate::metrics::{generate_request_id, OperationTimer};
use tonic::{Request, Response, Status};
use tracing::instrument;

use super::handlers;
use super::proto::task_board_server::TaskBoard;
use super::proto::{
    CreateTaskRequest, CreateTaskResponse, DeleteTaskRequest, DeleteTaskResponse, GetTaskRequest,
    GetTaskResponse, ListGroupsRequest, ListGroupsResponse, ListTasksRequest, ListTasksResponse,
    RenumberGroupRequest, RenumberGroupResponse, ReorderTaskRequest, ReorderTaskResponse,
    UpdateTaskRequest, UpdateTaskResponse,
};
use super::TaskBoardService;

#[tonic::async_trait]
impl<S: TaskStore + 'static> TaskBoard for TaskBoardService<S> {
    #[instrument(
        name = "grpc.create_task",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn create_task(
        &self,
        request: Request<CreateTaskRequest>,
    ) -> Result<Response<CreateTaskResponse>, Status> {
        let _timer = OperationTimer::new("create_task");
        handlers::task_create::create_task(self.board(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.get_task",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn get_task(
        &self,
        request: Request<GetTaskRequest>,
    ) -> Result<Response<GetTaskResponse>, Status> {
        let _timer = OperationTimer::new("get_task");
        handlers::task_read::get_task(self.board(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.list_tasks",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn list_tasks(
        &self,
        request: Request<ListTasksRequest>,
    ) -> Result<Response<ListTasksResponse>, Status> {
        let _timer = OperationTimer::new("list_tasks");
        handlers::task_list::list_tasks(self.board(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.list_groups",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn list_groups(
        &self,
        request: Request<ListGroupsRequest>,
    ) -> Result<Response<ListGroupsResponse>, Status> {
        let _timer = OperationTimer::new("list_groups");
        handlers::group_list::list_groups(self.board(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.update_task",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn update_task(
        &self,
        request: Request<UpdateTaskRequest>,
    ) -> Result<Response<UpdateTaskResponse>, Status> {
        let _timer = OperationTimer::new("update_task");
        handlers::task_update::update_task(self.board(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.delete_task",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn delete_task(
        &self,
        request: Request<DeleteTaskRequest>,
    ) -> Result<Response<DeleteTaskResponse>, Status> {
        let _timer = OperationTimer::new("delete_task");
        handlers::task_delete::delete_task(self.board(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.reorder_task",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn reorder_task(
        &self,
        request: Request<ReorderTaskRequest>,
    ) -> Result<Response<ReorderTaskResponse>, Status> {
        let _timer = OperationTimer::new("reorder_task");
        handlers::task_reorder::reorder_task(self.board(), request.into_inner()).await
    }

    #[instrument(
        name = "grpc.renumber_group",
        skip(self, request),
        fields(request_id = %generate_request_id())
    )]
    async fn renumber_group(
        &self,
        request: Request<RenumberGroupRequest>,
    ) -> Result<Response<RenumberGroupResponse>, Status> {
        let _timer = OperationTimer::new("renumber_group");
        handlers::group_renumber::renumber_group(self.board(), request.into_inner()).await
    }
}
