//! gRPC / gRPC-Web surface of the board.

pub mod convert;
pub mod error_mapping;
pub mod handlers;
pub mod structured_error;
mod trait_impl;

use std::sync::Arc;

use crate::board::{Board, TaskStore};

// Generated protobuf types
pub mod proto {
    #![allow(clippy::pedantic)]
    #![allow(clippy::all)]
    tonic::include_proto!("taskboard");
}

/// Encoded descriptors for gRPC reflection.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("taskboard_descriptor");

/// Implements the `taskboard.TaskBoard` service over a shared [`Board`].
#[derive(Debug)]
pub struct TaskBoardService<S> {
    board: Arc<Board<S>>,
}

impl<S: TaskStore> TaskBoardService<S> {
    #[must_use]
    pub fn new(board: Arc<Board<S>>) -> Self {
        Self { board }
    }

    #[must_use]
    pub fn board(&self) -> &Board<S> {
        &self.board
    }
}
