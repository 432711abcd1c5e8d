//! Task board daemon: tasks in ordered status columns, served over gRPC.

// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        clippy::float_cmp
    )
)]

pub mod app;
pub mod board;
pub mod config;
pub mod cors;
pub mod grpc_logging;
pub mod logging;
pub mod metrics;
pub mod ordering;
pub mod server;
pub mod utils;

pub use board::{
    Board, CreateTaskOptions, FileTaskStore, MemoryTaskStore, ReorderTaskOptions,
    NewTask, ReorderTaskResult, Task, TaskError, TaskFilter, TaskStore, UpdateTaskOptions,
};
pub use config::{BoardSettings, ConfigError, DaemonConfig};
pub use ordering::{
    assign, move_to_group, renumber, Exhaustion, KeySpaceExhausted, OrderKey, Orderable,
    Placement, RenumberRequired, DEFAULT_GAP,
};
pub use server::TaskBoardService;
