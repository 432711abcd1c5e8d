//! One free function per RPC. Domain failures become `success: false` with a
//! structured `error`; `Status` is reserved for transport problems.

pub mod group_list;
pub mod group_renumber;
pub mod task_create;
pub mod task_delete;
pub mod task_list;
pub mod task_read;
pub mod task_reorder;
pub mod task_update;
