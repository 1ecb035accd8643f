//! Productivity task list: toolbar selections and the backend query they map to.

pub mod filters;

pub use filters::{
    Assignee, DueWindow, StatusTab, TaskFilters, TaskPriority, TaskSortKey, TaskStatus,
};
