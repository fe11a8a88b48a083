//! `TaskDeck` — task data model and in-memory store.
//!
//! Holds the domain types for the console to-do manager: [`Task`],
//! [`TaskId`], and the [`TaskStore`] that owns the task sequence and
//! the id counter. No I/O lives here; the console crate drives the
//! store and renders its contents.

pub mod store;
pub mod task;

pub use store::{StoreError, TaskStore};
pub use task::{Task, TaskId};
