//! Application layer: use cases on top of the domain repositories

pub mod services;

pub use services::{start_mark_sweeper_task, sweep_expired_marks, ViewCounterService};
