pub mod mark_sweeper;
pub mod view_counter;

pub use mark_sweeper::{start_mark_sweeper_task, sweep_expired_marks};
pub use view_counter::ViewCounterService;
