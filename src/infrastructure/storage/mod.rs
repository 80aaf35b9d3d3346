//! Non-SQL view stores

mod memory;

pub use memory::InMemoryViewStore;
