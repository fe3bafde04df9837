//! Task store implementations

pub mod memory_store;
pub mod sqlite_store;

pub use memory_store::MemoryTodoStore;
pub use sqlite_store::SqliteTodoStore;
