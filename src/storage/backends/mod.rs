//! Storage backend implementations

pub mod memory;
pub mod sql;

pub use memory::MemoryUserRepository;
pub use sql::SqlUserRepository;
