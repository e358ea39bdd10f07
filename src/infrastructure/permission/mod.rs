//! Permission store adapters

mod json_file;
mod memory;

pub use json_file::JsonPermissionStore;
pub use memory::MemoryPermissionStore;
