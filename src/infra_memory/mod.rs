mod message_repo_memory;

pub use message_repo_memory::*;
