mod credential_repo_memory;

pub use credential_repo_memory::*;
