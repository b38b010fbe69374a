// repo

mod credential_repo;

pub use credential_repo::*;
