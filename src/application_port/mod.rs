mod lookup_service;

pub use lookup_service::*;
