mod dto;
mod error;
mod handler;
mod router;

pub use dto::*;
pub use error::{ApiErrorCode, recover_error};
pub use router::{cors, routes, service};
