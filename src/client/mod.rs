//! The verification flow a user drives: collect a username, ask the lookup
//! service, then redirect or show a dismissible error.

mod http;
mod port;
mod state;
mod verification;

pub use http::*;
pub use port::*;
pub use state::*;
pub use verification::*;
