mod credential;
mod destination;

pub use credential::*;
pub use destination::*;
