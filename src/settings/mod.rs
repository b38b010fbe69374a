//! Settings come from a TOML file layered with `GATEWAY__*` environment
//! variables. Database credentials belong in the environment, not the file.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
