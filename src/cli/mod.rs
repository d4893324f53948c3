pub mod commands;
pub mod convert;
pub mod history;
pub mod serve;
pub mod upload;

pub use commands::{Cli, Commands};
