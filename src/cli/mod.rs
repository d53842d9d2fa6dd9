// src/cli/mod.rs
// Terminal front end

pub mod args;
pub mod planner;

pub use args::{CliArgs, Command};
pub use planner::Planner;
