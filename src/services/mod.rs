//! Services behind the CLI commands.

pub mod generate;
pub mod plan_file;
