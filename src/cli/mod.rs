pub mod commands;
pub mod formatters;
pub mod input;
pub mod menus;
pub mod output;
mod shell;

pub use shell::{run_cli, run_session, CliMode};
