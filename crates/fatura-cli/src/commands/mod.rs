//! CLI subcommands.

pub mod banks;
pub mod process;
