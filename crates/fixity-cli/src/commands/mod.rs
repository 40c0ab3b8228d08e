//! Command implementations for fixity-cli

pub mod generate;
pub mod verify;

pub use generate::run_generate;
pub use verify::run_verify;
