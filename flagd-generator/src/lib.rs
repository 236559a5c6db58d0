pub mod commands;
pub mod context;
pub mod error;
pub mod flag_models;
pub mod generator;
pub mod summary;
pub mod targeting;
pub mod writer;

pub mod cmd {
    pub use super::commands::Cli;
}
