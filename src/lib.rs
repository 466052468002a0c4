// Domain layer - Core automaton logic
pub mod domain;

// Application layer - Run coordination
pub mod application;

// Infrastructure layer - CLI and terminal output
pub mod cli;
pub mod rendering;

// Re-exports for convenience
pub use application::Simulation;
pub use cli::{Cli, Config, ConfigError};
pub use domain::{Cell, HAT_RULE, RuleTable, Tape};
