//! Infrastructure layer - Terminal, configuration and logging

pub mod config;
pub mod logging;
pub mod terminal;

pub use config::Config;
pub use logging::init_tracing;
pub use terminal::TerminalSession;
