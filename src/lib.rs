//! morning-routine - Morning checklist and affirmation screen
//!
//! A terminal screen with a fixed morning checklist, a random affirmation
//! and three journal sentences. Nothing is persisted: every start is a
//! fresh morning.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

pub use error::RoutineError;
