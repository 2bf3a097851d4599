//! Application layer - Use cases and orchestration

pub mod routine_service;

pub use routine_service::RoutineService;
