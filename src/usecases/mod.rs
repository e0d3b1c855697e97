//! Application use cases. Orchestrate domain logic via ports.

pub mod mark_service;
pub mod prompts;
pub mod roster_service;

pub use mark_service::MarkService;
pub use roster_service::RosterService;
