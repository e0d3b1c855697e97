//! Infrastructure adapters. Implement ports.
//!
//! In-memory record store and terminal UI. Map errors to DomainError.

pub mod persistence;
pub mod ui;
