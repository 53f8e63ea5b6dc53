// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and the store
// - Commands accept DTOs, return DTOs
// - Commands turn errors into serialized ErrorResponse payloads
// - Commands NEVER contain business logic

pub mod movie_commands;

pub use movie_commands::*;
