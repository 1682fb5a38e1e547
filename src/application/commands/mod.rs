// src/application/commands/mod.rs
//
// Tauri Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands accept DTOs, return DTOs or view models
// - Commands handle error conversion for Tauri
// - Commands NEVER contain business logic

pub mod dataset_commands;
pub mod detail_commands;
pub mod link_commands;
pub mod list_commands;
pub mod map_commands;
pub mod navigation_commands;
pub mod statistics_commands;

pub use dataset_commands::*;
pub use detail_commands::*;
pub use link_commands::*;
pub use list_commands::*;
pub use map_commands::*;
pub use navigation_commands::*;
pub use statistics_commands::*;
