// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Provides the boundary between UI (Tauri) and the services
// - Translates between DTOs and domain entities
// - UI intents enter here and leave as service calls or events

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
