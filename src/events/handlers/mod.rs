// src/events/handlers/mod.rs
//
// Subscriptions that drive list, map and statistics rendering once the
// dataset is loaded, and open details when a region is selected.

pub mod pipeline_handler;

pub use pipeline_handler::register_pipeline_handlers;
