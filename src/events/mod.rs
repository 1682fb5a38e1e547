// src/events/mod.rs
//
// Event system: typed events, the bus, and the pipeline handlers.

pub mod bus;
pub mod handlers;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use types::{
    // Dataset
    DatasetLoadFailed,
    DatasetLoaded,
    // Interaction
    DetailsShown,
    // Map lifecycle
    MapDisposed,
    MapInitialised,
    RegionSelected,
    SectionChanged,
};

pub use bus::{EventBus, EventLogEntry};

pub use handlers::register_pipeline_handlers;
