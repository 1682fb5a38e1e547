// src/lib.rs
// FilmMap - One film per U.S. state, on a map, in lists and in numbers
//
// Architecture:
// - Domain-centric: film rules, links, palette and statistics live in domain/
// - Declarative views: the Rust side describes every surface, the webview draws it
// - Event-driven: UI intents and load completion travel over the event bus
// - Explicit: one composition root (main.rs), no hidden globals

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;
pub mod views;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    sortable_title_key, validate_film, Colour, DecadeCount, ExternalService, Film, FilmStatistics,
    LinkSlugs, RegionCode, TitleLengthPolicy,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    register_pipeline_handlers,
    // Dataset
    DatasetLoadFailed,
    DatasetLoaded,
    // Interaction
    DetailsShown,
    DomainEvent,
    EventBus,
    EventLogEntry,
    // Map lifecycle
    MapDisposed,
    MapInitialised,
    RegionSelected,
    SectionChanged,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{FilmRepository, InMemoryFilmRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    DataLoaderService, DetailPresenterService, LoadState, MapAdapterService, NavigationService,
    StatisticsService, ViewRendererService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use config::AppConfig;
pub use integrations::{DatasetSource, FileDatasetSource, HttpDatasetSource, WebviewMapWidget};
