// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod detail_service;
pub mod loader_service;
pub mod map_service;
pub mod navigation_service;
pub mod statistics_service;
pub mod view_service;


// Re-export all services and their types
pub use detail_service::DetailPresenterService;

pub use loader_service::{DataLoaderService, LoadState};

pub use map_service::MapAdapterService;

pub use navigation_service::NavigationService;

pub use statistics_service::StatisticsService;

pub use view_service::ViewRendererService;
