// src/views/mod.rs
//
// Declarative view models
//
// The webview materialises these descriptions; it owns the map widget,
// the chart library and the modal. Interactions come back as intents
// (element clicked, region clicked, image loaded or failed) through the
// command layer.

pub mod chart;
pub mod detail;
pub mod element;
pub mod map;
pub mod navigation;
pub mod surface;

pub use chart::BarChartView;
pub use detail::{DetailImage, DetailView, LinkView};
pub use element::{ButtonMode, ElementId, FilmButtonView, ImageSlot, ImageStatus};
pub use map::{MapConfig, MapFocus, MapView};
pub use navigation::{NavigationView, Section, SectionView, TriggerView};
pub use surface::SurfaceId;
