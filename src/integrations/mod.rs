// src/integrations/mod.rs
//
// External Integrations Module
//
// - dataset: the static film document (HTTP or file)
// - map: the vector map widget hosted by the webview

pub mod dataset;
pub mod map;

pub use dataset::{DatasetSource, FileDatasetSource, FilmRecord, HttpDatasetSource};
pub use map::{MapWidget, WebviewMapWidget};

#[cfg(test)]
pub use dataset::client::MockDatasetSource;
#[cfg(test)]
pub use map::widget::MockMapWidget;
