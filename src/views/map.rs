// src/views/map.rs

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{Colour, RegionCode, MAP_BACKGROUND_COLOUR, US_PROJECTION};

/// Initial viewport of the map widget
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapFocus {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Everything the map widget needs to draw the choropleth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapConfig {
    pub projection: &'static str,
    pub background: Colour,
    pub zoom_min: f64,
    pub focus: MapFocus,
    /// Attribute the region series drives
    pub series_attribute: &'static str,
    pub region_fills: BTreeMap<RegionCode, Colour>,
}

impl MapConfig {
    pub fn us(region_fills: BTreeMap<RegionCode, Colour>) -> Self {
        Self {
            projection: US_PROJECTION,
            background: MAP_BACKGROUND_COLOUR,
            zoom_min: 0.9,
            focus: MapFocus {
                x: 0.5,
                y: 0.5,
                scale: 0.95,
            },
            series_attribute: "fill",
            region_fills,
        }
    }
}

/// What is currently mounted in the map container.
/// `generation` increases with every fresh widget instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapView {
    pub generation: u64,
    pub config: Option<MapConfig>,
}

impl MapView {
    pub fn is_mounted(&self) -> bool {
        self.config.is_some()
    }
}
