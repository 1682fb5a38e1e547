// src/integrations/map/widget.rs
//
// Vector map widget boundary.
//
// The widget itself (region drawing, zoom, tooltips) lives in the webview.
// This side decides what is mounted; the webview polls `MapView` and
// mirrors it, building a fresh widget whenever the generation changes
// and removing it when nothing is mounted.

use std::sync::{PoisonError, RwLock};

use crate::domain::{us_region_codes, RegionCode};
use crate::error::{AppError, AppResult};
use crate::views::{MapConfig, MapView};

#[cfg_attr(test, mockall::automock)]
pub trait MapWidget: Send + Sync {
    /// Every region the projection draws
    fn regions(&self) -> Vec<RegionCode>;

    /// Mount a fresh instance. Returns its generation.
    /// Fails if an instance is still mounted.
    fn mount(&self, config: MapConfig) -> AppResult<u64>;

    /// Tear down the mounted instance, if any
    fn dispose(&self) -> AppResult<()>;

    /// Current mount state
    fn view(&self) -> MapView;
}

/// Map widget rendered by the webview from the published `MapView`.
pub struct WebviewMapWidget {
    regions: Vec<RegionCode>,
    state: RwLock<MapView>,
}

impl WebviewMapWidget {
    pub fn new(regions: Vec<RegionCode>) -> Self {
        Self {
            regions,
            state: RwLock::new(MapView::default()),
        }
    }

    /// Widget for the `us_aea` projection
    pub fn us() -> Self {
        Self::new(us_region_codes())
    }
}

impl MapWidget for WebviewMapWidget {
    fn regions(&self) -> Vec<RegionCode> {
        self.regions.clone()
    }

    fn mount(&self, config: MapConfig) -> AppResult<u64> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.is_mounted() {
            return Err(AppError::Other(format!(
                "Map generation {} is still mounted",
                state.generation
            )));
        }

        state.generation += 1;
        state.config = Some(config);
        Ok(state.generation)
    }

    fn dispose(&self) -> AppResult<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.config = None;
        Ok(())
    }

    fn view(&self) -> MapView {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
