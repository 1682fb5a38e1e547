// src/services/navigation_service.rs
//
// Navigation controller: exactly one of the four sections is visible.
// Entering the map section builds a fresh map, leaving it disposes the map.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::AppResult;
use crate::events::{EventBus, SectionChanged};
use crate::services::MapAdapterService;
use crate::views::{NavigationView, Section};

pub struct NavigationService {
    map: Arc<MapAdapterService>,
    event_bus: Arc<EventBus>,
    active: Mutex<Section>,
}

impl NavigationService {
    pub fn new(map: Arc<MapAdapterService>, event_bus: Arc<EventBus>) -> Self {
        Self {
            map,
            event_bus,
            active: Mutex::new(Section::default()),
        }
    }

    pub fn active(&self) -> Section {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn view(&self) -> NavigationView {
        NavigationView::for_active(self.active())
    }

    /// Switch to `target`.
    ///
    /// Navigating to the section that is already active still runs the
    /// map step, so re-selecting the map rebuilds it. The section lock is
    /// held across the map step so the active section and the map state
    /// always change together.
    pub fn navigate(&self, target: Section) -> AppResult<NavigationView> {
        let previous = {
            let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);

            if target == Section::Map {
                self.map.initialise()?;
            } else {
                self.map.dispose()?;
            }

            std::mem::replace(&mut *active, target)
        };

        log::debug!("Navigated from {} to {}", previous, target);
        self.event_bus.emit(SectionChanged::new(previous, target));

        Ok(NavigationView::for_active(target))
    }

    /// Called once the dataset is in: the map is only built if it is
    /// the section on screen.
    pub fn on_dataset_loaded(&self) -> AppResult<()> {
        let active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        if *active == Section::Map {
            self.map.initialise()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::WebviewMapWidget;
    use crate::repositories::InMemoryFilmRepository;

    fn navigation() -> (NavigationService, Arc<MapAdapterService>) {
        let bus = Arc::new(EventBus::new());
        let map = Arc::new(MapAdapterService::new(
            Arc::new(InMemoryFilmRepository::new()),
            Arc::new(WebviewMapWidget::us()),
            Arc::clone(&bus),
        ));
        (NavigationService::new(Arc::clone(&map), bus), map)
    }

    #[test]
    fn test_initial_section_is_map() {
        let (navigation, map) = navigation();

        assert_eq!(navigation.active(), Section::Map);
        assert!(navigation.view().sections.iter().any(|s| s.id == "sectionMap" && s.visible));
        assert!(!map.is_active());
    }

    #[test]
    fn test_leaving_map_disposes_and_returning_rebuilds() {
        let (navigation, map) = navigation();
        navigation.on_dataset_loaded().unwrap();
        assert_eq!(map.view().generation, 1);

        let view = navigation.navigate(Section::MovieList).unwrap();
        assert_eq!(view.active, Section::MovieList);
        assert!(!map.is_active());
        assert!(!map.view().is_mounted());

        navigation.navigate(Section::Map).unwrap();
        assert!(map.is_active());
        assert_eq!(map.view().generation, 2);
    }

    #[test]
    fn test_dataset_loaded_off_map_does_not_mount() {
        let (navigation, map) = navigation();
        navigation.navigate(Section::About).unwrap();

        navigation.on_dataset_loaded().unwrap();

        assert!(!map.is_active());
        assert_eq!(map.view().generation, 0);
    }

    #[test]
    fn test_concurrent_navigation_keeps_map_in_step() {
        for _ in 0..20 {
            let (navigation, map) = navigation();

            std::thread::scope(|scope| {
                for worker in 0..4 {
                    let navigation = &navigation;
                    scope.spawn(move || {
                        for step in 0..25 {
                            let target = if (worker + step) % 2 == 0 {
                                Section::Map
                            } else {
                                Section::About
                            };
                            navigation.navigate(target).unwrap();
                        }
                    });
                }
            });

            assert_eq!(navigation.active() == Section::Map, map.is_active());
        }
    }
}
