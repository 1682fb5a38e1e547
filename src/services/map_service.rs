// src/services/map_service.rs
//
// Map adapter: owns the lifecycle of the choropleth widget.
//
// At most one widget instance exists at a time. Initialisation disposes
// the previous instance before mounting the next one, and both steps run
// under the same lock so concurrent navigations cannot interleave them.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{region_tip_text, Colour, RegionCode, INACTIVE_MAP_COLOUR};
use crate::error::AppResult;
use crate::events::{EventBus, MapDisposed, MapInitialised, RegionSelected};
use crate::integrations::MapWidget;
use crate::repositories::FilmRepository;
use crate::views::{MapConfig, MapView};

pub struct MapAdapterService {
    film_repo: Arc<dyn FilmRepository>,
    widget: Arc<dyn MapWidget>,
    event_bus: Arc<EventBus>,
    /// Generation of the mounted instance, if any
    lifecycle: Mutex<Option<u64>>,
}

impl MapAdapterService {
    pub fn new(
        film_repo: Arc<dyn FilmRepository>,
        widget: Arc<dyn MapWidget>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            film_repo,
            widget,
            event_bus,
            lifecycle: Mutex::new(None),
        }
    }

    /// Build a fresh widget instance with fills computed from the catalog.
    /// Any instance still mounted is disposed first.
    pub fn initialise(&self) -> AppResult<u64> {
        let (disposed, generation, active_regions) = {
            let mut lifecycle = self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner);

            let disposed = match lifecycle.take() {
                Some(previous) => {
                    self.widget.dispose()?;
                    Some(previous)
                }
                None => None,
            };

            let fills = self.region_fills();
            let active_regions = fills
                .values()
                .filter(|colour| **colour != INACTIVE_MAP_COLOUR)
                .count();

            let generation = self.widget.mount(MapConfig::us(fills))?;
            *lifecycle = Some(generation);

            (disposed, generation, active_regions)
        };

        if let Some(previous) = disposed {
            self.event_bus.emit(MapDisposed::new(previous));
        }

        log::debug!(
            "Map generation {} mounted with {} active regions",
            generation,
            active_regions
        );
        self.event_bus
            .emit(MapInitialised::new(generation, active_regions));

        Ok(generation)
    }

    /// Tear down the mounted instance. Does nothing when none is mounted.
    pub fn dispose(&self) -> AppResult<()> {
        let disposed = {
            let mut lifecycle = self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner);
            match lifecycle.take() {
                Some(generation) => {
                    self.widget.dispose()?;
                    Some(generation)
                }
                None => None,
            }
        };

        if let Some(generation) = disposed {
            log::debug!("Map generation {} disposed", generation);
            self.event_bus.emit(MapDisposed::new(generation));
        }

        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Fill for every region the widget draws: the film colour where the
    /// region has a film, the inactive colour everywhere else.
    pub fn region_fills(&self) -> BTreeMap<RegionCode, Colour> {
        self.widget
            .regions()
            .into_iter()
            .map(|code| {
                let fill = self
                    .film_repo
                    .get_by_region(&code)
                    .map(|film| film.colour)
                    .unwrap_or(INACTIVE_MAP_COLOUR);
                (code, fill)
            })
            .collect()
    }

    /// Tooltip override for a region. `None` keeps the widget's default.
    pub fn region_tip(&self, region_code: &RegionCode) -> Option<String> {
        self.film_repo
            .get_by_region(region_code)
            .map(|film| region_tip_text(&film))
    }

    /// Forward a region click to the detail view
    pub fn region_click(&self, region_code: RegionCode) {
        self.event_bus.emit(RegionSelected::new(region_code));
    }

    pub fn view(&self) -> MapView {
        self.widget.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Film, LinkSlugs, ACTIVE_MAP_COLOURS};
    use crate::integrations::{MockMapWidget, WebviewMapWidget};
    use crate::repositories::InMemoryFilmRepository;
    use mockall::Sequence;

    fn film(code: &str, name: &str, title: &str, year: u32, colour: Colour) -> Film {
        Film {
            region_code: RegionCode::from(code),
            region_name: name.to_string(),
            title: title.to_string(),
            original_title: None,
            year,
            poster_image: None,
            links: LinkSlugs::default(),
            reviewer: None,
            colour,
        }
    }

    fn loaded_repo() -> Arc<dyn FilmRepository> {
        let repo = InMemoryFilmRepository::new();
        repo.populate(vec![
            film("US-ND", "North Dakota", "Fargo", 1996, ACTIVE_MAP_COLOURS[0]),
            film("US-TX", "Texas", "Paris, Texas", 1984, ACTIVE_MAP_COLOURS[3]),
        ])
        .unwrap();
        Arc::new(repo)
    }

    fn service(widget: Arc<dyn MapWidget>) -> MapAdapterService {
        MapAdapterService::new(loaded_repo(), widget, Arc::new(EventBus::new()))
    }

    #[test]
    fn test_fills_cover_every_widget_region() {
        let service = service(Arc::new(WebviewMapWidget::us()));

        let fills = service.region_fills();

        assert_eq!(fills.len(), 51);
        assert_eq!(fills[&RegionCode::from("US-ND")], ACTIVE_MAP_COLOURS[0]);
        assert_eq!(fills[&RegionCode::from("US-TX")], ACTIVE_MAP_COLOURS[3]);
        assert_eq!(fills[&RegionCode::from("US-CA")], INACTIVE_MAP_COLOUR);
    }

    #[test]
    fn test_region_tip_only_for_regions_with_films() {
        let service = service(Arc::new(WebviewMapWidget::us()));

        assert_eq!(
            service.region_tip(&RegionCode::from("US-ND")).as_deref(),
            Some("North Dakota: Fargo (1996)")
        );
        assert_eq!(service.region_tip(&RegionCode::from("US-CA")), None);
    }

    #[test]
    fn test_reinitialise_disposes_before_mounting() {
        let mut widget = MockMapWidget::new();
        let mut seq = Sequence::new();

        widget
            .expect_regions()
            .returning(|| vec![RegionCode::from("US-ND"), RegionCode::from("US-CA")]);
        widget
            .expect_mount()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(1));
        widget
            .expect_dispose()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        widget
            .expect_mount()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(2));

        let service = service(Arc::new(widget));

        assert_eq!(service.initialise().unwrap(), 1);
        assert_eq!(service.initialise().unwrap(), 2);
        assert!(service.is_active());
    }

    #[test]
    fn test_dispose_without_instance_is_noop() {
        let mut widget = MockMapWidget::new();
        widget.expect_dispose().never();

        let service = service(Arc::new(widget));

        service.dispose().unwrap();
        assert!(!service.is_active());
    }

    #[test]
    fn test_lifecycle_events_and_view() {
        let bus = Arc::new(EventBus::new());
        let service = MapAdapterService::new(
            loaded_repo(),
            Arc::new(WebviewMapWidget::us()),
            Arc::clone(&bus),
        );

        service.initialise().unwrap();
        let view = service.view();
        assert_eq!(view.generation, 1);
        assert_eq!(
            view.config.as_ref().map(|c| c.projection),
            Some("us_aea")
        );

        service.dispose().unwrap();
        assert!(!service.view().is_mounted());

        service.initialise().unwrap();
        assert_eq!(service.view().generation, 2);

        let types: Vec<String> = bus
            .get_event_log()
            .into_iter()
            .map(|entry| entry.event_type)
            .collect();
        assert_eq!(
            types,
            vec!["MapInitialised", "MapDisposed", "MapInitialised"]
        );
    }

    #[test]
    fn test_region_click_publishes_selection() {
        let bus = Arc::new(EventBus::new());
        let selected = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&selected);
        bus.subscribe::<RegionSelected, _>(move |event| {
            sink.lock().unwrap().push(event.region_code.clone());
        });

        let service = MapAdapterService::new(
            loaded_repo(),
            Arc::new(WebviewMapWidget::us()),
            Arc::clone(&bus),
        );
        service.region_click(RegionCode::from("US-TX"));

        assert_eq!(*selected.lock().unwrap(), vec![RegionCode::from("US-TX")]);
    }
}
