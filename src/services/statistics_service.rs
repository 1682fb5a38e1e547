// src/services/statistics_service.rs
//
// Statistics aggregator: derives the decade histogram and the three
// film highlight lists from the loaded catalog.

use std::sync::Arc;

use crate::domain::statistics::{decade_histogram, has_region_in_title};
use crate::domain::{Extremes, FilmStatistics, TitleLengthPolicy};
use crate::error::AppResult;
use crate::repositories::FilmRepository;
use crate::services::ViewRendererService;
use crate::views::{BarChartView, ButtonMode, SurfaceId};

pub struct StatisticsService {
    film_repo: Arc<dyn FilmRepository>,
    views: Arc<ViewRendererService>,
    title_length_policy: TitleLengthPolicy,
}

impl StatisticsService {
    pub fn new(
        film_repo: Arc<dyn FilmRepository>,
        views: Arc<ViewRendererService>,
        title_length_policy: TitleLengthPolicy,
    ) -> Self {
        Self {
            film_repo,
            views,
            title_length_policy,
        }
    }

    pub fn calculate(&self) -> FilmStatistics {
        let by_region = self.film_repo.list_by_region_name();
        let by_title = self.film_repo.list_by_title();

        let region_in_title = by_title
            .iter()
            .filter(|film| has_region_in_title(film))
            .cloned()
            .collect();

        // Stable sorts over copies of the title ordering: ties keep title order
        let mut by_year = by_title.clone();
        by_year.sort_by_key(|film| film.year);

        let policy = self.title_length_policy;
        let mut by_title_length = by_title.clone();
        by_title_length.sort_by_key(|film| policy.measure(&film.title));

        FilmStatistics {
            total_films: by_region.len(),
            by_decade: decade_histogram(by_region.iter()),
            region_in_title,
            oldest_newest: Extremes::of(&by_year),
            shortest_longest: Extremes::of(&by_title_length),
        }
    }

    pub fn decade_chart(&self) -> BarChartView {
        let by_region = self.film_repo.list_by_region_name();
        BarChartView::by_decade(&decade_histogram(by_region.iter()))
    }

    /// Render the three highlight surfaces. Returns the statistics they
    /// were rendered from.
    pub fn render_surfaces(&self) -> AppResult<FilmStatistics> {
        let stats = self.calculate();

        self.views.render_list(
            SurfaceId::StateInTitle,
            &stats.region_in_title,
            ButtonMode::ByTitle,
        )?;
        self.render_extremes(SurfaceId::OldestNewest, stats.oldest_newest.as_ref())?;
        self.render_extremes(SurfaceId::LongestShortest, stats.shortest_longest.as_ref())?;

        log::debug!(
            "Rendered statistics for {} films across {} decades",
            stats.total_films,
            stats.by_decade.len()
        );
        Ok(stats)
    }

    /// First film, then the last one appended after it. A catalog of one
    /// film renders a single button.
    fn render_extremes(&self, surface: SurfaceId, extremes: Option<&Extremes>) -> AppResult<()> {
        let Some(extremes) = extremes else {
            self.views.render_list(surface, &[], ButtonMode::ByTitle)?;
            return Ok(());
        };

        self.views.render_list(
            surface,
            std::slice::from_ref(&extremes.first),
            ButtonMode::ByTitle,
        )?;
        if !Arc::ptr_eq(&extremes.first, &extremes.last) {
            self.views.append_list(
                surface,
                std::slice::from_ref(&extremes.last),
                ButtonMode::ByTitle,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DecadeCount, Film, LinkSlugs, RegionCode, ACTIVE_MAP_COLOURS};
    use crate::events::EventBus;
    use crate::repositories::InMemoryFilmRepository;

    fn titles(films: &[Arc<Film>]) -> Vec<&str> {
        films.iter().map(|film| film.title.as_str()).collect()
    }

    fn film(code: &str, name: &str, title: &str, year: u32) -> Film {
        Film {
            region_code: RegionCode::from(code),
            region_name: name.to_string(),
            title: title.to_string(),
            original_title: None,
            year,
            poster_image: None,
            links: LinkSlugs::default(),
            reviewer: None,
            colour: ACTIVE_MAP_COLOURS[0],
        }
    }

    fn setup(films: Vec<Film>, policy: TitleLengthPolicy) -> (StatisticsService, Arc<ViewRendererService>) {
        let repo: Arc<dyn FilmRepository> = Arc::new(InMemoryFilmRepository::new());
        repo.populate(films).unwrap();
        let views = Arc::new(ViewRendererService::new(
            Arc::clone(&repo),
            Arc::new(EventBus::new()),
        ));
        (
            StatisticsService::new(repo, Arc::clone(&views), policy),
            views,
        )
    }

    fn catalog() -> Vec<Film> {
        vec![
            film("US-ND", "North Dakota", "Fargo", 1996),
            film("US-TX", "Texas", "Paris, Texas", 1984),
            film("US-DC", "District of Columbia", "The Exorcist", 1973),
            film("US-CA", "California", "Chinatown", 1974),
            film("US-NY", "New York", "A Bronx Tale", 1993),
            film("US-MT", "Montana", "A River Runs Through It", 1992),
        ]
    }

    #[test]
    fn test_decade_histogram_sorted_labels() {
        let (stats, _) = setup(catalog(), TitleLengthPolicy::default());

        let result = stats.calculate();

        assert_eq!(result.total_films, 6);
        assert_eq!(
            result.by_decade,
            vec![
                DecadeCount { label: "1970s".to_string(), count: 2 },
                DecadeCount { label: "1980s".to_string(), count: 1 },
                DecadeCount { label: "1990s".to_string(), count: 3 },
            ]
        );
    }

    #[test]
    fn test_region_in_title_follows_title_order() {
        let mut films = catalog();
        films.push(film("US-WA", "Washington", "Sleepless in Seattle", 1993));
        films.push(film("US-GA", "Georgia", "Georgia Rule", 2007));
        let (stats, _) = setup(films, TitleLengthPolicy::default());

        let result = stats.calculate();

        assert_eq!(titles(&result.region_in_title), vec!["Georgia Rule", "Paris, Texas"]);
    }

    #[test]
    fn test_region_in_title_is_case_sensitive() {
        let (stats, _) = setup(
            vec![film("US-TX", "Texas", "The texas Chain Saw Massacre", 1974)],
            TitleLengthPolicy::default(),
        );

        assert!(stats.calculate().region_in_title.is_empty());
    }

    #[test]
    fn test_oldest_and_newest() {
        let (stats, _) = setup(catalog(), TitleLengthPolicy::default());

        let extremes = stats.calculate().oldest_newest.unwrap();

        assert_eq!(extremes.first.title, "The Exorcist");
        assert_eq!(extremes.last.title, "Fargo");
    }

    #[test]
    fn test_year_ties_keep_title_order() {
        let (stats, _) = setup(
            vec![
                film("US-WA", "Washington", "Sleepless in Seattle", 1993),
                film("US-NY", "New York", "A Bronx Tale", 1993),
            ],
            TitleLengthPolicy::default(),
        );

        let extremes = stats.calculate().oldest_newest.unwrap();

        // Title order: "A Bronx Tale" (key "Bronx Tale") before "Sleepless in Seattle"
        assert_eq!(extremes.first.title, "A Bronx Tale");
        assert_eq!(extremes.last.title, "Sleepless in Seattle");
    }

    #[test]
    fn test_title_length_policy_changes_result() {
        let films = vec![
            film("US-AA", "Alpha", "A B C D E F", 2000),
            film("US-BB", "Beta", "Bbbbbbbb", 2001),
        ];

        let (ignore, _) = setup(films.clone(), TitleLengthPolicy::IgnoreSpaces);
        let extremes = ignore.calculate().shortest_longest.unwrap();
        assert_eq!(extremes.first.title, "A B C D E F");
        assert_eq!(extremes.last.title, "Bbbbbbbb");

        let (include, _) = setup(films, TitleLengthPolicy::IncludeSpaces);
        let extremes = include.calculate().shortest_longest.unwrap();
        assert_eq!(extremes.first.title, "Bbbbbbbb");
        assert_eq!(extremes.last.title, "A B C D E F");
    }

    #[test]
    fn test_render_surfaces_two_buttons_each() {
        let (stats, views) = setup(catalog(), TitleLengthPolicy::default());

        stats.render_surfaces().unwrap();

        let oldest_newest: Vec<String> = views
            .surface(SurfaceId::OldestNewest)
            .into_iter()
            .map(|b| b.caption)
            .collect();
        assert_eq!(oldest_newest, vec!["The Exorcist (1973)", "Fargo (1996)"]);

        let longest_shortest = views.surface(SurfaceId::LongestShortest);
        assert_eq!(longest_shortest.len(), 2);
        assert_eq!(longest_shortest[0].caption, "Fargo (1996)");
        assert_eq!(longest_shortest[1].caption, "A River Runs Through It (1992)");
        assert_eq!(longest_shortest[1].tip, "Montana");

        assert_eq!(views.surface(SurfaceId::StateInTitle).len(), 1);
    }

    #[test]
    fn test_single_film_renders_one_button() {
        let (stats, views) = setup(
            vec![film("US-ND", "North Dakota", "Fargo", 1996)],
            TitleLengthPolicy::default(),
        );

        stats.render_surfaces().unwrap();

        assert_eq!(views.surface(SurfaceId::OldestNewest).len(), 1);
        assert_eq!(views.surface(SurfaceId::LongestShortest).len(), 1);
    }

    #[test]
    fn test_empty_catalog_renders_nothing() {
        let (stats, views) = setup(Vec::new(), TitleLengthPolicy::default());

        let result = stats.render_surfaces().unwrap();

        assert_eq!(result.total_films, 0);
        assert!(result.oldest_newest.is_none());
        assert!(views.surface(SurfaceId::OldestNewest).is_empty());
        assert!(stats.decade_chart().labels.is_empty());
    }

    #[test]
    fn test_decade_chart_uses_leading_palette() {
        let (stats, _) = setup(catalog(), TitleLengthPolicy::default());

        let chart = stats.decade_chart();

        assert_eq!(chart.labels, vec!["1970s", "1980s", "1990s"]);
        assert_eq!(chart.bar_colours, ACTIVE_MAP_COLOURS[..3].to_vec());
    }
}
