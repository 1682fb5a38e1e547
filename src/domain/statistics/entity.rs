use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::film::Film;

/// How title length is measured for the longest/shortest statistic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleLengthPolicy {
    /// Embedded spaces do not count toward the length
    #[default]
    IgnoreSpaces,
    /// Every character counts
    IncludeSpaces,
}

impl TitleLengthPolicy {
    /// Length in Unicode scalar values, so an emoji counts once.
    pub fn measure(self, title: &str) -> usize {
        match self {
            TitleLengthPolicy::IgnoreSpaces => title.chars().filter(|c| *c != ' ').count(),
            TitleLengthPolicy::IncludeSpaces => title.chars().count(),
        }
    }
}

/// Decade label for a year: the first three characters of its decimal
/// form followed by "0s", so 1999 becomes "1990s".
///
/// This is string truncation, not arithmetic. It only agrees with
/// `year / 10 * 10` for four-digit years.
pub fn decade_label(year: u32) -> String {
    let digits = year.to_string();
    let prefix: String = digits.chars().take(3).collect();
    format!("{}0s", prefix)
}

/// Number of films per decade label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeCount {
    pub label: String,
    pub count: usize,
}

/// Decade histogram with labels in lexicographic order.
pub fn decade_histogram<'a, I>(films: I) -> Vec<DecadeCount>
where
    I: IntoIterator<Item = &'a Arc<Film>>,
{
    let mut buckets: BTreeMap<String, usize> = BTreeMap::new();
    for film in films {
        *buckets.entry(decade_label(film.year)).or_insert(0) += 1;
    }
    buckets
        .into_iter()
        .map(|(label, count)| DecadeCount { label, count })
        .collect()
}

/// A film whose title contains its own region name.
/// Literal, case-sensitive substring test with no word boundaries.
pub fn has_region_in_title(film: &Film) -> bool {
    film.title.contains(film.region_name.as_str())
}

/// First and last film of a list, e.g. the ends of a sorted ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extremes {
    pub first: Arc<Film>,
    pub last: Arc<Film>,
}

impl Extremes {
    pub fn of(sorted: &[Arc<Film>]) -> Option<Self> {
        Some(Self {
            first: Arc::clone(sorted.first()?),
            last: Arc::clone(sorted.last()?),
        })
    }
}

/// All derived statistics for a loaded catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmStatistics {
    pub total_films: usize,
    pub by_decade: Vec<DecadeCount>,
    pub region_in_title: Vec<Arc<Film>>,
    /// `first` is the oldest film, `last` the newest
    pub oldest_newest: Option<Extremes>,
    /// `first` has the shortest title, `last` the longest
    pub shortest_longest: Option<Extremes>,
}
