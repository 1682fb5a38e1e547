// src/views/navigation.rs

use serde::{Deserialize, Serialize};

/// The four mutually exclusive top-level sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Map,
    StateList,
    MovieList,
    About,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Map,
        Section::StateList,
        Section::MovieList,
        Section::About,
    ];

    pub fn trigger_id(self) -> &'static str {
        match self {
            Section::Map => "btnShowMap",
            Section::StateList => "btnShowListStates",
            Section::MovieList => "btnShowListMovies",
            Section::About => "btnShowAbout",
        }
    }

    pub fn section_id(self) -> &'static str {
        match self {
            Section::Map => "sectionMap",
            Section::StateList => "sectionListStates",
            Section::MovieList => "sectionListMovies",
            Section::About => "sectionAbout",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Map => write!(f, "map"),
            Section::StateList => write!(f, "state_list"),
            Section::MovieList => write!(f, "movie_list"),
            Section::About => write!(f, "about"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerView {
    pub id: &'static str,
    pub section: Section,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub id: &'static str,
    pub section: Section,
    pub visible: bool,
}

/// Selection state of every trigger and visibility of every section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationView {
    pub active: Section,
    pub triggers: Vec<TriggerView>,
    pub sections: Vec<SectionView>,
}

impl NavigationView {
    pub fn for_active(active: Section) -> Self {
        Self {
            active,
            triggers: Section::ALL
                .iter()
                .map(|&section| TriggerView {
                    id: section.trigger_id(),
                    section,
                    selected: section == active,
                })
                .collect(),
            sections: Section::ALL
                .iter()
                .map(|&section| SectionView {
                    id: section.section_id(),
                    section,
                    visible: section == active,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_trigger_and_section_active() {
        for active in Section::ALL {
            let view = NavigationView::for_active(active);
            assert_eq!(view.triggers.iter().filter(|t| t.selected).count(), 1);
            assert_eq!(view.sections.iter().filter(|s| s.visible).count(), 1);
            assert!(view.triggers.iter().any(|t| t.selected && t.section == active));
            assert!(view.sections.iter().any(|s| s.visible && s.section == active));
        }
    }

    #[test]
    fn test_initial_section_is_map() {
        assert_eq!(Section::default(), Section::Map);
    }
}
