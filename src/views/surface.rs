// src/views/surface.rs

use serde::{Deserialize, Serialize};

/// Named mount points that hold lists of film buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceId {
    #[serde(rename = "listStates")]
    StateList,
    #[serde(rename = "listMovies")]
    MovieList,
    #[serde(rename = "stateInTitle")]
    StateInTitle,
    #[serde(rename = "oldestNewest")]
    OldestNewest,
    #[serde(rename = "longestShortest")]
    LongestShortest,
}

impl SurfaceId {
    pub const ALL: [SurfaceId; 5] = [
        SurfaceId::StateList,
        SurfaceId::MovieList,
        SurfaceId::StateInTitle,
        SurfaceId::OldestNewest,
        SurfaceId::LongestShortest,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            SurfaceId::StateList => "listStates",
            SurfaceId::MovieList => "listMovies",
            SurfaceId::StateInTitle => "stateInTitle",
            SurfaceId::OldestNewest => "oldestNewest",
            SurfaceId::LongestShortest => "longestShortest",
        }
    }
}

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.element_id())
    }
}
