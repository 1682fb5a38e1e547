// src/domain/palette.rs
//
// Fixed colours used by the map, the film buttons and the charts.

use rand::Rng;
use serde::Serialize;

/// A presentation colour in `#RRGGBB` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Colour(&'static str);

impl Colour {
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const MAP_BACKGROUND_COLOUR: Colour = Colour::new("#F0F0F0");
pub const INACTIVE_MAP_COLOUR: Colour = Colour::new("#D0D0D0");
pub const CHART_BACKGROUND_LINE_COLOUR: Colour = Colour::new("#505050");
pub const CHART_FOREGROUND_LINE_COLOUR: Colour = Colour::new("#A0A0A0");

/// Colours assignable to regions that have a film.
pub const ACTIVE_MAP_COLOURS: [Colour; 10] = [
    Colour::new("#E1002A"),
    Colour::new("#CB003B"),
    Colour::new("#B4004D"),
    Colour::new("#990062"),
    Colour::new("#850072"),
    Colour::new("#6D0084"),
    Colour::new("#540098"),
    Colour::new("#3D00AA"),
    Colour::new("#2600BC"),
    Colour::new("#0E00CF"),
];

/// Uniform pick from the active palette. Draws are independent,
/// so two regions may end up with the same colour.
pub fn random_active_colour<R: Rng + ?Sized>(rng: &mut R) -> Colour {
    ACTIVE_MAP_COLOURS[rng.gen_range(0..ACTIVE_MAP_COLOURS.len())]
}

/// The first `count` active colours, wrapping around when more are needed.
pub fn leading_active_colours(count: usize) -> Vec<Colour> {
    ACTIVE_MAP_COLOURS.iter().copied().cycle().take(count).collect()
}

pub fn is_active_colour(colour: Colour) -> bool {
    ACTIVE_MAP_COLOURS.contains(&colour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_colour_is_from_palette() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            assert!(is_active_colour(random_active_colour(&mut rng)));
        }
    }

    #[test]
    fn test_leading_colours_wrap() {
        let colours = leading_active_colours(12);
        assert_eq!(colours.len(), 12);
        assert_eq!(colours[0], ACTIVE_MAP_COLOURS[0]);
        assert_eq!(colours[9], ACTIVE_MAP_COLOURS[9]);
        assert_eq!(colours[10], ACTIVE_MAP_COLOURS[0]);
    }

    #[test]
    fn test_inactive_colour_is_not_active() {
        assert!(!is_active_colour(INACTIVE_MAP_COLOUR));
    }
}
