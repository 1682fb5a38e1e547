// src/views/chart.rs

use serde::Serialize;

use crate::domain::palette::leading_active_colours;
use crate::domain::{
    Colour, DecadeCount, CHART_BACKGROUND_LINE_COLOUR, CHART_FOREGROUND_LINE_COLOUR,
};

/// Bar chart description handed to the charting library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChartView {
    pub element_id: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    pub dataset_label: &'static str,
    pub fill: bool,
    pub show_legend: bool,
    pub bar_colours: Vec<Colour>,
    pub border_colour: Colour,
    pub border_width: u32,
    pub grid_colour: Colour,
    pub tick_colour: Colour,
}

impl BarChartView {
    /// One bar per decade, coloured from the start of the active palette.
    pub fn by_decade(histogram: &[DecadeCount]) -> Self {
        Self {
            element_id: "byDecade",
            labels: histogram.iter().map(|d| d.label.clone()).collect(),
            values: histogram.iter().map(|d| d.count).collect(),
            dataset_label: "Total",
            fill: true,
            show_legend: false,
            bar_colours: leading_active_colours(histogram.len()),
            border_colour: CHART_FOREGROUND_LINE_COLOUR,
            border_width: 1,
            grid_colour: CHART_BACKGROUND_LINE_COLOUR,
            tick_colour: CHART_FOREGROUND_LINE_COLOUR,
        }
    }
}
