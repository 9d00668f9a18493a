// Chart specification domain models
use super::telemetry::Sample;

/// One plotted series: a selected station's window of samples plus its
/// registered styling.
#[derive(Debug, Clone)]
pub struct SeriesSpec {
    pub id: String,
    pub name: String,
    pub color: String,
    pub points: Vec<Sample>,
}

impl SeriesSpec {
    pub fn new(id: String, name: String, color: String, points: Vec<Sample>) -> Self {
        Self {
            id,
            name,
            color,
            points,
        }
    }
}

/// Full specification of one line chart, rebuilt on every render.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<SeriesSpec>,
}

impl ChartSpec {
    pub fn new(
        id: String,
        title: String,
        x_label: String,
        y_label: String,
        series: Vec<SeriesSpec>,
    ) -> Self {
        Self {
            id,
            title,
            x_label,
            y_label,
            series,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub title: String,
    pub charts: Vec<ChartSpec>,
}

impl Dashboard {
    pub fn new(title: String, charts: Vec<ChartSpec>) -> Self {
        Self { title, charts }
    }
}
