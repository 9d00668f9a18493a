// Chart service - projects live buffers into chart specifications
use crate::application::selection::SelectionSet;
use crate::application::series_store::LiveSeriesStore;
use crate::domain::dashboard::{ChartSpec, Dashboard, SeriesSpec};
use crate::domain::station;
use crate::domain::telemetry::Quantity;

pub const DASHBOARD_TITLE: &str = "Air Quality Live Dashboard";
const X_AXIS_LABEL: &str = "Date of the measurement";
const Y_AXIS_LABEL: &str = "Detected value";

/// Rebuild the full dashboard specification: one chart per quantity, one
/// series per selected station. Data volume is bounded, so there is no
/// incremental diffing.
pub fn build_dashboard(store: &LiveSeriesStore, selection: &SelectionSet) -> Dashboard {
    let charts = Quantity::ALL
        .iter()
        .map(|&quantity| build_chart(store, selection, quantity))
        .collect();
    Dashboard::new(DASHBOARD_TITLE.to_string(), charts)
}

fn build_chart(store: &LiveSeriesStore, selection: &SelectionSet, quantity: Quantity) -> ChartSpec {
    let series = selection
        .iter()
        .map(|code| {
            let entry = station::lookup(code);
            SeriesSpec::new(
                code.as_str().to_string(),
                entry.name.to_string(),
                entry.color.to_string(),
                store.read(quantity, code),
            )
        })
        .collect();

    ChartSpec::new(
        quantity.id().to_string(),
        quantity.chart_title().to_string(),
        X_AXIS_LABEL.to_string(),
        Y_AXIS_LABEL.to_string(),
        series,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::series_store::WINDOW_SIZE;
    use crate::domain::station::StationCode;
    use crate::domain::telemetry::Sample;

    #[test]
    fn empty_selection_yields_three_empty_charts() {
        let store = LiveSeriesStore::with_start_time(0);
        let dashboard = build_dashboard(&store, &SelectionSet::new());
        assert_eq!(dashboard.charts.len(), 3);
        assert!(dashboard.charts.iter().all(|c| c.series.is_empty()));
    }

    #[test]
    fn toggling_a_station_adds_one_series_per_quantity() {
        let store = LiveSeriesStore::with_start_time(0);
        let mut selection = SelectionSet::new();
        selection.toggle(StationCode::A1);

        let dashboard = build_dashboard(&store, &selection);
        for chart in &dashboard.charts {
            assert_eq!(chart.series.len(), 1);
            assert_eq!(chart.series[0].id, "A1");
        }

        selection.toggle(StationCode::A1);
        let dashboard = build_dashboard(&store, &selection);
        assert!(dashboard.charts.iter().all(|c| c.series.is_empty()));
    }

    #[test]
    fn series_carry_registry_styling_and_buffer_snapshots() {
        let mut store = LiveSeriesStore::with_start_time(0);
        store
            .append(Quantity::Pm10, "A1", Sample::new(1_700_000_000_000, 55.0))
            .unwrap();

        let mut selection = SelectionSet::new();
        selection.toggle(StationCode::A1);

        let dashboard = build_dashboard(&store, &selection);
        let pm10 = &dashboard.charts[0];
        assert_eq!(pm10.title, "PM10 Concentration");
        assert_eq!(pm10.x_label, "Date of the measurement");
        assert_eq!(pm10.y_label, "Detected value");

        let series = &pm10.series[0];
        assert_eq!(series.name, "Punta del Parque");
        assert_eq!(series.color, "red");
        assert_eq!(series.points.len(), WINDOW_SIZE);
        assert_eq!(series.points[WINDOW_SIZE - 1], Sample::new(1_700_000_000_000, 55.0));
    }

    #[test]
    fn series_follow_selection_toggle_order() {
        let store = LiveSeriesStore::with_start_time(0);
        let mut selection = SelectionSet::new();
        selection.toggle(StationCode::A5);
        selection.toggle(StationCode::A2);

        let dashboard = build_dashboard(&store, &selection);
        let ids: Vec<&str> = dashboard.charts[0]
            .series
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["A5", "A2"]);
    }
}
