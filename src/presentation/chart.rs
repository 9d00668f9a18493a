// Chart rendering - hands a chart specification to egui_plot
use crate::domain::dashboard::ChartSpec;
use crate::presentation::theme::station_color;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

pub fn line_chart(ui: &mut egui::Ui, spec: &ChartSpec) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(&spec.title)
                .size(13.0)
                .color(egui::Color32::LIGHT_GRAY),
        );

        Plot::new(spec.id.as_str())
            .legend(Legend::default())
            .x_axis_label(spec.x_label.as_str())
            .y_axis_label(spec.y_label.as_str())
            .show_axes([false, true])
            .show_grid(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_y(0.0)
            .label_formatter(|name, point| {
                let time = chrono::DateTime::from_timestamp_millis(point.x as i64)
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| format!("{:.0}", point.x));
                if name.is_empty() {
                    format!("{time}\n{:.1}", point.y)
                } else {
                    format!("{name}\n{time}\n{:.1}", point.y)
                }
            })
            .show(ui, |plot_ui| {
                for series in &spec.series {
                    let points: PlotPoints = series
                        .points
                        .iter()
                        .map(|sample| [sample.time_ms as f64, sample.value])
                        .collect();
                    plot_ui.line(
                        Line::new(points)
                            .color(station_color(&series.color))
                            .name(&series.name)
                            .width(1.5),
                    );
                }
            });
    });
}
