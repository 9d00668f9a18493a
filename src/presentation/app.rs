// Dashboard application - single owner of buffers, selection, and the feed
use crate::application::chart_service::{self, DASHBOARD_TITLE};
use crate::application::selection::SelectionSet;
use crate::application::series_store::LiveSeriesStore;
use crate::infrastructure::broker::{BrokerEvent, ConnectionState};
use crate::presentation::{chart, navbar, station_selector};
use eframe::egui;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::warn;

pub struct DashboardApp {
    store: LiveSeriesStore,
    selection: SelectionSet,
    connection: ConnectionState,
    events: mpsc::UnboundedReceiver<BrokerEvent>,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        events: mpsc::UnboundedReceiver<BrokerEvent>,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self {
            store: LiveSeriesStore::new(),
            selection: SelectionSet::new(),
            connection: ConnectionState::Disconnected,
            events,
        }
    }

    /// Apply pending broker events in delivery order. Buffers are only
    /// mutated here, on the UI thread, so no render observes one
    /// mid-update.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                BrokerEvent::State(state) => self.connection = state,
                BrokerEvent::Sample {
                    quantity,
                    station,
                    sample,
                } => {
                    if let Err(err) = self.store.append(quantity, &station, sample) {
                        warn!(%err, "dropping sample");
                    }
                }
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint_after(Duration::from_millis(200));
        self.drain_events();

        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            navbar::navbar(ui, DASHBOARD_TITLE, &self.connection);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            station_selector::station_selector(ui, &mut self.selection);
            ui.add_space(8.0);

            let dashboard = chart_service::build_dashboard(&self.store, &self.selection);

            let available = ui.available_size();
            let chart_width = (available.x - 16.0) / 2.0;
            let chart_height = (available.y - 24.0) / 2.0;

            if let [pm10, pm25, humidity] = &dashboard.charts[..] {
                ui.horizontal(|ui| {
                    ui.allocate_ui(egui::vec2(chart_width, chart_height), |ui| {
                        chart::line_chart(ui, pm10);
                    });
                    ui.add_space(8.0);
                    ui.allocate_ui(egui::vec2(chart_width, chart_height), |ui| {
                        chart::line_chart(ui, pm25);
                    });
                });
                ui.add_space(8.0);
                ui.allocate_ui(egui::vec2(chart_width, chart_height), |ui| {
                    chart::line_chart(ui, humidity);
                });
            }
        });
    }
}
