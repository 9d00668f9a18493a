// Navigation bar - branding and connection status
use crate::infrastructure::broker::ConnectionState;
use eframe::egui;

pub fn navbar(ui: &mut egui::Ui, title: &str, connection: &ConnectionState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(title)
                .size(18.0)
                .strong()
                .color(egui::Color32::WHITE),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (color, text) = match connection {
                ConnectionState::Disconnected => (egui::Color32::from_rgb(200, 100, 100), "Disconnected"),
                ConnectionState::Connecting => (egui::Color32::from_rgb(200, 200, 100), "Connecting..."),
                ConnectionState::Subscribed => (egui::Color32::from_rgb(100, 200, 100), "Live"),
                ConnectionState::Closed => (egui::Color32::GRAY, "Closed"),
            };
            ui.colored_label(color, egui::RichText::new(text).size(12.0));
        });
    });
}
