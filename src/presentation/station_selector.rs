// Station selector - one checkbox per registry entry
use crate::application::selection::SelectionSet;
use crate::domain::station;
use eframe::egui;

/// Pure projection of the registry: renders one toggle per station and
/// reports changes into the caller-owned selection set, by value.
pub fn station_selector(ui: &mut egui::Ui, selection: &mut SelectionSet) {
    ui.horizontal_wrapped(|ui| {
        for entry in station::all() {
            let mut checked = selection.contains(entry.code);
            if ui.checkbox(&mut checked, entry.name).changed() {
                selection.toggle(entry.code);
            }
        }
    });
}
