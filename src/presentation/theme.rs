// Presentation theme - registry color names mapped to UI colors
use eframe::egui::Color32;

/// Concrete color for a station's registered color name.
pub fn station_color(name: &str) -> Color32 {
    match name {
        "red" => Color32::RED,
        "blue" => Color32::from_rgb(66, 133, 244),
        "green" => Color32::from_rgb(52, 168, 83),
        "orange" => Color32::from_rgb(255, 165, 0),
        "purple" => Color32::from_rgb(171, 71, 188),
        "brown" => Color32::from_rgb(165, 42, 42),
        _ => Color32::GRAY,
    }
}
