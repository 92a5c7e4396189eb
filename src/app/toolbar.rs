//! Toolbar rendering for `GestureDemoApp`.
//!
//! Draws the demo selector and the dark-mode toggle.

use eframe::egui;
use gesture_demo::demo::Demo;

use super::GestureDemoApp;

impl GestureDemoApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            let mut selected = self.demo;
            egui::ComboBox::from_id_salt("demo")
                .selected_text(selected.title())
                .show_ui(ui, |ui| {
                    for demo in Demo::ALL {
                        ui.selectable_value(&mut selected, demo, demo.title());
                    }
                });
            self.show_demo(selected);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let dark_label = if self.dark_mode { "\u{263E}" } else { "\u{2600}" };
                if ui.button(dark_label).clicked() {
                    self.dark_mode = !self.dark_mode;
                }
            });
        });
    }
}
