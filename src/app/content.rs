//! Content area rendering for `GestureDemoApp`.
//!
//! Each demo draws its box, asks egui what gesture happened on it this frame
//! and folds the resulting events into the scene state before painting.

use std::time::Instant;

use eframe::egui;

use gesture_demo::demo::color::{BOX_BLUE, BOX_RED};
use gesture_demo::demo::Demo;
use gesture_demo::gesture::input::{drag_delta, tap_events, transform_delta};
use gesture_demo::gesture::{dispatch, GestureEvent, Offset};

use super::GestureDemoApp;

/// Edge length of the standard demo box
const BOX_SIZE: f32 = 100.0;
const CLICK_BOX_SIZE: f32 = 200.0;
const SCROLL_BOX_SIZE: f32 = 90.0;
/// Two-axis scroll canvas, larger than the window on both axes
const CANVAS_SIZE: egui::Vec2 = egui::vec2(720.0, 540.0);
const CANVAS_TILE: f32 = 45.0;

impl GestureDemoApp {
    /// Render the active demo in the central panel.
    pub fn draw_content(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(self.demo.title());
            ui.label(
                egui::RichText::new(self.demo.description())
                    .size(12.0)
                    .color(egui::Color32::GRAY),
            );
        });
        ui.separator();

        match self.demo {
            Demo::Click => self.draw_click(ui),
            Demo::TapInput => self.draw_tap_input(ui),
            Demo::Drag => self.draw_axis_drag(ui),
            Demo::DragPointer => self.draw_drag_pointer(ui),
            Demo::Scrollable => self.draw_scrollable(ui),
            Demo::ScrollBoth => draw_scroll_both(ui),
            Demo::MultiTouch => self.draw_multi_touch(ui),
        }
    }

    fn draw_click(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(CLICK_BOX_SIZE, CLICK_BOX_SIZE), egui::Sense::click());
            if response.clicked() {
                self.scene.color.toggle();
                log::debug!("Click: box is now {:?}", self.scene.color.color());
            }
            ui.painter().rect_filled(rect, 0.0, self.scene.color.color());
        });
    }

    fn draw_tap_input(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(BOX_SIZE, BOX_SIZE), egui::Sense::click());

            let events = tap_events(&response, &mut self.scene.press, Instant::now());
            for event in &events {
                log::debug!("{}: {:?}", self.demo, event);
            }
            self.scene.element = self.scene.element.dispatch_all(&events);

            ui.painter().rect_filled(rect, 0.0, BOX_BLUE);
            ui.add_space(10.0);
            ui.label(self.scene.element.label_text());
        });
    }

    /// Horizontal-only drag: the vertical component of each delta is dropped.
    fn draw_axis_drag(&mut self, ui: &mut egui::Ui) {
        let (area, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), BOX_SIZE),
            egui::Sense::hover(),
        );
        let rect = self.axis_box_rect(area.min, BOX_SIZE);
        let response = ui.interact(rect, ui.id().with("axis_drag"), egui::Sense::drag());
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            self.scene.axis.apply_vector(delta.into());
            log::debug!("Axis drag: offset {:.1}", self.scene.axis.offset);
        }

        ui.painter()
            .rect_filled(self.axis_box_rect(area.min, BOX_SIZE), 0.0, BOX_BLUE);
    }

    fn draw_drag_pointer(&mut self, ui: &mut egui::Ui) {
        let area = ui.available_rect_before_wrap();
        let rect = self.box_rect(area.min);

        let response = ui.interact(rect, ui.id().with("drag_pointer"), egui::Sense::drag());
        if let Some(event) = drag_delta(&response) {
            self.apply(&event);
        }

        ui.painter_at(area).rect_filled(self.box_rect(area.min), 0.0, BOX_BLUE);
        ui.allocate_rect(area, egui::Sense::hover());
    }

    /// Vertical scroll gesture anywhere in the area moves the red box.
    fn draw_scrollable(&mut self, ui: &mut egui::Ui) {
        let (area, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::drag());

        let mut delta = response.drag_delta();
        if response.hovered() {
            delta += ui.input(|i| i.smooth_scroll_delta);
        }
        if delta.y != 0.0 {
            let consumed = self.scene.axis.apply_vector(delta.into());
            log::debug!("Scroll: consumed {:.1}, offset {:.1}", consumed, self.scene.axis.offset);
        }

        ui.painter_at(area)
            .rect_filled(self.axis_box_rect(area.min, SCROLL_BOX_SIZE), 0.0, BOX_RED);
    }

    /// Pinch / rotate / pan. The hit area follows the transformed box.
    fn draw_multi_touch(&mut self, ui: &mut egui::Ui) {
        let readout_height = 24.0;
        let area = ui.available_rect_before_wrap();
        let area = egui::Rect::from_min_max(area.min, egui::pos2(area.max.x, area.max.y - readout_height));
        let center: Offset = area.center().to_vec2().into();
        let size = Offset::new(BOX_SIZE, BOX_SIZE);

        let hit = polygon_bounds(&self.scene.element.transform.corners(center, size));
        let response = ui.interact(hit, ui.id().with("multi_touch"), egui::Sense::drag());
        if let Some(event) = transform_delta(&response) {
            self.apply(&event);
        }

        let transform = self.scene.element.transform;
        let points: Vec<egui::Pos2> = transform
            .corners(center, size)
            .into_iter()
            .map(egui::Pos2::from)
            .collect();
        ui.painter_at(area).add(egui::Shape::convex_polygon(
            points,
            BOX_BLUE,
            egui::Stroke::NONE,
        ));

        ui.allocate_rect(area, egui::Sense::hover());
        ui.label(
            egui::RichText::new(format!(
                "offset ({:.0}, {:.0})   scale {:.2}   rotation {:.1}\u{00B0}",
                transform.position.x, transform.position.y, transform.scale, transform.rotation
            ))
            .monospace()
            .size(11.0),
        );
    }

    /// The standard box at `origin`, offset by the element's position.
    fn box_rect(&self, origin: egui::Pos2) -> egui::Rect {
        let (x, y) = self.scene.element.transform.position.rounded();
        egui::Rect::from_min_size(
            origin + egui::vec2(x as f32, y as f32),
            egui::vec2(BOX_SIZE, BOX_SIZE),
        )
    }

    /// A `size` box at `origin`, moved along the single drag axis.
    fn axis_box_rect(&self, origin: egui::Pos2, size: f32) -> egui::Rect {
        let (x, y) = self.scene.axis.transform().position.rounded();
        egui::Rect::from_min_size(
            origin + egui::vec2(x as f32, y as f32),
            egui::vec2(size, size),
        )
    }

    fn apply(&mut self, event: &GestureEvent) {
        log::debug!("{}: {:?}", self.demo, event);
        self.scene.element = dispatch(self.scene.element, event);
    }
}

/// Two-axis scrolling is left entirely to egui's scroll area.
fn draw_scroll_both(ui: &mut egui::Ui) {
    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (rect, _) = ui.allocate_exact_size(CANVAS_SIZE, egui::Sense::hover());
            paint_canvas(ui.painter(), rect);
        });
}

/// Checkerboard with a color gradient across both axes.
fn paint_canvas(painter: &egui::Painter, rect: egui::Rect) {
    let cols = (rect.width() / CANVAS_TILE).ceil() as usize;
    let rows = (rect.height() / CANVAS_TILE).ceil() as usize;

    for row in 0..rows {
        for col in 0..cols {
            let r = (255 * col / cols.max(1)) as u8;
            let b = (255 * row / rows.max(1)) as u8;
            let shade = if (row + col) % 2 == 0 { 200 } else { 120 };
            let tile = egui::Rect::from_min_size(
                rect.min + egui::vec2(col as f32 * CANVAS_TILE, row as f32 * CANVAS_TILE),
                egui::vec2(CANVAS_TILE, CANVAS_TILE),
            );
            painter.rect_filled(tile, 0.0, egui::Color32::from_rgb(r, shade, b));
        }
    }
}

/// Axis-aligned bounds of a polygon.
fn polygon_bounds(corners: &[Offset]) -> egui::Rect {
    let points: Vec<egui::Pos2> = corners.iter().map(|c| egui::Pos2::from(*c)).collect();
    egui::Rect::from_points(&points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesture_demo::config::DemoConfig;
    use gesture_demo::gesture::TransformState;

    #[test]
    fn test_polygon_bounds_of_rotated_square() {
        let t = TransformState {
            rotation: 45.0,
            ..TransformState::IDENTITY
        };
        let bounds = polygon_bounds(&t.corners(Offset::ZERO, Offset::new(2.0, 2.0)));
        let half_diag = std::f32::consts::SQRT_2;
        assert!((bounds.max.x - half_diag).abs() < 1e-4);
        assert!((bounds.min.y + half_diag).abs() < 1e-4);
    }

    #[test]
    fn test_axis_box_follows_single_axis() {
        let config = DemoConfig {
            demo: Demo::Drag,
            ..DemoConfig::default()
        };
        let mut app = GestureDemoApp::new(&config);
        app.scene.axis.apply_vector(Offset::new(12.4, 30.0));

        let rect = app.axis_box_rect(egui::pos2(10.0, 20.0), BOX_SIZE);
        assert_eq!(rect.min, egui::pos2(22.0, 20.0));
        assert_eq!(rect.size(), egui::vec2(BOX_SIZE, BOX_SIZE));

        let config = DemoConfig {
            demo: Demo::Scrollable,
            ..DemoConfig::default()
        };
        let mut app = GestureDemoApp::new(&config);
        app.scene.axis.apply(-15.0);
        let rect = app.axis_box_rect(egui::Pos2::ZERO, SCROLL_BOX_SIZE);
        assert_eq!(rect.min, egui::pos2(0.0, -15.0));
    }
}
