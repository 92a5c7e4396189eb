//! `GestureDemoApp` — the top-level egui application state.
//!
//! This module declares the app struct and the per-demo scene state.
//! Methods are split across the sibling sub-modules:
//!
//! - `toolbar` — demo selector and theme toggle
//! - `content` — renders the active demo and feeds it gesture events

pub mod content;
pub mod toolbar;

use std::time::Duration;

use eframe::egui;

use gesture_demo::config::DemoConfig;
use gesture_demo::demo::{ColorToggle, Demo};
use gesture_demo::gesture::{Axis, AxisDrag, ElementState, PressTracker};

// ─── Scene state ─────────────────────────────────────────────────────────────

/// State of the element on screen. Created when a demo is shown, dropped
/// when another demo replaces it.
pub struct DemoScene {
    pub color: ColorToggle,
    pub element: ElementState,
    pub press: PressTracker,
    /// Single-axis offset for `Drag` (horizontal) and `Scrollable` (vertical)
    pub axis: AxisDrag,
}

impl DemoScene {
    pub fn new(demo: Demo, long_press: Duration) -> Self {
        let axis = match demo {
            Demo::Scrollable => Axis::Vertical,
            _ => Axis::Horizontal,
        };
        Self {
            color: ColorToggle::default(),
            element: ElementState::default(),
            press: PressTracker::new(long_press),
            axis: AxisDrag::new(axis),
        }
    }
}

// ─── Application state ───────────────────────────────────────────────────────

pub struct GestureDemoApp {
    pub demo: Demo,
    pub long_press: Duration,
    pub dark_mode: bool,
    pub scene: DemoScene,
}

impl GestureDemoApp {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            demo: config.demo,
            long_press: config.long_press,
            dark_mode: false,
            scene: DemoScene::new(config.demo, config.long_press),
        }
    }

    /// Swap the active demo, discarding the old element's state.
    pub fn show_demo(&mut self, demo: Demo) {
        if demo == self.demo {
            return;
        }
        log::info!("Switching demo: {} -> {}", self.demo, demo);
        self.demo = demo;
        self.scene = DemoScene::new(demo, self.long_press);
    }
}

impl eframe::App for GestureDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui);
        });

        // Keep the long-press timer ticking while a press is held
        if self.scene.press.is_pressed() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesture_demo::gesture::{dispatch, GestureDelta, GestureEvent};

    #[test]
    fn test_app_starts_with_configured_demo() {
        let config = DemoConfig {
            demo: Demo::Scrollable,
            ..DemoConfig::default()
        };
        let app = GestureDemoApp::new(&config);
        assert_eq!(app.demo, Demo::Scrollable);
        assert_eq!(app.scene.axis.axis, Axis::Vertical);
    }

    #[test]
    fn test_switching_demo_discards_state() {
        let mut app = GestureDemoApp::new(&DemoConfig::default());
        app.scene.element = dispatch(
            app.scene.element,
            &GestureEvent::Delta(GestureDelta::translate(30.0, 0.0)),
        );
        app.scene.color.toggle();

        // Same demo: state kept
        app.show_demo(Demo::MultiTouch);
        assert!((app.scene.element.transform.position.x - 30.0).abs() < 1e-6);

        app.show_demo(Demo::Click);
        assert_eq!(app.demo, Demo::Click);
        assert_eq!(app.scene.element, ElementState::default());
        assert!(app.scene.color.on);
    }
}
