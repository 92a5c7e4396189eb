//! egui input bridge
//!
//! Recognition stays with egui (click / double-click timing, drag tracking,
//! multi-touch pinch math). This module only reads what egui recognized for
//! one element and turns it into [`GestureEvent`]s.

use std::time::Instant;

use super::event::GestureEvent;
use super::press::PressTracker;
use super::transform::{GestureDelta, Offset};

impl From<egui::Vec2> for Offset {
    fn from(v: egui::Vec2) -> Self {
        Offset::new(v.x, v.y)
    }
}

impl From<Offset> for egui::Vec2 {
    fn from(o: Offset) -> Self {
        egui::vec2(o.x, o.y)
    }
}

impl From<Offset> for egui::Pos2 {
    fn from(o: Offset) -> Self {
        egui::pos2(o.x, o.y)
    }
}

/// Build a delta from one multi-touch step. egui reports rotation in radians.
pub fn touch_delta(translation: egui::Vec2, zoom: f32, rotation_rad: f32) -> GestureDelta {
    GestureDelta {
        translation: translation.into(),
        scale_factor: zoom,
        rotation_delta: rotation_rad.to_degrees(),
    }
}

/// Discrete gestures for `response` this frame, in the order they happened.
///
/// A release that ends a long press is not a tap, even when egui still
/// counts it as a click.
pub fn tap_events(
    response: &egui::Response,
    tracker: &mut PressTracker,
    now: Instant,
) -> Vec<GestureEvent> {
    let mut events = Vec::with_capacity(2);

    if let Some(event) = tracker.update(response.is_pointer_button_down_on(), now) {
        events.push(event);
    }
    if response.long_touched() && tracker.mark_long_press() {
        events.push(GestureEvent::LongPress);
    }
    if tracker.swallow_click() {
        return events;
    }
    // egui reports a double click on the second release, which also counts
    // as a click.
    if response.double_clicked() {
        events.push(GestureEvent::DoubleTap);
    } else if response.clicked() {
        events.push(GestureEvent::Tap);
    }

    events
}

/// Pointer drag as a translation-only delta, `None` while still.
pub fn drag_delta(response: &egui::Response) -> Option<GestureEvent> {
    let delta = response.drag_delta();
    if delta == egui::Vec2::ZERO {
        return None;
    }
    Some(GestureEvent::Delta(GestureDelta::translate(delta.x, delta.y)))
}

/// One multi-touch step and where the gesture began
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchStep {
    pub start_pos: egui::Pos2,
    pub delta: GestureDelta,
}

/// Everything `transform_delta` looks at for one element, read once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformInput {
    pub rect: egui::Rect,
    pub hovered: bool,
    pub dragged: bool,
    pub drag: egui::Vec2,
    /// Host zoom step (ctrl+wheel, trackpad pinch)
    pub zoom: f32,
    pub touch: Option<TouchStep>,
}

impl TransformInput {
    pub fn read(response: &egui::Response) -> Self {
        let (zoom, touch) = response.ctx.input(|i| {
            let touch = i.multi_touch().map(|t| TouchStep {
                start_pos: t.start_pos,
                delta: touch_delta(t.translation_delta, t.zoom_delta, t.rotation_delta),
            });
            (i.zoom_delta(), touch)
        });
        Self {
            rect: response.rect,
            hovered: response.hovered(),
            dragged: response.dragged(),
            drag: response.drag_delta(),
            zoom,
            touch,
        }
    }

    /// Multi-touch wins when present, but only for gestures that began on
    /// the element. Otherwise dragging pans and the host zoom scales while
    /// the element is hovered or dragged.
    pub fn delta(&self) -> Option<GestureEvent> {
        let delta = match self.touch {
            Some(touch) => {
                if !(self.rect.contains(touch.start_pos) || self.dragged) {
                    return None;
                }
                touch.delta
            }
            None => {
                if !(self.hovered || self.dragged) {
                    return None;
                }
                GestureDelta {
                    translation: self.drag.into(),
                    scale_factor: self.zoom,
                    rotation_delta: 0.0,
                }
            }
        };

        let event = GestureEvent::Delta(delta);
        if event.is_identity() {
            None
        } else {
            Some(event)
        }
    }
}

/// Combined pan / zoom / rotate step for `response`.
pub fn transform_delta(response: &egui::Response) -> Option<GestureEvent> {
    TransformInput::read(response).delta()
}
