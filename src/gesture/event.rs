//! Gesture events and their single dispatch point.

use std::fmt;

use super::transform::{apply_delta, GestureDelta, TransformState};

/// Label shown before any discrete gesture arrives
pub const WAITING_LABEL: &str = "Waiting ...";

/// Discrete gesture kinds. They carry no delta and only select a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapLabel {
    Press,
    Tap,
    DoubleTap,
    LongPress,
}

impl TapLabel {
    pub fn text(self) -> &'static str {
        match self {
            TapLabel::Press => "OnPress detected",
            TapLabel::Tap => "OnTap detected",
            TapLabel::DoubleTap => "DoubleTap detected",
            TapLabel::LongPress => "OnLongPress detected",
        }
    }
}

impl fmt::Display for TapLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Everything the host gesture layer can report for one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Press,
    Tap,
    DoubleTap,
    LongPress,
    /// Continuous update (drag move, pinch step, rotate step)
    Delta(GestureDelta),
}

impl GestureEvent {
    pub fn label(&self) -> Option<TapLabel> {
        match self {
            GestureEvent::Press => Some(TapLabel::Press),
            GestureEvent::Tap => Some(TapLabel::Tap),
            GestureEvent::DoubleTap => Some(TapLabel::DoubleTap),
            GestureEvent::LongPress => Some(TapLabel::LongPress),
            GestureEvent::Delta(_) => None,
        }
    }

    /// True for deltas that would leave the transform untouched.
    pub fn is_identity(&self) -> bool {
        matches!(self, GestureEvent::Delta(d) if d.is_identity())
    }
}

/// Per-element view state threaded through [`dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementState {
    pub transform: TransformState,
    pub label: Option<TapLabel>,
}

impl ElementState {
    pub fn label_text(&self) -> &'static str {
        self.label.map_or(WAITING_LABEL, TapLabel::text)
    }

    /// Dispatch a batch of events in arrival order.
    pub fn dispatch_all<'a, I>(self, events: I) -> Self
    where
        I: IntoIterator<Item = &'a GestureEvent>,
    {
        events.into_iter().fold(self, dispatch)
    }
}

/// Apply one event: deltas move the transform, discrete gestures set the label.
pub fn dispatch(state: ElementState, event: &GestureEvent) -> ElementState {
    match event {
        GestureEvent::Delta(delta) => ElementState {
            transform: apply_delta(state.transform, *delta),
            ..state
        },
        discrete => ElementState {
            label: discrete.label(),
            ..state
        },
    }
}
