//! Demo catalogue
//!
//! One gesture pattern per demo, shown on a single colored box:
//!
//! | name            | gesture                               |
//! |-----------------|---------------------------------------|
//! | `click`         | click toggles the box color           |
//! | `tap-input`     | press / tap / double-tap / long-press |
//! | `drag`          | horizontal-only drag                  |
//! | `drag-pointer`  | free 2D drag                          |
//! | `scrollable`    | vertical scroll gesture moves a box   |
//! | `scroll-both`   | two-axis scrolling of a large canvas  |
//! | `multi-touch`   | pinch / rotate / pan                  |

pub mod color;

use std::fmt;
use std::str::FromStr;

pub use color::ColorToggle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Demo {
    Click,
    TapInput,
    Drag,
    DragPointer,
    Scrollable,
    ScrollBoth,
    #[default]
    MultiTouch,
}

impl Demo {
    pub const ALL: [Demo; 7] = [
        Demo::Click,
        Demo::TapInput,
        Demo::Drag,
        Demo::DragPointer,
        Demo::Scrollable,
        Demo::ScrollBoth,
        Demo::MultiTouch,
    ];

    /// Command-line identifier
    pub fn name(self) -> &'static str {
        match self {
            Demo::Click => "click",
            Demo::TapInput => "tap-input",
            Demo::Drag => "drag",
            Demo::DragPointer => "drag-pointer",
            Demo::Scrollable => "scrollable",
            Demo::ScrollBoth => "scroll-both",
            Demo::MultiTouch => "multi-touch",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Click => "Click",
            Demo::TapInput => "Tap Gestures",
            Demo::Drag => "Horizontal Drag",
            Demo::DragPointer => "Pointer Drag",
            Demo::Scrollable => "Scrollable",
            Demo::ScrollBoth => "Two-Axis Scroll",
            Demo::MultiTouch => "Multi-Touch",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Demo::Click => "Click the box to swap its color. Single and double clicks count the same.",
            Demo::TapInput => "Press, tap, double-tap or long-press the box. The label shows the last gesture.",
            Demo::Drag => "Drag the box sideways. Vertical movement is ignored.",
            Demo::DragPointer => "Drag the box anywhere.",
            Demo::Scrollable => "Scroll or drag vertically anywhere in the area to move the red box.",
            Demo::ScrollBoth => "Scroll the canvas horizontally and vertically.",
            Demo::MultiTouch => "Pinch to zoom, twist to rotate, drag to pan. With a mouse: drag and ctrl+wheel.",
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown demo name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoParseError {
    pub message: String,
}

impl fmt::Display for DemoParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DemoParseError {}

impl FromStr for Demo {
    type Err = DemoParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Demo::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DemoParseError {
                message: format!(
                    "Unknown demo '{}' (expected one of: {})",
                    wanted,
                    Demo::ALL.map(Demo::name).join(", ")
                ),
            })
    }
}
