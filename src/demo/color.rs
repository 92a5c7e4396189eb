use egui::Color32;

pub const BOX_BLUE: Color32 = Color32::from_rgb(0, 0, 255);
pub const BOX_DARK_GRAY: Color32 = Color32::from_rgb(68, 68, 68);
pub const BOX_RED: Color32 = Color32::from_rgb(255, 0, 0);

/// Two-color flag flipped on every click. Starts blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToggle {
    pub on: bool,
}

impl Default for ColorToggle {
    fn default() -> Self {
        Self { on: true }
    }
}

impl ColorToggle {
    pub fn toggle(&mut self) -> Color32 {
        self.on = !self.on;
        self.color()
    }

    pub fn color(&self) -> Color32 {
        if self.on {
            BOX_BLUE
        } else {
            BOX_DARK_GRAY
        }
    }
}
