use egui::Color32;

/// Editor palette shared by every widget.
pub struct Style;

impl Style {
    pub const TINT: Color32 = Color32::from_rgb(0xd9, 0x9a, 0x4e);
    pub const FOREGROUND_STRONG: Color32 = Color32::from_rgb(0xee, 0xee, 0xee);
    pub const FOREGROUND_WEAK: Color32 = Color32::from_rgb(0x5a, 0x5a, 0x60);
    pub const BACKGROUND_STRONG: Color32 = Color32::from_rgb(0x16, 0x16, 0x1a);
    pub const BACKGROUND_WEAK: Color32 = Color32::from_rgb(0x2a, 0x2a, 0x30);
}
