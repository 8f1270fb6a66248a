use super::{Alignment, ElementId, ElementTree, SizeConstraints, Style, Widget};
use crate::config::TextConfig;
use crate::geometry::Shape;
use egui::Color32;
use glam::Vec2;

/// Fixed-advance text measurement. Glyph shaping belongs to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub glyph_advance_px: f32,
    pub line_height_px: f32,
}

impl TextMetrics {
    pub fn from_config(config: &TextConfig) -> Self {
        Self { glyph_advance_px: config.glyph_advance_px, line_height_px: config.line_height_px }
    }

    pub fn measure(&self, text: &str, scale: f32) -> Vec2 {
        let glyphs = text.chars().count() as f32;
        Vec2::new(glyphs * self.glyph_advance_px * scale, self.line_height_px * scale)
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::from_config(&TextConfig::default())
    }
}

pub struct Label {
    text: String,
    pub color: Color32,
    pub horizontal: Alignment,
    pub vertical: Alignment,
    pub scale: f32,
    metrics: TextMetrics,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Style::FOREGROUND_STRONG,
            horizontal: Alignment::Middle,
            vertical: Alignment::Middle,
            scale: 1.0,
            metrics: TextMetrics::default(),
        }
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn with_alignment(mut self, horizontal: Alignment, vertical: Alignment) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }

    pub fn with_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn natural_size_px(&self) -> Vec2 {
        self.metrics.measure(&self.text, self.scale)
    }
}

fn align(alignment: Alignment, min: f32, max: f32, extent: f32) -> (f32, f32) {
    match alignment {
        Alignment::Min => (min, min + extent),
        Alignment::Max => (max - extent, max),
        Alignment::Middle => {
            let center = (min + max) * 0.5;
            (center - extent * 0.5, center + extent * 0.5)
        }
    }
}

impl Widget for Label {
    fn size_constraints(&self, _tree: &ElementTree, _id: ElementId) -> Option<SizeConstraints> {
        let size = self.natural_size_px().ceil();
        Some(SizeConstraints::fixed(size.x as i32, size.y as i32))
    }

    fn arrange(&self, mapped: Shape, screen_size: Vec2) -> Option<Shape> {
        if screen_size.x <= 0.0 || screen_size.y <= 0.0 {
            return None;
        }
        let extent = self.natural_size_px() / screen_size * 2.0;
        let (min_x, max_x) = align(self.horizontal, mapped.min.x, mapped.max.x, extent.x);
        let (min_y, max_y) = align(self.vertical, mapped.min.y, mapped.max.y, extent.y);
        Some(Shape::new(min_x, min_y, max_x, max_y))
    }

    fn describe(&self) -> Option<String> {
        Some(format!("{:?}", self.text))
    }
}

pub struct ColorRect {
    pub color: Color32,
}

impl ColorRect {
    pub fn new(color: Color32) -> Self {
        Self { color }
    }
}

impl Widget for ColorRect {
    fn describe(&self) -> Option<String> {
        let [r, g, b, _] = self.color.to_array();
        Some(format!("#{r:02x}{g:02x}{b:02x}"))
    }
}

/// Empty element that only reserves space.
pub struct Spacer {
    pub min_width: i32,
    pub min_height: i32,
}

impl Widget for Spacer {
    fn size_constraints(&self, _tree: &ElementTree, _id: ElementId) -> Option<SizeConstraints> {
        Some(SizeConstraints::new(Alignment::Middle, Alignment::Middle, self.min_width, self.min_height))
    }
}
