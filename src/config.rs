use crate::geometry::Shape;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct MarqueeConfig {
    #[serde(default = "MarqueeConfig::default_dwell_seconds")]
    pub dwell_seconds: f32,
    /// Negative values sweep overflowed text so its tail comes into view first.
    #[serde(default = "MarqueeConfig::default_speed_factor")]
    pub speed_factor: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolbarConfig {
    /// Screen-space tolerance around a tab that still counts as hovering it.
    #[serde(default = "ToolbarConfig::default_hover_tolerance_px")]
    pub hover_tolerance_px: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectorConfig {
    #[serde(default = "InspectorConfig::default_window_shape")]
    pub window_shape: [f32; 4],
    #[serde(default = "InspectorConfig::default_min_list_height")]
    pub min_list_height: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    #[serde(default = "TextConfig::default_glyph_advance_px")]
    pub glyph_advance_px: f32,
    #[serde(default = "TextConfig::default_line_height_px")]
    pub line_height_px: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct EditorUiConfig {
    #[serde(default)]
    pub marquee: MarqueeConfig,
    #[serde(default)]
    pub toolbar: ToolbarConfig,
    #[serde(default)]
    pub inspector: InspectorConfig,
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
}

#[derive(Debug, Clone, Default)]
pub struct EditorUiConfigOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl MarqueeConfig {
    const fn default_dwell_seconds() -> f32 {
        1.0
    }

    const fn default_speed_factor() -> f32 {
        -0.07
    }
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self { dwell_seconds: Self::default_dwell_seconds(), speed_factor: Self::default_speed_factor() }
    }
}

impl ToolbarConfig {
    const fn default_hover_tolerance_px() -> f32 {
        10.0
    }
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self { hover_tolerance_px: Self::default_hover_tolerance_px() }
    }
}

impl InspectorConfig {
    const fn default_window_shape() -> [f32; 4] {
        [0.4, 0.3, 0.6, 0.7]
    }

    const fn default_min_list_height() -> i32 {
        16
    }

    pub fn window_shape(&self) -> Shape {
        let [min_x, min_y, max_x, max_y] = self.window_shape;
        Shape::new(min_x, min_y, max_x, max_y)
    }
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self { window_shape: Self::default_window_shape(), min_list_height: Self::default_min_list_height() }
    }
}

impl TextConfig {
    const fn default_glyph_advance_px() -> f32 {
        8.0
    }

    const fn default_line_height_px() -> f32 {
        16.0
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            glyph_advance_px: Self::default_glyph_advance_px(),
            line_height_px: Self::default_line_height_px(),
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self { width: 1280, height: 720 }
    }
}

impl EditorUiConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!("Config load error: {err:?}. Falling back to defaults.");
                Self::default()
            }
        }
    }

    pub fn apply_overrides(&mut self, overrides: &EditorUiConfigOverrides) {
        if let Some(width) = overrides.width {
            self.screen.width = width;
        }
        if let Some(height) = overrides.height {
            self.screen.height = height;
        }
    }
}

impl EditorUiConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}
