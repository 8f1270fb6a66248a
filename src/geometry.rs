use glam::Vec2;

/// Axis-aligned box. Local shapes are fractions of the parent's box, global shapes live in the
/// normalized `[-1, 1]` screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub min: Vec2,
    pub max: Vec2,
}

impl Shape {
    pub const IDENTITY: Shape = Shape::new(0.0, 0.0, 1.0, 1.0);
    pub const ZERO: Shape = Shape::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self { min: Vec2::new(min_x, min_y), max: Vec2::new(max_x, max_y) }
    }

    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self { min: center - half, max: center + half }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Moves the box so its center lands on `center`, keeping its size.
    pub fn with_center(self, center: Vec2) -> Self {
        Self::from_center_size(center, self.size())
    }

    pub fn translated(self, offset: Vec2) -> Self {
        Self { min: self.min + offset, max: self.max + offset }
    }

    pub fn contains_inclusive(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Distance from `point` to the closest edge of the box. Points outside measure to the box
    /// itself, points inside measure to the nearest side.
    pub fn distance_to_nearest_edge(&self, point: Vec2) -> f32 {
        if self.contains_inclusive(point) {
            let to_min = point - self.min;
            let to_max = self.max - point;
            to_min.x.min(to_min.y).min(to_max.x).min(to_max.y)
        } else {
            let clamped = point.clamp(self.min, self.max);
            (clamped - point).length()
        }
    }

    /// Resolves a shape expressed relative to `self` into the space `self` lives in.
    pub fn map_local(&self, local: Shape) -> Shape {
        let size = self.size();
        Shape { min: self.min + local.min * size, max: self.min + local.max * size }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::IDENTITY
    }
}
