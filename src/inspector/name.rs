use crate::config::MarqueeConfig;
use crate::editor::EditorContext;
use crate::geometry::Shape;
use crate::ui::{
    Alignment, ElementId, ElementTree, FrameUpdateArgs, InputUpdateArgs, Label, MouseEvent, MouseEventKind,
    SizeConstraints, Style, Widget,
};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarqueePhase {
    #[default]
    WaitMin,
    WaitMax,
    GoToMax,
    GoToMin,
}

/// Global shapes the marquee reads each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeGeometry {
    pub owner: Shape,
    pub moving: Shape,
}

/// Scroll state for a name whose text is wider than its slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameScroller {
    phase: MarqueePhase,
    wait_timer: f32,
    dwell_seconds: f32,
    speed_factor: f32,
}

impl NameScroller {
    pub fn new(config: &MarqueeConfig) -> Self {
        Self {
            phase: MarqueePhase::default(),
            wait_timer: 0.0,
            dwell_seconds: config.dwell_seconds,
            speed_factor: config.speed_factor,
        }
    }

    pub fn phase(&self) -> MarqueePhase {
        self.phase
    }

    pub fn wait_timer(&self) -> f32 {
        self.wait_timer
    }

    /// Advances one frame. Returns the next state and the horizontal offset to add to the moving
    /// element's local center.
    pub fn step(self, delta_time: f32, geometry: &MarqueeGeometry) -> (Self, f32) {
        let mut next = self;
        match self.phase {
            MarqueePhase::WaitMin | MarqueePhase::WaitMax => {
                next.wait_timer += delta_time;
                if next.wait_timer < self.dwell_seconds {
                    return (next, 0.0);
                }
                next.wait_timer = 0.0;
                next.phase = match self.phase {
                    MarqueePhase::WaitMin => MarqueePhase::GoToMax,
                    _ => MarqueePhase::GoToMin,
                };
                (next, 0.0)
            }
            MarqueePhase::GoToMax => {
                if geometry.moving.max.x <= geometry.owner.max.x {
                    next.phase = MarqueePhase::WaitMax;
                }
                (next, self.delta_x(delta_time, geometry.owner))
            }
            MarqueePhase::GoToMin => {
                if geometry.moving.min.x >= geometry.owner.min.x {
                    next.phase = MarqueePhase::WaitMin;
                }
                (next, -self.delta_x(delta_time, geometry.owner))
            }
        }
    }

    // Normalized by the owner's width so the sweep speed does not depend on resolution.
    fn delta_x(&self, delta_time: f32, owner: Shape) -> f32 {
        let width = owner.size().x;
        if width <= 0.0 {
            return 0.0;
        }
        delta_time / width * self.speed_factor
    }
}

/// Member name in an inspector row. Never truncates: text that does not fit scrolls instead.
pub struct InspectorName {
    text: ElementId,
    scroller: Option<NameScroller>,
    marquee: MarqueeConfig,
}

impl InspectorName {
    pub fn spawn(tree: &mut ElementTree, parent: ElementId, name: &str, ctx: &EditorContext) -> ElementId {
        let id = tree.spawn(parent, "name", Shape::new(0.0, 0.0, 0.5, 1.0));
        let text = tree.spawn_widget(
            id,
            "name_text",
            Shape::IDENTITY,
            Label::new(name)
                .with_color(Style::TINT)
                .with_alignment(Alignment::Max, Alignment::Min)
                .with_metrics(ctx.text_metrics()),
        );
        tree.set_widget(id, InspectorName { text, scroller: None, marquee: ctx.config().marquee.clone() });
        id
    }

    pub fn text_element(&self) -> ElementId {
        self.text
    }

    pub fn scroller(&self) -> Option<&NameScroller> {
        self.scroller.as_ref()
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroller.is_some()
    }

    fn overflows(&self, tree: &ElementTree, id: ElementId) -> bool {
        match (tree.last_global_shape(self.text), tree.last_global_shape(id)) {
            (Some(text), Some(owner)) => text.size().x > owner.size().x,
            _ => false,
        }
    }

    fn stop_scrolling(&mut self, tree: &mut ElementTree) {
        if self.scroller.take().is_some() {
            tree.set_local_shape(self.text, Shape::IDENTITY);
            tracing::debug!(text = ?self.text, "name marquee stopped");
        }
    }
}

impl Widget for InspectorName {
    fn size_constraints(&self, tree: &ElementTree, _id: ElementId) -> Option<SizeConstraints> {
        let mut constraints = tree.last_size_constraints(self.text)?;
        constraints.min_size_x = 0;
        constraints.max_size_x = i32::MAX;
        Some(constraints)
    }

    fn scissor_region(&self) -> Option<Shape> {
        Some(Shape::IDENTITY)
    }

    fn handle_mouse_event(&mut self, tree: &mut ElementTree, id: ElementId, event: &MouseEvent) {
        if matches!(event.kind, MouseEventKind::Exited) || self.scroller.is_some() {
            return;
        }
        let inside = tree.last_global_shape(id).is_some_and(|owner| owner.contains_inclusive(event.position));
        if inside && self.overflows(tree, id) {
            self.scroller = Some(NameScroller::new(&self.marquee));
            tracing::debug!(text = ?self.text, "name marquee started");
        }
    }

    fn input_update(&mut self, tree: &mut ElementTree, id: ElementId, args: &InputUpdateArgs) {
        if self.scroller.is_none() {
            return;
        }
        let inside = tree.last_global_shape(id).is_some_and(|owner| owner.contains_inclusive(args.mouse_position()));
        if !inside {
            self.stop_scrolling(tree);
        }
    }

    fn frame_update(&mut self, tree: &mut ElementTree, id: ElementId, args: &FrameUpdateArgs) {
        let Some(scroller) = self.scroller else {
            return;
        };
        let (Some(owner), Some(moving), Some(local)) =
            (tree.last_global_shape(id), tree.last_global_shape(self.text), tree.local_shape(self.text))
        else {
            return;
        };
        let (next, offset) = scroller.step(args.delta_time, &MarqueeGeometry { owner, moving });
        self.scroller = Some(next);
        let center = local.center();
        tree.set_local_shape(self.text, local.with_center(Vec2::new(center.x + offset, center.y)));
    }

    fn on_destroyed(&mut self, tree: &mut ElementTree, _id: ElementId) {
        self.stop_scrolling(tree);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(moving_min: f32, moving_max: f32) -> MarqueeGeometry {
        MarqueeGeometry {
            owner: Shape::new(0.0, 0.0, 0.5, 0.1),
            moving: Shape::new(moving_min, 0.0, moving_max, 0.1),
        }
    }

    #[test]
    fn waits_for_dwell_before_moving() {
        let scroller = NameScroller::new(&MarqueeConfig::default());
        assert_eq!(scroller.phase(), MarqueePhase::WaitMin);
        let (scroller, offset) = scroller.step(0.6, &geometry(-0.3, 0.8));
        assert_eq!((scroller.phase(), offset), (MarqueePhase::WaitMin, 0.0));
        let (scroller, offset) = scroller.step(0.4, &geometry(-0.3, 0.8));
        assert_eq!((scroller.phase(), offset), (MarqueePhase::GoToMax, 0.0));
        assert_eq!(scroller.wait_timer(), 0.0);
    }

    #[test]
    fn go_to_max_moves_left_until_right_edge_fits() {
        let config = MarqueeConfig::default();
        let scroller = NameScroller { phase: MarqueePhase::GoToMax, ..NameScroller::new(&config) };
        let (scroller, offset) = scroller.step(0.5, &geometry(-0.3, 0.8));
        assert_eq!(scroller.phase(), MarqueePhase::GoToMax);
        assert!((offset - 0.5 / 0.5 * -0.07).abs() < 1e-6);

        let (scroller, _) = scroller.step(0.5, &geometry(-0.6, 0.5));
        assert_eq!(scroller.phase(), MarqueePhase::WaitMax);
    }

    #[test]
    fn go_to_min_moves_right_until_left_edge_fits() {
        let config = MarqueeConfig::default();
        let scroller = NameScroller { phase: MarqueePhase::GoToMin, ..NameScroller::new(&config) };
        let (scroller, offset) = scroller.step(0.5, &geometry(-0.6, 0.5));
        assert_eq!(scroller.phase(), MarqueePhase::GoToMin);
        assert!(offset > 0.0);
        let (scroller, _) = scroller.step(0.5, &geometry(0.0, 1.1));
        assert_eq!(scroller.phase(), MarqueePhase::WaitMin);
    }
}
