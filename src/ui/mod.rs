//! Retained element tree the editor widgets live in.
//!
//! Every element is an entity in a `bevy_ecs` [`World`]. Its name, local shape, last global shape,
//! size constraints, layout hint and visibility are components, and the hierarchy is kept in
//! [`Parent`]/[`Children`]. Widgets are not `Send`, so they live in a non-send resource keyed by
//! entity. Dispatch always runs in tree order (pre-order from the root). While a widget runs it is
//! taken out of that resource, so it may freely mutate the rest of the tree through the
//! `&mut ElementTree` it is handed.

mod style;
mod widgets;

pub use style::Style;
pub use widgets::{ColorRect, Label, Spacer, TextMetrics};

use crate::geometry::Shape;
use bevy_ecs::prelude::{Component, Entity, Mut, World};
use glam::Vec2;
use smallvec::SmallVec;
use std::any::Any;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Write as _;
use winit::event::MouseButton;

/// Handle to an element. Entity generations keep stale handles from aliasing new elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(Entity);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Min,
    #[default]
    Middle,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeConstraints {
    pub grow_x: Alignment,
    pub grow_y: Alignment,
    pub min_size_x: i32,
    pub min_size_y: i32,
    pub max_size_x: i32,
    pub max_size_y: i32,
}

impl SizeConstraints {
    pub const fn new(grow_x: Alignment, grow_y: Alignment, min_size_x: i32, min_size_y: i32) -> Self {
        Self { grow_x, grow_y, min_size_x, min_size_y, max_size_x: i32::MAX, max_size_y: i32::MAX }
    }

    pub const fn fixed(width: i32, height: i32) -> Self {
        Self {
            grow_x: Alignment::Middle,
            grow_y: Alignment::Middle,
            min_size_x: width,
            min_size_y: height,
            max_size_x: width,
            max_size_y: height,
        }
    }
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self::new(Alignment::Middle, Alignment::Middle, 0, 0)
    }
}

/// Declarative arrangement hint consumed by the host's layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Vertical { start_at_max: bool },
    Horizontal { start_at_max: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdateArgs {
    pub delta_time: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputUpdateArgs {
    /// Cursor position in `[0, 1]` window space.
    pub normalized_mouse_position: Vec2,
    /// Window size in pixels.
    pub screen_size: Vec2,
}

impl InputUpdateArgs {
    /// Cursor position in the `[-1, 1]` space global shapes use.
    pub fn mouse_position(&self) -> Vec2 {
        self.normalized_mouse_position * 2.0 - Vec2::ONE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Moved,
    Pressed(MouseButton),
    Released(MouseButton),
    Entered,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    /// Position in `[-1, 1]` space.
    pub position: Vec2,
}

pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Behaviour attached to an element. Every hook is optional.
#[allow(unused_variables)]
pub trait Widget: AsAny + 'static {
    fn size_constraints(&self, tree: &ElementTree, id: ElementId) -> Option<SizeConstraints> {
        None
    }

    /// Overrides the global shape the layout pass would give this element. `mapped` is the local
    /// shape resolved against the parent.
    fn arrange(&self, mapped: Shape, screen_size: Vec2) -> Option<Shape> {
        None
    }

    fn scissor_region(&self) -> Option<Shape> {
        None
    }

    fn frame_update(&mut self, tree: &mut ElementTree, id: ElementId, args: &FrameUpdateArgs) {}

    fn input_update(&mut self, tree: &mut ElementTree, id: ElementId, args: &InputUpdateArgs) {}

    /// Receives events while the pointer is over the element, plus the synthesized entry/exit.
    /// Button releases are broadcast to every enabled widget so press state never sticks.
    fn handle_mouse_event(&mut self, tree: &mut ElementTree, id: ElementId, event: &MouseEvent) {}

    fn on_enable(&mut self, tree: &mut ElementTree, id: ElementId) {}

    fn on_disable(&mut self, tree: &mut ElementTree, id: ElementId) {}

    fn on_destroyed(&mut self, tree: &mut ElementTree, id: ElementId) {}

    fn describe(&self) -> Option<String> {
        None
    }
}

fn downcast_ref<W: Widget>(widget: &dyn Widget) -> Option<&W> {
    widget.as_any().downcast_ref::<W>()
}

fn downcast_mut<W: Widget>(widget: &mut dyn Widget) -> Option<&mut W> {
    widget.as_any_mut().downcast_mut::<W>()
}

// ---------- Components ----------
#[derive(Component)]
struct ElementName(Cow<'static, str>);
#[derive(Component, Clone, Copy)]
struct LocalShape(Shape);
#[derive(Component, Clone, Copy)]
struct GlobalShape(Shape);
#[derive(Component, Clone, Copy, Default)]
struct Constraints(SizeConstraints);
#[derive(Component, Clone, Copy, Default)]
struct LayoutHint(Option<Layout>);
#[derive(Component, Clone, Copy)]
struct ElementState {
    visible: bool,
    enabled: bool,
    hovered: bool,
}
impl Default for ElementState {
    fn default() -> Self {
        Self { visible: true, enabled: true, hovered: false }
    }
}
#[derive(Component, Clone, Copy)]
pub struct Parent(pub ElementId);
#[derive(Component, Default)]
pub struct Children(pub SmallVec<[ElementId; 4]>);

#[derive(Default)]
struct WidgetSlots(HashMap<Entity, Box<dyn Widget>>);

pub struct ElementTree {
    world: World,
    root: ElementId,
    screen_size: Vec2,
}

impl ElementTree {
    pub fn new(screen_size: Vec2) -> Self {
        let mut world = World::new();
        world.insert_non_send_resource(WidgetSlots::default());
        let root = world
            .spawn((
                ElementName(Cow::Borrowed("root")),
                LocalShape(Shape::IDENTITY),
                GlobalShape(Shape::new(-1.0, -1.0, 1.0, 1.0)),
                Constraints::default(),
                LayoutHint::default(),
                ElementState::default(),
                Children::default(),
            ))
            .id();
        Self { world, root: ElementId(root), screen_size }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    pub fn set_screen_size(&mut self, screen_size: Vec2) {
        self.screen_size = screen_size;
    }

    /// Live elements, the root included.
    pub fn len(&self) -> usize {
        self.world.entities().len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.world.get_entity(id.0).is_ok()
    }

    /// Adds an element under `parent`. A stale parent falls back to the root.
    pub fn spawn(
        &mut self,
        parent: ElementId,
        name: impl Into<Cow<'static, str>>,
        local_shape: Shape,
    ) -> ElementId {
        let parent = if self.contains(parent) {
            parent
        } else {
            tracing::warn!("spawn under stale element {parent:?}, attaching to root");
            self.root
        };
        let entity = self
            .world
            .spawn((
                ElementName(name.into()),
                LocalShape(local_shape),
                GlobalShape(Shape::ZERO),
                Constraints::default(),
                LayoutHint::default(),
                ElementState::default(),
                Parent(parent),
                Children::default(),
            ))
            .id();
        let id = ElementId(entity);
        if let Some(mut siblings) = self.world.get_mut::<Children>(parent.0) {
            siblings.0.push(id);
        }
        id
    }

    pub fn spawn_widget(
        &mut self,
        parent: ElementId,
        name: impl Into<Cow<'static, str>>,
        local_shape: Shape,
        widget: impl Widget,
    ) -> ElementId {
        let id = self.spawn(parent, name, local_shape);
        self.set_widget(id, widget);
        id
    }

    pub fn set_widget(&mut self, id: ElementId, widget: impl Widget) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.put_widget(id, Box::new(widget));
        true
    }

    pub fn widget<W: Widget>(&self, id: ElementId) -> Option<&W> {
        downcast_ref(self.widget_ref(id)?)
    }

    pub fn widget_mut<W: Widget>(&mut self, id: ElementId) -> Option<&mut W> {
        let slots = self.world.get_non_send_resource_mut::<WidgetSlots>()?.into_inner();
        downcast_mut(&mut **slots.0.get_mut(&id.0)?)
    }

    /// Runs `f` with the element's widget taken out, so it can mutate the tree around itself.
    pub fn with_widget<W: Widget, R>(
        &mut self,
        id: ElementId,
        f: impl FnOnce(&mut W, &mut ElementTree) -> R,
    ) -> Option<R> {
        let mut result = None;
        self.call_widget(id, |widget, tree| {
            if let Some(widget) = downcast_mut::<W>(widget) {
                result = Some(f(widget, tree));
            }
        });
        result
    }

    fn call_widget(&mut self, id: ElementId, f: impl FnOnce(&mut dyn Widget, &mut ElementTree)) {
        let Some(mut widget) = self.take_widget(id) else {
            return;
        };
        f(&mut *widget, self);
        if !self.contains(id) {
            // Destroyed from inside its own callback.
            widget.on_destroyed(self, id);
        } else if !self.has_widget(id) {
            self.put_widget(id, widget);
        }
    }

    fn slots_mut(&mut self) -> Option<Mut<'_, WidgetSlots>> {
        self.world.get_non_send_resource_mut::<WidgetSlots>()
    }

    fn widget_ref(&self, id: ElementId) -> Option<&dyn Widget> {
        let slots = self.world.get_non_send_resource::<WidgetSlots>()?;
        slots.0.get(&id.0).map(|widget| &**widget)
    }

    fn has_widget(&self, id: ElementId) -> bool {
        self.widget_ref(id).is_some()
    }

    fn take_widget(&mut self, id: ElementId) -> Option<Box<dyn Widget>> {
        self.slots_mut()?.0.remove(&id.0)
    }

    fn put_widget(&mut self, id: ElementId, widget: Box<dyn Widget>) {
        if let Some(mut slots) = self.slots_mut() {
            slots.0.insert(id.0, widget);
        }
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.world.get::<Parent>(id.0).map(|parent| parent.0)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        match self.world.get::<Children>(id.0) {
            Some(children) => children.0.as_slice(),
            None => &[],
        }
    }

    pub fn name(&self, id: ElementId) -> Option<&str> {
        self.world.get::<ElementName>(id.0).map(|name| name.0.as_ref())
    }

    pub fn local_shape(&self, id: ElementId) -> Option<Shape> {
        self.world.get::<LocalShape>(id.0).map(|shape| shape.0)
    }

    pub fn set_local_shape(&mut self, id: ElementId, shape: Shape) -> bool {
        match self.world.get_mut::<LocalShape>(id.0) {
            Some(mut local) => {
                local.0 = shape;
                true
            }
            None => false,
        }
    }

    pub fn last_global_shape(&self, id: ElementId) -> Option<Shape> {
        self.world.get::<GlobalShape>(id.0).map(|shape| shape.0)
    }

    /// Records a global shape computed by an external layout engine.
    pub fn set_last_global_shape(&mut self, id: ElementId, shape: Shape) -> bool {
        match self.world.get_mut::<GlobalShape>(id.0) {
            Some(mut global) => {
                global.0 = shape;
                true
            }
            None => false,
        }
    }

    pub fn last_size_constraints(&self, id: ElementId) -> Option<SizeConstraints> {
        self.world.get::<Constraints>(id.0).map(|constraints| constraints.0)
    }

    pub fn scissor_region(&self, id: ElementId) -> Option<Shape> {
        self.widget_ref(id)?.scissor_region()
    }

    pub fn layout_hint(&self, id: ElementId) -> Option<Layout> {
        self.world.get::<LayoutHint>(id.0).and_then(|hint| hint.0)
    }

    pub fn set_layout(&mut self, id: ElementId, layout: Layout) -> bool {
        match self.world.get_mut::<LayoutHint>(id.0) {
            Some(mut hint) => {
                hint.0 = Some(layout);
                true
            }
            None => false,
        }
    }

    fn state(&self, id: ElementId) -> Option<ElementState> {
        self.world.get::<ElementState>(id.0).copied()
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        self.state(id).is_some_and(|state| state.visible)
    }

    pub fn set_visible(&mut self, id: ElementId, visible: bool) -> bool {
        match self.world.get_mut::<ElementState>(id.0) {
            Some(mut state) => {
                state.visible = visible;
                if !visible {
                    state.hovered = false;
                }
                true
            }
            None => false,
        }
    }

    pub fn is_enabled(&self, id: ElementId) -> bool {
        self.state(id).is_some_and(|state| state.enabled)
    }

    pub fn is_hovered(&self, id: ElementId) -> bool {
        self.state(id).is_some_and(|state| state.hovered)
    }

    pub fn set_enabled(&mut self, id: ElementId, enabled: bool) -> bool {
        {
            let Some(mut state) = self.world.get_mut::<ElementState>(id.0) else {
                return false;
            };
            if state.enabled == enabled {
                return true;
            }
            state.enabled = enabled;
        }
        self.call_widget(id, |widget, tree| {
            if enabled {
                widget.on_enable(tree, id);
            } else {
                widget.on_disable(tree, id);
            }
        });
        true
    }

    /// Destroys `id` and its subtree, children first. Stale ids and the root are ignored.
    pub fn destroy(&mut self, id: ElementId) -> bool {
        if id == self.root || !self.contains(id) {
            return false;
        }
        if let Some(parent) = self.parent(id) {
            if let Some(mut siblings) = self.world.get_mut::<Children>(parent.0) {
                siblings.0.retain(|child| *child != id);
            }
        }
        self.despawn_element(id)
    }

    fn despawn_element(&mut self, id: ElementId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let children = SmallVec::<[ElementId; 4]>::from_slice(self.children(id));
        for child in children {
            self.despawn_element(child);
        }
        if let Some(mut widget) = self.take_widget(id) {
            widget.on_destroyed(self, id);
        }
        self.world.despawn(id.0)
    }

    fn collect_post_order(&self, id: ElementId, out: &mut Vec<ElementId>) {
        for child in self.children(id) {
            self.collect_post_order(*child, out);
        }
        out.push(id);
    }

    /// Visible elements in pre-order. Hidden subtrees are skipped entirely.
    pub fn tree_order(&self) -> Vec<ElementId> {
        let mut order = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if !self.is_visible(id) {
                continue;
            }
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    pub fn dispatch_frame_update(&mut self, args: &FrameUpdateArgs) {
        for id in self.tree_order() {
            self.call_widget(id, |widget, tree| widget.frame_update(tree, id, args));
        }
    }

    pub fn dispatch_input_update(&mut self, args: &InputUpdateArgs) {
        for id in self.tree_order() {
            self.call_widget(id, |widget, tree| widget.input_update(tree, id, args));
        }
    }

    pub fn route_mouse_event(&mut self, kind: MouseEventKind, position: Vec2) {
        for id in self.tree_order() {
            if !self.has_widget(id) {
                continue;
            }
            // Popups may hide earlier elements while this event is being routed.
            let Some((inside, transition)) = self.update_hover(id, position) else {
                continue;
            };
            if let Some(transition) = transition {
                let event = MouseEvent { kind: transition, position };
                self.call_widget(id, |widget, tree| widget.handle_mouse_event(tree, id, &event));
            }
            let deliver = inside || matches!(kind, MouseEventKind::Released(_));
            if deliver && !matches!(kind, MouseEventKind::Entered | MouseEventKind::Exited) {
                let event = MouseEvent { kind, position };
                self.call_widget(id, |widget, tree| widget.handle_mouse_event(tree, id, &event));
            }
        }
    }

    /// Updates the hover flag of an enabled, visible element and reports the entry/exit it implies.
    fn update_hover(&mut self, id: ElementId, position: Vec2) -> Option<(bool, Option<MouseEventKind>)> {
        let shape = self.last_global_shape(id)?;
        let mut state = self.world.get_mut::<ElementState>(id.0)?;
        if !state.enabled || !state.visible {
            return None;
        }
        let inside = shape.contains_inclusive(position);
        let transition = (inside != state.hovered).then_some(if inside {
            MouseEventKind::Entered
        } else {
            MouseEventKind::Exited
        });
        state.hovered = inside;
        Some((inside, transition))
    }

    /// Recomputes size constraints bottom-up from the widgets' reports.
    pub fn update_size_constraints(&mut self) {
        let mut order = Vec::new();
        self.collect_post_order(self.root, &mut order);
        for id in order {
            let constraints =
                self.widget_ref(id).and_then(|widget| widget.size_constraints(self, id)).unwrap_or_default();
            if let Some(mut slot) = self.world.get_mut::<Constraints>(id.0) {
                slot.0 = constraints;
            }
        }
    }

    /// Naive placement pass: every element's local shape is resolved against its parent's global
    /// shape unless its widget arranges itself. Linear/flow layouts are left to the host.
    pub fn layout(&mut self) {
        self.update_size_constraints();
        let screen_size = self.screen_size;
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(parent_shape) = self.last_global_shape(id) else {
                continue;
            };
            let children = SmallVec::<[ElementId; 4]>::from_slice(self.children(id));
            for child in children {
                let Some(local) = self.local_shape(child) else {
                    continue;
                };
                let mapped = parent_shape.map_local(local);
                let arranged = self
                    .widget_ref(child)
                    .and_then(|widget| widget.arrange(mapped, screen_size))
                    .unwrap_or(mapped);
                self.set_last_global_shape(child, arranged);
                stack.push(child);
            }
        }
    }

    /// Indented outline of the visible tree, one element per line.
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root, 0, &mut out);
        out
    }

    fn dump_node(&self, id: ElementId, depth: usize, out: &mut String) {
        if !self.is_visible(id) {
            return;
        }
        let shape = self.last_global_shape(id).unwrap_or(Shape::ZERO);
        let _ = write!(
            out,
            "{:indent$}{} [{:.2}, {:.2} .. {:.2}, {:.2}]",
            "",
            self.name(id).unwrap_or("?"),
            shape.min.x,
            shape.min.y,
            shape.max.x,
            shape.max.y,
            indent = depth * 2
        );
        if let Some(description) = self.widget_ref(id).and_then(|widget| widget.describe()) {
            let _ = write!(out, " {description}");
        }
        out.push('\n');
        for child in self.children(id) {
            self.dump_node(*child, depth + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        log: Rc<RefCell<Vec<String>>>,
        tag: &'static str,
    }

    impl Widget for Recorder {
        fn frame_update(&mut self, _tree: &mut ElementTree, _id: ElementId, _args: &FrameUpdateArgs) {
            self.log.borrow_mut().push(format!("frame {}", self.tag));
        }

        fn handle_mouse_event(&mut self, _tree: &mut ElementTree, _id: ElementId, event: &MouseEvent) {
            self.log.borrow_mut().push(format!("{:?} {}", event.kind, self.tag));
        }

        fn on_destroyed(&mut self, _tree: &mut ElementTree, _id: ElementId) {
            self.log.borrow_mut().push(format!("destroyed {}", self.tag));
        }
    }

    fn tree() -> ElementTree {
        ElementTree::new(Vec2::new(200.0, 100.0))
    }

    #[test]
    fn frame_dispatch_follows_tree_order_and_skips_hidden() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut tree = tree();
        let root = tree.root();
        let a = tree.spawn_widget(root, "a", Shape::IDENTITY, Recorder { log: Rc::clone(&log), tag: "a" });
        tree.spawn_widget(a, "a1", Shape::IDENTITY, Recorder { log: Rc::clone(&log), tag: "a1" });
        let b = tree.spawn_widget(root, "b", Shape::IDENTITY, Recorder { log: Rc::clone(&log), tag: "b" });
        tree.dispatch_frame_update(&FrameUpdateArgs { delta_time: 0.016 });
        assert_eq!(*log.borrow(), ["frame a", "frame a1", "frame b"]);

        log.borrow_mut().clear();
        tree.set_visible(b, false);
        tree.dispatch_frame_update(&FrameUpdateArgs { delta_time: 0.016 });
        assert_eq!(*log.borrow(), ["frame a", "frame a1"]);
    }

    #[test]
    fn destroy_runs_children_first_and_invalidates_ids() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut tree = tree();
        let root = tree.root();
        let a = tree.spawn_widget(root, "a", Shape::IDENTITY, Recorder { log: Rc::clone(&log), tag: "a" });
        let child = tree.spawn_widget(a, "a1", Shape::IDENTITY, Recorder { log: Rc::clone(&log), tag: "a1" });
        assert!(tree.destroy(a));
        assert_eq!(*log.borrow(), ["destroyed a1", "destroyed a"]);
        assert!(!tree.contains(a));
        assert!(!tree.contains(child));
        assert!(!tree.destroy(a), "stale id is ignored");
        assert!(tree.children(root).is_empty());

        let reused = tree.spawn(root, "reused", Shape::IDENTITY);
        assert_ne!(reused, a);
        assert_ne!(reused, child);
        assert_eq!(tree.parent(reused), Some(root));
        assert_eq!(tree.children(root), [reused]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn mouse_routing_synthesizes_entry_and_exit() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut tree = tree();
        let root = tree.root();
        let a = tree.spawn_widget(
            root,
            "a",
            Shape::new(0.0, 0.0, 0.5, 0.5),
            Recorder { log: Rc::clone(&log), tag: "a" },
        );
        tree.layout();
        assert_eq!(tree.last_global_shape(a), Some(Shape::new(-1.0, -1.0, 0.0, 0.0)));

        tree.route_mouse_event(MouseEventKind::Moved, Vec2::new(-0.5, -0.5));
        tree.route_mouse_event(MouseEventKind::Pressed(MouseButton::Left), Vec2::new(-0.5, -0.5));
        tree.route_mouse_event(MouseEventKind::Moved, Vec2::new(0.5, 0.5));
        tree.route_mouse_event(MouseEventKind::Released(MouseButton::Left), Vec2::new(0.5, 0.5));
        assert_eq!(
            *log.borrow(),
            ["Entered a", "Moved a", "Pressed(Left) a", "Exited a", "Released(Left) a"]
        );
    }

    #[test]
    fn with_widget_downcasts_to_concrete_type() {
        let mut tree = tree();
        let root = tree.root();
        let id = tree.spawn_widget(root, "label", Shape::IDENTITY, Label::new("hello"));
        let text = tree.with_widget::<Label, _>(id, |label, _| label.text().to_string());
        assert_eq!(text.as_deref(), Some("hello"));
        assert!(tree.with_widget::<ColorRect, _>(id, |_, _| ()).is_none());
        assert!(tree.widget::<Label>(id).is_some());
    }
}
