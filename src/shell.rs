use crate::config::EditorUiConfig;
use crate::editor::EditorContext;
use crate::input::{Input, InputEvent};
use crate::time::FrameClock;
use crate::ui::{ElementTree, FrameUpdateArgs};
use glam::Vec2;
use std::time::Duration;
use winit::event::WindowEvent;

/// Drives an element tree from window events and frame ticks.
///
/// Every window event is routed first as mouse events, then as one input update. Every frame lays
/// the tree out before the frame update, so widgets always read last-frame shapes.
pub struct EditorUi {
    tree: ElementTree,
    input: Input,
    clock: FrameClock,
    context: EditorContext,
}

impl EditorUi {
    pub fn new(config: EditorUiConfig) -> Self {
        Self::with_context(EditorContext::new(config))
    }

    pub fn with_context(context: EditorContext) -> Self {
        let screen = &context.config().screen;
        let screen_size = Vec2::new(screen.width as f32, screen.height as f32);
        Self { tree: ElementTree::new(screen_size), input: Input::new(screen_size), clock: FrameClock::new(), context }
    }

    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ElementTree {
        &mut self.tree
    }

    pub fn context(&self) -> &EditorContext {
        &self.context
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Both the tree and the context, for spawning widgets.
    pub fn parts_mut(&mut self) -> (&mut ElementTree, &EditorContext) {
        (&mut self.tree, &self.context)
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        self.push_input(InputEvent::from_window_event(event));
    }

    pub fn push_input(&mut self, event: InputEvent) {
        if matches!(event, InputEvent::Other) {
            return;
        }
        self.input.push(event);
        self.tree.set_screen_size(self.input.screen_size());
        for (kind, position) in self.input.drain_mouse_events() {
            self.tree.route_mouse_event(kind, position);
        }
        let args = self.input.input_update_args();
        self.tree.dispatch_input_update(&args);
    }

    /// Frame with a measured delta.
    pub fn frame(&mut self) {
        self.clock.tick();
        self.run_frame();
    }

    /// Frame with an injected delta, for tests and headless runs.
    pub fn frame_with_delta(&mut self, delta: Duration) {
        self.clock.advance(delta);
        self.run_frame();
    }

    fn run_frame(&mut self) {
        self.tree.layout();
        let args = FrameUpdateArgs { delta_time: self.clock.delta_seconds() };
        self.tree.dispatch_frame_update(&args);
    }
}
