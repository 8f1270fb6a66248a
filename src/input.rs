use crate::ui::{InputUpdateArgs, MouseEventKind};
use glam::Vec2;
use smallvec::SmallVec;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Pointer state accumulated from window events, in pixels with the origin at the top-left.
pub struct Input {
    cursor_pos: Option<(f32, f32)>,
    screen_size: Vec2,
    held: SmallVec<[MouseButton; 4]>,
    pending: Vec<(MouseEventKind, Vec2)>,
}

impl Input {
    pub fn new(screen_size: Vec2) -> Self {
        Self { cursor_pos: None, screen_size, held: SmallVec::new(), pending: Vec::new() }
    }

    pub fn push(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::CursorPos { x, y } => {
                self.cursor_pos = Some((x, y));
                self.pending.push((MouseEventKind::Moved, self.mouse_position()));
            }
            InputEvent::CursorLeft => {
                self.cursor_pos = None;
                self.pending.push((MouseEventKind::Moved, self.mouse_position()));
            }
            InputEvent::MouseButton { button, pressed } => {
                let kind = if pressed {
                    if !self.held.contains(&button) {
                        self.held.push(button);
                    }
                    MouseEventKind::Pressed(button)
                } else {
                    self.held.retain(|held| *held != button);
                    MouseEventKind::Released(button)
                };
                self.pending.push((kind, self.mouse_position()));
            }
            InputEvent::Resized { width, height } => {
                self.screen_size = Vec2::new(width as f32, height as f32);
            }
            InputEvent::Other => {}
        }
    }

    pub fn cursor_position(&self) -> Option<(f32, f32)> {
        self.cursor_pos
    }

    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    pub fn held(&self, button: MouseButton) -> bool {
        self.held.contains(&button)
    }

    /// Cursor in `[0, 1]` with y pointing up. A cursor outside the window maps far off-screen.
    pub fn normalized_mouse_position(&self) -> Vec2 {
        match self.cursor_pos {
            Some((x, y)) if self.screen_size.x > 0.0 && self.screen_size.y > 0.0 => {
                Vec2::new(x / self.screen_size.x, 1.0 - y / self.screen_size.y)
            }
            _ => Vec2::splat(-1.0),
        }
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.normalized_mouse_position() * 2.0 - Vec2::ONE
    }

    pub fn input_update_args(&self) -> InputUpdateArgs {
        InputUpdateArgs { normalized_mouse_position: self.normalized_mouse_position(), screen_size: self.screen_size }
    }

    pub fn drain_mouse_events(&mut self) -> Vec<(MouseEventKind, Vec2)> {
        self.pending.drain(..).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    CursorPos { x: f32, y: f32 },
    CursorLeft,
    MouseButton { button: MouseButton, pressed: bool },
    Resized { width: u32, height: u32 },
    Other,
}

impl InputEvent {
    pub fn from_window_event(ev: &WindowEvent) -> Self {
        match ev {
            WindowEvent::CursorMoved { position, .. } => {
                InputEvent::CursorPos { x: position.x as f32, y: position.y as f32 }
            }
            WindowEvent::CursorLeft { .. } => InputEvent::CursorLeft,
            WindowEvent::MouseInput { state, button, .. } => {
                InputEvent::MouseButton { button: *button, pressed: *state == ElementState::Pressed }
            }
            WindowEvent::Resized(size) => InputEvent::Resized { width: size.width, height: size.height },
            _ => InputEvent::Other,
        }
    }
}
