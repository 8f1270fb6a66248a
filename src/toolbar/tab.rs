use super::popup::Popup;
use super::{OpenTabSlot, Toolbar};
use crate::editor::EditorContext;
use crate::geometry::Shape;
use crate::ui::{
    Alignment, ColorRect, ElementId, ElementTree, InputUpdateArgs, Label, MouseEvent, MouseEventKind,
    SizeConstraints, Style, Widget,
};
use egui::Color32;
use smallvec::SmallVec;
use winit::event::MouseButton;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupCommand {
    None,
    Show,
    Hide,
}

/// Shown/hidden state of a tab's popup plus the one-tick hide arm.
///
/// A pointer found outside the hover region arms the hide, and the next input update hides the
/// popup wherever the pointer is by then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopupVisibility {
    shown: bool,
    hide_armed: bool,
}

impl PopupVisibility {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn is_hide_armed(&self) -> bool {
        self.hide_armed
    }

    pub fn on_press(&self, button: MouseButton) -> PopupCommand {
        if button == MouseButton::Left {
            PopupCommand::Show
        } else {
            PopupCommand::None
        }
    }

    /// Sliding onto a tab while a sibling's popup is open moves the popup over.
    pub fn on_mouse_entry(&self, open: Option<ElementId>, this: ElementId) -> PopupCommand {
        match open {
            Some(open) if open != this => PopupCommand::Show,
            _ => PopupCommand::None,
        }
    }

    pub fn on_input_update(&mut self, hovered: bool) -> PopupCommand {
        if !self.shown {
            return PopupCommand::None;
        }
        match (self.hide_armed, hovered) {
            (true, _) => PopupCommand::Hide,
            (false, false) => {
                self.hide_armed = true;
                PopupCommand::None
            }
            (false, true) => PopupCommand::None,
        }
    }

    pub fn mark_shown(&mut self) {
        self.shown = true;
        self.hide_armed = false;
    }

    pub fn mark_hidden(&mut self) {
        self.shown = false;
        self.hide_armed = false;
    }
}

/// Toolbar button that opens a popup of options.
pub struct Tab {
    label: String,
    slot: OpenTabSlot,
    visibility: PopupVisibility,
    popup: ElementId,
    background: ElementId,
    text: ElementId,
    held: SmallVec<[MouseButton; 4]>,
    hover_tolerance_px: f32,
}

impl Tab {
    /// Adds a tab to `toolbar`; `setup_options` fills the popup, usually through
    /// [`Popup::add_option`]. Returns `None` when `toolbar` is not a toolbar.
    pub fn spawn(
        tree: &mut ElementTree,
        toolbar: ElementId,
        label: &str,
        ctx: &EditorContext,
        setup_options: impl FnOnce(&mut ElementTree, ElementId),
    ) -> Option<ElementId> {
        let slot = tree.widget::<Toolbar>(toolbar)?.open_slot().clone();
        let metrics = ctx.text_metrics();
        let id = tree.spawn(toolbar, "tab", Shape::new(0.5, 0.5, 0.5, 0.5));
        let popup = Popup::spawn(tree, id, metrics);
        let background = tree.spawn_widget(id, "tab_background", Shape::IDENTITY, ColorRect::new(Style::FOREGROUND_WEAK));
        let text = tree.spawn_widget(
            id,
            "tab_text",
            Shape::new(0.5, 0.5, 0.5, 0.5),
            Label::new(label)
                .with_color(Style::TINT)
                .with_alignment(Alignment::Middle, Alignment::Middle)
                .with_metrics(metrics),
        );
        tree.set_widget(
            id,
            Tab {
                label: label.to_string(),
                slot,
                visibility: PopupVisibility::default(),
                popup,
                background,
                text,
                held: SmallVec::new(),
                hover_tolerance_px: ctx.config().toolbar.hover_tolerance_px,
            },
        );
        setup_options(tree, popup);
        tree.with_widget::<Toolbar, _>(toolbar, |bar, tree| bar.register_tab(tree, id));
        Some(id)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn popup(&self) -> ElementId {
        self.popup
    }

    pub fn background_element(&self) -> ElementId {
        self.background
    }

    pub fn text_element(&self) -> ElementId {
        self.text
    }

    pub fn visibility(&self) -> PopupVisibility {
        self.visibility
    }

    pub fn is_shown(&self) -> bool {
        self.visibility.is_shown()
    }

    pub fn show_options(&mut self, tree: &mut ElementTree, id: ElementId) {
        if let Some(open) = self.slot.get().filter(|open| *open != id) {
            tree.with_widget::<Tab, _>(open, |other, tree| other.hide_options(tree, open));
        }
        let anchor = tree.last_global_shape(id).map_or(glam::Vec2::ZERO, |shape| shape.min);
        let popup = self.popup;
        tree.with_widget::<Popup, _>(popup, |widget, tree| widget.show(tree, popup, anchor));
        self.slot.set(id);
        self.visibility.mark_shown();
    }

    pub fn hide_options(&mut self, tree: &mut ElementTree, id: ElementId) {
        self.slot.clear_if(id);
        let popup = self.popup;
        tree.with_widget::<Popup, _>(popup, |widget, tree| widget.hide(tree, popup));
        self.visibility.mark_hidden();
    }

    fn hovered(&self, tree: &ElementTree, id: ElementId, args: &InputUpdateArgs) -> bool {
        let pointer = args.mouse_position();
        let over_popup = tree.widget::<Popup>(self.popup).is_some_and(|popup| popup.hovered(tree, self.popup, pointer));
        if over_popup {
            return true;
        }
        let Some(shape) = tree.last_global_shape(id) else {
            return false;
        };
        if shape.contains_inclusive(pointer) {
            return true;
        }
        let diagonal = args.screen_size.length();
        diagonal > 0.0 && shape.distance_to_nearest_edge(pointer) * diagonal < self.hover_tolerance_px
    }

    fn set_look(&self, tree: &mut ElementTree, background: Color32, text: Color32) {
        if let Some(rect) = tree.widget_mut::<ColorRect>(self.background) {
            rect.color = background;
        }
        if let Some(label) = tree.widget_mut::<Label>(self.text) {
            label.color = text;
        }
    }

    fn apply(&mut self, tree: &mut ElementTree, id: ElementId, command: PopupCommand) {
        match command {
            PopupCommand::Show => self.show_options(tree, id),
            PopupCommand::Hide => self.hide_options(tree, id),
            PopupCommand::None => {}
        }
    }
}

impl Widget for Tab {
    fn size_constraints(&self, tree: &ElementTree, _id: ElementId) -> Option<SizeConstraints> {
        let mut constraints = tree.last_size_constraints(self.text)?;
        constraints.grow_x = Alignment::Max;
        Some(constraints)
    }

    fn input_update(&mut self, tree: &mut ElementTree, id: ElementId, args: &InputUpdateArgs) {
        if !self.visibility.is_shown() {
            return;
        }
        let hovered = self.hovered(tree, id, args);
        let command = self.visibility.on_input_update(hovered);
        self.apply(tree, id, command);
    }

    fn handle_mouse_event(&mut self, tree: &mut ElementTree, id: ElementId, event: &MouseEvent) {
        match event.kind {
            MouseEventKind::Pressed(button) => {
                if !self.held.contains(&button) {
                    self.held.push(button);
                }
                self.set_look(tree, Style::TINT, Style::FOREGROUND_STRONG);
                let command = self.visibility.on_press(button);
                self.apply(tree, id, command);
            }
            MouseEventKind::Released(button) => {
                let was_held = !self.held.is_empty();
                self.held.retain(|held| *held != button);
                if was_held && self.held.is_empty() {
                    self.set_look(tree, Style::FOREGROUND_STRONG, Style::TINT);
                }
            }
            MouseEventKind::Entered => {
                self.set_look(tree, Style::FOREGROUND_STRONG, Style::TINT);
                let command = self.visibility.on_mouse_entry(self.slot.get(), id);
                self.apply(tree, id, command);
            }
            MouseEventKind::Exited => self.set_look(tree, Style::FOREGROUND_WEAK, Style::TINT),
            MouseEventKind::Moved => {}
        }
    }

    fn on_enable(&mut self, tree: &mut ElementTree, _id: ElementId) {
        self.set_look(tree, Style::FOREGROUND_WEAK, Style::TINT);
    }

    fn on_disable(&mut self, tree: &mut ElementTree, _id: ElementId) {
        self.held.clear();
        self.set_look(tree, Style::BACKGROUND_WEAK, Style::FOREGROUND_STRONG);
    }

    fn on_destroyed(&mut self, _tree: &mut ElementTree, id: ElementId) {
        self.slot.clear_if(id);
    }

    fn describe(&self) -> Option<String> {
        let state = if self.visibility.is_shown() { "open" } else { "closed" };
        Some(format!("{:?} {state}", self.label))
    }
}
