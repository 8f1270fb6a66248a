//! Toolbar tabs with drop-down popups.
//!
//! A [`Toolbar`] owns the single "currently open" slot shared by its tabs, so at most one popup is
//! shown at a time. Tabs are laid out left to right in creation order.

mod popup;
mod tab;

pub use popup::{Popup, PopupOption};
pub use tab::{PopupCommand, PopupVisibility, Tab};

use crate::geometry::Shape;
use crate::ui::{ColorRect, ElementId, ElementTree, Style, Widget};
use std::cell::Cell;
use std::rc::Rc;

/// Which tab of a toolbar currently shows its popup. Clones share the slot.
#[derive(Debug, Clone, Default)]
pub struct OpenTabSlot(Rc<Cell<Option<ElementId>>>);

impl OpenTabSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<ElementId> {
        self.0.get()
    }

    pub fn set(&self, tab: ElementId) {
        self.0.set(Some(tab));
    }

    /// Empties the slot only if `tab` is the one recorded.
    pub fn clear_if(&self, tab: ElementId) -> bool {
        if self.0.get() == Some(tab) {
            self.0.set(None);
            true
        } else {
            false
        }
    }

    pub fn is_open(&self, tab: ElementId) -> bool {
        self.0.get() == Some(tab)
    }
}

pub struct Toolbar {
    open: OpenTabSlot,
    tabs: Vec<ElementId>,
}

impl Toolbar {
    pub const DEFAULT_SHAPE: Shape = Shape::new(0.0, 0.95, 1.0, 1.0);

    pub fn spawn(tree: &mut ElementTree, parent: ElementId) -> ElementId {
        Self::spawn_with_shape(tree, parent, Self::DEFAULT_SHAPE)
    }

    pub fn spawn_with_shape(tree: &mut ElementTree, parent: ElementId, local: Shape) -> ElementId {
        let id = tree.spawn(parent, "toolbar", local);
        tree.spawn_widget(id, "toolbar_background", Shape::IDENTITY, ColorRect::new(Style::BACKGROUND_STRONG));
        tree.set_widget(id, Toolbar { open: OpenTabSlot::new(), tabs: Vec::new() });
        id
    }

    pub fn open_tab(&self) -> Option<ElementId> {
        self.open.get()
    }

    pub fn open_slot(&self) -> &OpenTabSlot {
        &self.open
    }

    pub fn tabs(&self) -> &[ElementId] {
        &self.tabs
    }

    pub(crate) fn register_tab(&mut self, tree: &mut ElementTree, tab: ElementId) {
        self.tabs.retain(|existing| tree.contains(*existing));
        self.tabs.push(tab);
        let count = self.tabs.len() as f32;
        for (index, tab) in self.tabs.iter().enumerate() {
            let index = index as f32;
            tree.set_local_shape(*tab, Shape::new(index / count, 0.0, (index + 1.0) / count, 1.0));
        }
    }
}

impl Widget for Toolbar {
    fn on_destroyed(&mut self, _tree: &mut ElementTree, _id: ElementId) {
        self.open.0.set(None);
    }

    fn describe(&self) -> Option<String> {
        Some(format!("{} tabs", self.tabs.len()))
    }
}
