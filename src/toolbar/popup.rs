use crate::geometry::Shape;
use crate::ui::{
    Alignment, ColorRect, ElementId, ElementTree, Label, MouseEvent, MouseEventKind, Style, TextMetrics, Widget,
};
use glam::Vec2;
use winit::event::MouseButton;

const PADDING_PX: f32 = 8.0;

/// Drop-down list hanging below its anchor. Hidden popups are invisible elements, so they receive no
/// callbacks.
pub struct Popup {
    shown: bool,
    anchor: Vec2,
    options: Vec<ElementId>,
    option_widths_px: Vec<f32>,
    metrics: TextMetrics,
}

impl Popup {
    pub fn spawn(tree: &mut ElementTree, parent: ElementId, metrics: TextMetrics) -> ElementId {
        let id = tree.spawn(parent, "popup", Shape::ZERO);
        tree.spawn_widget(id, "popup_background", Shape::IDENTITY, ColorRect::new(Style::BACKGROUND_WEAK));
        tree.set_widget(
            id,
            Popup { shown: false, anchor: Vec2::ZERO, options: Vec::new(), option_widths_px: Vec::new(), metrics },
        );
        tree.set_visible(id, false);
        id
    }

    /// Appends a selectable row. Returns `None` when `popup` is not a popup.
    pub fn add_option(
        tree: &mut ElementTree,
        popup: ElementId,
        label: &str,
        on_select: impl FnMut(&mut ElementTree) + 'static,
    ) -> Option<ElementId> {
        let metrics = tree.widget::<Popup>(popup)?.metrics;
        let id = tree.spawn(popup, "option", Shape::IDENTITY);
        let text = tree.spawn_widget(
            id,
            "option_text",
            Shape::new(0.0, 0.0, 0.0, 1.0),
            Label::new(label)
                .with_color(Style::FOREGROUND_STRONG)
                .with_alignment(Alignment::Min, Alignment::Middle)
                .with_metrics(metrics),
        );
        tree.set_widget(id, PopupOption { label: label.to_string(), text, on_select: Box::new(on_select) });

        let popup_widget = tree.widget_mut::<Popup>(popup)?;
        popup_widget.options.push(id);
        popup_widget.option_widths_px.push(metrics.measure(label, 1.0).x);
        let rows = popup_widget.options.clone();
        let count = rows.len() as f32;
        for (index, row) in rows.into_iter().enumerate() {
            let index = index as f32;
            tree.set_local_shape(row, Shape::new(0.0, 1.0 - (index + 1.0) / count, 1.0, 1.0 - index / count));
        }
        Some(id)
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn options(&self) -> &[ElementId] {
        &self.options
    }

    /// Reveals the popup with its top-left corner at `anchor`.
    pub fn show(&mut self, tree: &mut ElementTree, id: ElementId, anchor: Vec2) {
        self.shown = true;
        self.anchor = anchor;
        tree.set_visible(id, true);
        // Placed immediately so hover tests before the next layout pass see the real box.
        tree.set_last_global_shape(id, self.placement(anchor, tree.screen_size()));
        tracing::debug!(popup = ?id, options = self.options.len(), "popup shown");
    }

    pub fn hide(&mut self, tree: &mut ElementTree, id: ElementId) {
        if self.shown {
            tracing::debug!(popup = ?id, "popup hidden");
        }
        self.shown = false;
        tree.set_visible(id, false);
    }

    /// Whether `pointer` (in `[-1, 1]` space) is over the shown popup.
    pub fn hovered(&self, tree: &ElementTree, id: ElementId, pointer: Vec2) -> bool {
        self.shown && tree.last_global_shape(id).is_some_and(|shape| shape.contains_inclusive(pointer))
    }

    fn placement(&self, anchor: Vec2, screen_size: Vec2) -> Shape {
        if screen_size.x <= 0.0 || screen_size.y <= 0.0 {
            return Shape::from_min_max(anchor, anchor);
        }
        let widest = self.option_widths_px.iter().copied().fold(0.0f32, f32::max);
        let rows = self.options.len().max(1) as f32;
        let size_px = Vec2::new(widest + PADDING_PX * 2.0, rows * self.metrics.line_height_px);
        let size = size_px / screen_size * 2.0;
        Shape::new(anchor.x, anchor.y - size.y, anchor.x + size.x, anchor.y)
    }
}

impl Widget for Popup {
    fn arrange(&self, _mapped: Shape, screen_size: Vec2) -> Option<Shape> {
        Some(self.placement(self.anchor, screen_size))
    }

    fn describe(&self) -> Option<String> {
        Some(format!("{} options", self.options.len()))
    }
}

/// One selectable row of a [`Popup`]. A left press runs its callback.
pub struct PopupOption {
    label: String,
    text: ElementId,
    on_select: Box<dyn FnMut(&mut ElementTree)>,
}

impl PopupOption {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text_element(&self) -> ElementId {
        self.text
    }

    pub fn select(&mut self, tree: &mut ElementTree) {
        tracing::debug!(option = %self.label, "popup option selected");
        (self.on_select)(tree);
    }
}

impl Widget for PopupOption {
    fn handle_mouse_event(&mut self, tree: &mut ElementTree, _id: ElementId, event: &MouseEvent) {
        match event.kind {
            MouseEventKind::Pressed(MouseButton::Left) => self.select(tree),
            MouseEventKind::Entered => self.set_text_color(tree, Style::TINT),
            MouseEventKind::Exited => self.set_text_color(tree, Style::FOREGROUND_STRONG),
            _ => {}
        }
    }

    fn describe(&self) -> Option<String> {
        Some(format!("{:?}", self.label))
    }
}

impl PopupOption {
    fn set_text_color(&self, tree: &mut ElementTree, color: egui::Color32) {
        if let Some(label) = tree.widget_mut::<Label>(self.text) {
            label.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn shown_popup_hangs_below_anchor() {
        let mut tree = ElementTree::new(Vec2::new(100.0, 100.0));
        let root = tree.root();
        let popup = Popup::spawn(&mut tree, root, TextMetrics { glyph_advance_px: 8.0, line_height_px: 10.0 });
        Popup::add_option(&mut tree, popup, "open", |_| {});
        Popup::add_option(&mut tree, popup, "save", |_| {});
        assert!(!tree.is_visible(popup));

        tree.with_widget::<Popup, _>(popup, |widget, tree| widget.show(tree, popup, Vec2::new(-0.5, 0.5)));
        assert!(tree.is_visible(popup));
        let shape = tree.last_global_shape(popup).expect("popup shape");
        assert!((shape.max.y - 0.5).abs() < 1e-6);
        assert!((shape.min.y - 0.1).abs() < 1e-6);
        assert!((shape.size().x - 0.96).abs() < 1e-6);

        let widget = tree.widget::<Popup>(popup).expect("popup");
        assert!(widget.hovered(&tree, popup, Vec2::new(-0.4, 0.3)));
        assert!(!widget.hovered(&tree, popup, Vec2::new(-0.4, 0.6)));
    }

    #[test]
    fn left_press_on_option_runs_callback() {
        let mut tree = ElementTree::new(Vec2::new(100.0, 100.0));
        let root = tree.root();
        let popup = Popup::spawn(&mut tree, root, TextMetrics::default());
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        Popup::add_option(&mut tree, popup, "reset", move |_| counter.set(counter.get() + 1));
        tree.with_widget::<Popup, _>(popup, |widget, tree| widget.show(tree, popup, Vec2::new(-1.0, 1.0)));
        tree.layout();

        let option = tree.widget::<Popup>(popup).expect("popup").options()[0];
        let center = tree.last_global_shape(option).expect("option").center();
        tree.route_mouse_event(MouseEventKind::Pressed(MouseButton::Right), center);
        tree.route_mouse_event(MouseEventKind::Pressed(MouseButton::Left), center);
        assert_eq!(hits.get(), 1);
    }
}
