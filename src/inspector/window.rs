use super::name::InspectorName;
use crate::editor::EditorContext;
use crate::error::InspectorError;
use crate::events::{EditQueue, Signal, SubscriptionId};
use crate::geometry::Shape;
use crate::reflect::{MemberDescriptor, MemberGroup, TypeKey};
use crate::ui::{
    Alignment, ColorRect, ElementId, ElementTree, Label, Layout, SizeConstraints, Spacer, Style, Widget,
};
use bevy_reflect::{DynamicTypePath, PartialReflect, Reflect};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, PartialEq)]
pub struct InspectorRow {
    pub member: MemberDescriptor,
    pub row: ElementId,
    pub name: ElementId,
    pub value: ElementId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InspectorSection {
    pub declaring_type: TypeKey,
    pub label: ElementId,
    pub list: ElementId,
    pub rows: Vec<InspectorRow>,
}

/// Floating window listing every public member of an object, grouped by declaring type.
pub struct InspectorWindow {
    target: Weak<RefCell<dyn Reflect>>,
    title: String,
    header: ElementId,
    content: ElementId,
    sections: Vec<InspectorSection>,
    edits: Rc<EditQueue>,
    subscription: Option<SubscriptionId>,
    object_changed: Signal,
}

impl InspectorWindow {
    /// Builds the window under `parent`. A member without a registered handler fails the whole
    /// window; nothing is left in the tree in that case.
    pub fn spawn(
        tree: &mut ElementTree,
        parent: ElementId,
        target: &Rc<RefCell<dyn Reflect>>,
        ctx: &EditorContext,
    ) -> Result<ElementId, InspectorError> {
        let groups = {
            let object = target.borrow();
            ctx.public_members(object.as_partial_reflect())
        };
        Self::spawn_with_groups(tree, parent, target, &groups, ctx)
    }

    /// Same as [`InspectorWindow::spawn`] over member groups the caller already resolved. Empty
    /// groups get no section.
    pub fn spawn_with_groups(
        tree: &mut ElementTree,
        parent: ElementId,
        target: &Rc<RefCell<dyn Reflect>>,
        groups: &[MemberGroup],
        ctx: &EditorContext,
    ) -> Result<ElementId, InspectorError> {
        let object_name = target.borrow().reflect_short_type_path().to_string();
        let title = format!("Inspector - {object_name}");
        let id = tree.spawn(parent, "inspector_window", ctx.config().inspector.window_shape());
        tree.set_layout(id, Layout::Vertical { start_at_max: true });

        let header = spawn_header(tree, id, &title, ctx);
        let content = tree.spawn(id, "content", Shape::IDENTITY);
        tree.set_layout(content, Layout::Vertical { start_at_max: true });

        let object_changed = Signal::new();
        let relay = object_changed.clone();
        let subscription = ctx.edits().queue_changed().subscribe(move || relay.emit());
        tree.set_widget(
            id,
            InspectorWindow {
                target: Rc::downgrade(target),
                title,
                header,
                content,
                sections: Vec::new(),
                edits: Rc::clone(ctx.edits()),
                subscription: Some(subscription),
                object_changed,
            },
        );

        match build_sections(tree, id, content, target, groups, ctx) {
            Ok(sections) => {
                tracing::debug!(
                    object = %object_name,
                    sections = sections.len(),
                    "inspector window assembled"
                );
                if let Some(window) = tree.widget_mut::<InspectorWindow>(id) {
                    window.sections = sections;
                }
                Ok(id)
            }
            Err(err) => {
                tracing::warn!("inspector for {object_name} could not be built: {err}");
                tree.destroy(id);
                Err(err)
            }
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn header(&self) -> ElementId {
        self.header
    }

    pub fn content(&self) -> ElementId {
        self.content
    }

    pub fn sections(&self) -> &[InspectorSection] {
        &self.sections
    }

    pub fn rows(&self) -> impl Iterator<Item = &InspectorRow> {
        self.sections.iter().flat_map(|section| section.rows.iter())
    }

    pub fn target(&self) -> Option<Rc<RefCell<dyn Reflect>>> {
        self.target.upgrade()
    }

    /// Raised whenever the edit queue changes while the window is alive.
    pub fn object_changed(&self) -> &Signal {
        &self.object_changed
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Drops the edit queue subscription. Safe to call repeatedly.
    pub fn teardown(&mut self) -> bool {
        match self.subscription.take() {
            Some(subscription) => self.edits.queue_changed().unsubscribe(subscription),
            None => false,
        }
    }
}

impl Widget for InspectorWindow {
    fn size_constraints(&self, _tree: &ElementTree, _id: ElementId) -> Option<SizeConstraints> {
        Some(SizeConstraints::new(Alignment::Middle, Alignment::Middle, 100, 100))
    }

    fn on_destroyed(&mut self, _tree: &mut ElementTree, _id: ElementId) {
        self.teardown();
    }

    fn describe(&self) -> Option<String> {
        Some(format!("{:?}", self.title))
    }
}

fn spawn_header(tree: &mut ElementTree, window: ElementId, title: &str, ctx: &EditorContext) -> ElementId {
    let header = tree.spawn(window, "header", Shape::new(0.0, 0.9, 1.0, 1.0));
    tree.spawn_widget(header, "header_background", Shape::IDENTITY, ColorRect::new(Style::BACKGROUND_STRONG));
    tree.spawn_widget(
        header,
        "header_title",
        Shape::IDENTITY,
        Label::new(title).with_color(Style::FOREGROUND_STRONG).with_metrics(ctx.text_metrics()),
    );
    header
}

fn build_sections(
    tree: &mut ElementTree,
    window: ElementId,
    content: ElementId,
    target: &Rc<RefCell<dyn Reflect>>,
    groups: &[MemberGroup],
    ctx: &EditorContext,
) -> Result<Vec<InspectorSection>, InspectorError> {
    let mut sections = Vec::with_capacity(groups.len());
    for group in groups.iter() {
        if group.is_empty() {
            tracing::debug!(declaring = group.declaring_type.short_name(), "skipping empty member group");
            continue;
        }
        let label = tree.spawn_widget(
            content,
            "declaring_type",
            Shape::new(0.5, 0.5, 0.5, 0.5),
            Label::new(group.declaring_type.short_name())
                .with_color(Style::TINT)
                .with_metrics(ctx.text_metrics()),
        );
        let list = tree.spawn_widget(
            content,
            "member_list",
            Shape::new(0.0, 1.0, 1.0, 1.0),
            Spacer { min_width: 0, min_height: ctx.config().inspector.min_list_height },
        );
        tree.set_layout(list, Layout::Vertical { start_at_max: true });

        let mut rows = Vec::with_capacity(group.members.len());
        for member in &group.members {
            let handler = ctx.handlers().handler_for(member)?;
            let row = tree.spawn(list, "row", Shape::IDENTITY);
            tree.set_layout(row, Layout::Horizontal { start_at_max: false });
            let name = InspectorName::spawn(tree, row, member.name, ctx);
            let value = handler.create_inspector_element(tree, row, member, target, window, ctx);
            rows.push(InspectorRow { member: member.clone(), row, name, value });
        }
        sections.push(InspectorSection { declaring_type: group.declaring_type, label, list, rows });
    }
    Ok(sections)
}
