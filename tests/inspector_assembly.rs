use bevy_reflect::{PartialReflect, Reflect};
use glam::Vec2;
use kestrel_inspector::inspector::{InspectorName, InspectorWindow, ValueEditor};
use kestrel_inspector::reflect::{Base, MemberGroup, TypeKey};
use kestrel_inspector::ui::{ElementId, ElementTree, FrameUpdateArgs, Label};
use kestrel_inspector::{EditorContext, InspectorError};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Reflect)]
struct Actor {
    name: String,
    enabled: bool,
}

#[derive(Reflect)]
struct Body {
    #[reflect(@Base)]
    actor: Actor,
    mass: f32,
    velocity: Vec2,
    layer: i32,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            actor: Actor { name: "crate".to_string(), enabled: true },
            mass: 2.5,
            velocity: Vec2::new(1.0, -2.0),
            layer: 1,
        }
    }
}

#[derive(Reflect, Default)]
struct Mesh {
    label: String,
    bytes: Vec<u8>,
}

#[derive(Reflect)]
struct Tag;

fn setup() -> (ElementTree, EditorContext, Rc<RefCell<Body>>, Rc<RefCell<dyn Reflect>>) {
    let tree = ElementTree::new(Vec2::new(1280.0, 720.0));
    let body = Rc::new(RefCell::new(Body::default()));
    let target: Rc<RefCell<dyn Reflect>> = body.clone();
    (tree, EditorContext::default(), body, target)
}

fn value_of(tree: &ElementTree, window: ElementId, member: &str) -> ElementId {
    tree.widget::<InspectorWindow>(window)
        .and_then(|inspector| inspector.rows().find(|row| row.member.name == member).map(|row| row.value))
        .expect("row for member")
}

fn section_labels(tree: &ElementTree, window: ElementId) -> Vec<String> {
    let inspector = tree.widget::<InspectorWindow>(window).expect("window widget");
    inspector
        .sections()
        .iter()
        .map(|section| tree.widget::<Label>(section.label).expect("section label").text().to_string())
        .collect()
}

#[test]
fn groups_become_sections_and_rows_keep_order() {
    let (mut tree, ctx, _body, target) = setup();
    let root = tree.root();
    let window = InspectorWindow::spawn(&mut tree, root, &target, &ctx).expect("inspector builds");
    let inspector = tree.widget::<InspectorWindow>(window).expect("window widget");
    assert_eq!(inspector.title(), "Inspector - Body");
    assert_eq!(inspector.sections().len(), 2);
    assert_eq!(inspector.rows().count(), 5);

    let expected = [("Actor", vec!["name", "enabled"]), ("Body", vec!["mass", "velocity", "layer"])];
    for (section, (type_name, members)) in inspector.sections().iter().zip(expected.iter()) {
        assert_eq!(section.declaring_type.short_name(), *type_name);
        let names: Vec<_> = section.rows.iter().map(|row| row.member.name).collect();
        assert_eq!(&names, members);
        assert_eq!(tree.children(section.list).len(), section.rows.len());
        for row in &section.rows {
            assert_eq!(tree.children(row.row), [row.name, row.value]);
            let name = tree.widget::<InspectorName>(row.name).expect("name widget");
            let text = tree.widget::<Label>(name.text_element()).expect("name text");
            assert_eq!(text.text(), row.member.name);
            assert!(tree.widget::<ValueEditor>(row.value).is_some());
        }
    }
    assert_eq!(inspector.sections()[0].declaring_type, TypeKey::of::<Actor>());
    assert_eq!(section_labels(&tree, window), ["Actor", "Body"]);

    let mass = tree.widget::<ValueEditor>(value_of(&tree, window, "mass")).expect("mass editor");
    assert_eq!(mass.handler().label(), "number");
    assert_eq!(mass.display_text(), "2.500");
    let velocity = tree.widget::<ValueEditor>(value_of(&tree, window, "velocity")).expect("velocity editor");
    assert_eq!(velocity.display_text(), "(1.000, -2.000)");
    let layer = tree.widget::<ValueEditor>(value_of(&tree, window, "layer")).expect("layer editor");
    assert_eq!(layer.display_text(), "1");
}

#[test]
fn empty_groups_get_no_section() {
    let (mut tree, ctx, _body, target) = setup();
    let root = tree.root();
    let groups = ctx.public_members(target.borrow().as_partial_reflect());
    let mut padded = groups.to_vec();
    padded.insert(1, MemberGroup { declaring_type: TypeKey::of::<Tag>(), members: Vec::new() });
    padded.push(MemberGroup { declaring_type: TypeKey::of::<Mesh>(), members: Vec::new() });

    let window =
        InspectorWindow::spawn_with_groups(&mut tree, root, &target, &padded, &ctx).expect("inspector builds");
    let inspector = tree.widget::<InspectorWindow>(window).expect("window widget");
    assert_eq!(inspector.sections().len(), padded.len() - 2);
    assert_eq!(tree.children(inspector.content()).len(), 2 * inspector.sections().len(), "no orphan label or list");
    assert_eq!(section_labels(&tree, window), ["Actor", "Body"]);

    let only_empty = [MemberGroup { declaring_type: TypeKey::of::<Tag>(), members: Vec::new() }];
    let bare = InspectorWindow::spawn_with_groups(&mut tree, root, &target, &only_empty, &ctx).expect("empty window");
    let inspector = tree.widget::<InspectorWindow>(bare).expect("window widget");
    assert!(inspector.sections().is_empty());
    assert!(tree.children(inspector.content()).is_empty());
}

#[test]
fn missing_handler_aborts_and_cleans_up() {
    let mut tree = ElementTree::new(Vec2::new(1280.0, 720.0));
    let ctx = EditorContext::default();
    let root = tree.root();
    let before = tree.len();
    let mesh: Rc<RefCell<dyn Reflect>> = Rc::new(RefCell::new(Mesh::default()));
    let err = InspectorWindow::spawn(&mut tree, root, &mesh, &ctx).unwrap_err();
    assert!(matches!(err, InspectorError::UnsupportedMemberType { ref member, .. } if member == "bytes"));
    assert_eq!(tree.len(), before, "partial window is destroyed");
    assert!(tree.children(root).is_empty());
    assert_eq!(ctx.edits().queue_changed().listener_count(), 0);
}

#[test]
fn commits_write_through_and_notify() {
    let (mut tree, ctx, body, target) = setup();
    let root = tree.root();
    let window = InspectorWindow::spawn(&mut tree, root, &target, &ctx).expect("inspector builds");
    let changes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&changes);
    tree.widget::<InspectorWindow>(window)
        .expect("window widget")
        .object_changed()
        .subscribe(move || counter.set(counter.get() + 1));

    let mass = value_of(&tree, window, "mass");
    let result = tree.with_widget::<ValueEditor, _>(mass, |editor, _| editor.commit(&4.0f32));
    assert_eq!(result, Some(Ok(())));
    assert_eq!(body.borrow().mass, 4.0);
    assert_eq!(changes.get(), 1);
    let record = ctx.edits().last().expect("edit recorded");
    assert_eq!(record.to_string(), "Body.mass: 2.500 -> 4.000");
    assert_eq!(record.previous.try_downcast_ref::<f32>(), Some(&2.5));
    assert_eq!(record.value.try_downcast_ref::<f32>(), Some(&4.0));

    let rejected = tree.with_widget::<ValueEditor, _>(mass, |editor, _| editor.commit(&true));
    assert!(matches!(rejected, Some(Err(InspectorError::ValueKindMismatch { .. }))));
    assert_eq!(ctx.edits().len(), 1);
    assert_eq!(changes.get(), 1);

    let layer = value_of(&tree, window, "layer");
    let rounded = tree.with_widget::<ValueEditor, _>(layer, |editor, _| editor.commit_number(2.6));
    assert_eq!(rounded, Some(Ok(())));
    assert_eq!(body.borrow().layer, 3);

    let name = value_of(&tree, window, "name");
    let renamed = tree.with_widget::<ValueEditor, _>(name, |editor, _| editor.commit(&"barrel".to_string()));
    assert_eq!(renamed, Some(Ok(())));
    assert_eq!(body.borrow().actor.name, "barrel", "base members write into the embedded base");
    assert_eq!(ctx.edits().drain().len(), 3);
    assert_eq!(changes.get(), 4, "draining also raises the change signal");
}

#[test]
fn value_editors_follow_the_live_object() {
    let (mut tree, ctx, body, target) = setup();
    let root = tree.root();
    let window = InspectorWindow::spawn(&mut tree, root, &target, &ctx).expect("inspector builds");
    let name = value_of(&tree, window, "name");

    body.borrow_mut().actor.name = "barrel".to_string();
    tree.dispatch_frame_update(&FrameUpdateArgs { delta_time: 0.016 });
    let editor = tree.widget::<ValueEditor>(name).expect("name editor");
    assert_eq!(editor.display_text(), "barrel");

    drop(body);
    drop(target);
    tree.dispatch_frame_update(&FrameUpdateArgs { delta_time: 0.016 });
    assert_eq!(tree.widget::<ValueEditor>(name).expect("name editor").display_text(), "<dropped>");
    let result = tree.with_widget::<ValueEditor, _>(name, |editor, _| editor.commit(&"x".to_string()));
    assert!(matches!(result, Some(Err(InspectorError::TargetDropped { .. }))));
}

#[test]
fn destroying_window_unsubscribes_exactly_once() {
    let (mut tree, ctx, _body, target) = setup();
    let root = tree.root();
    let first = InspectorWindow::spawn(&mut tree, root, &target, &ctx).expect("first inspector");
    let second = InspectorWindow::spawn(&mut tree, root, &target, &ctx).expect("second inspector");
    let signal = ctx.edits().queue_changed();
    assert_eq!(signal.listener_count(), 2);

    let torn_down = tree.widget_mut::<InspectorWindow>(first).map(|window| (window.teardown(), window.teardown()));
    assert_eq!(torn_down, Some((true, false)));
    assert_eq!(signal.listener_count(), 1);

    assert!(tree.destroy(first));
    assert_eq!(signal.listener_count(), 1, "second window keeps its subscription");
    assert!(tree.destroy(second));
    assert_eq!(signal.listener_count(), 0);
    assert!(!tree.destroy(second));
    assert_eq!(signal.listener_count(), 0);
}

#[test]
fn member_groups_are_cached_per_type() {
    let (_tree, ctx, _body, target) = setup();
    let first = ctx.public_members(target.borrow().as_partial_reflect());
    let other = Body::default();
    let second = ctx.public_members(&other);
    assert!(Rc::ptr_eq(&first, &second));
    let total: usize = first.iter().map(|group| group.members.len()).sum();
    assert_eq!(total, 5);
}

#[test]
fn enum_members_switch_by_variant_name() {
    #[derive(Reflect, Debug, PartialEq)]
    enum Wrap {
        Clamp,
        Repeat,
        Tiled(u8),
    }

    #[derive(Reflect)]
    struct Sampler {
        wrap: Wrap,
    }

    let mut tree = ElementTree::new(Vec2::new(1280.0, 720.0));
    let mut handlers = kestrel_inspector::inspector::HandlerRegistry::with_builtin_handlers();
    assert!(handlers.register_enum::<Wrap>());
    let ctx = EditorContext::with_handlers(Default::default(), handlers);
    let sampler = Rc::new(RefCell::new(Sampler { wrap: Wrap::Clamp }));
    let target: Rc<RefCell<dyn Reflect>> = sampler.clone();
    let root = tree.root();
    let window = InspectorWindow::spawn(&mut tree, root, &target, &ctx).expect("inspector builds");
    let wrap = value_of(&tree, window, "wrap");

    let variants = tree.widget::<ValueEditor>(wrap).map(ValueEditor::variants);
    assert_eq!(variants, Some(vec!["Clamp", "Repeat", "Tiled"]));
    let switched = tree.with_widget::<ValueEditor, _>(wrap, |editor, _| editor.commit_variant("Repeat"));
    assert_eq!(switched, Some(Ok(())));
    assert_eq!(sampler.borrow().wrap, Wrap::Repeat);
    assert_eq!(tree.widget::<ValueEditor>(wrap).map(ValueEditor::display_text), Some("Repeat"));

    let unknown = tree.with_widget::<ValueEditor, _>(wrap, |editor, _| editor.commit_variant("Mirror"));
    assert!(matches!(unknown, Some(Err(InspectorError::UnknownEnumVariant { .. }))));
    let tuple = tree.with_widget::<ValueEditor, _>(wrap, |editor, _| editor.commit_variant("Tiled"));
    assert!(matches!(tuple, Some(Err(InspectorError::UnknownEnumVariant { .. }))));
    assert_eq!(sampler.borrow().wrap, Wrap::Repeat);
}
