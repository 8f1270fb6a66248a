use anyhow::{anyhow, Context, Result};
use bevy_reflect::Reflect;
use glam::{Vec2, Vec3};
use kestrel_inspector::cli::CliOverrides;
use kestrel_inspector::config::EditorUiConfig;
use kestrel_inspector::input::InputEvent;
use kestrel_inspector::inspector::{HandlerRegistry, ValueEditor};
use kestrel_inspector::reflect::Base;
use kestrel_inspector::toolbar::Popup;
use kestrel_inspector::{EditorContext, EditorUi, InspectorWindow, Tab, Toolbar};
use std::cell::RefCell;
use std::process;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;
use winit::event::MouseButton;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Err(err) = run() {
        eprintln!("error: {err:?}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliOverrides::parse_from_env()?;
    let mut config = match cli.config_path() {
        Some(path) => EditorUiConfig::load(path)?,
        None => EditorUiConfig::default(),
    };
    config.apply_overrides(&cli.config_overrides());
    let screen = Vec2::new(config.screen.width as f32, config.screen.height as f32);

    let mut handlers = HandlerRegistry::with_builtin_handlers();
    handlers.register_enum::<BlendMode>();
    let mut ui = EditorUi::with_context(EditorContext::with_handlers(config, handlers));

    let sprite: Rc<RefCell<dyn Reflect>> = Rc::new(RefCell::new(Sprite::default()));
    let (window, toolbar) = {
        let (tree, ctx) = ui.parts_mut();
        let root = tree.root();
        let toolbar = Toolbar::spawn(tree, root);
        for (label, options) in [("File", &["New", "Open", "Save"][..]), ("View", &["Inspector", "Reset layout"][..])] {
            Tab::spawn(tree, toolbar, label, ctx, |tree, popup| {
                for option in options {
                    let name = option.to_string();
                    Popup::add_option(tree, popup, option, move |_| tracing::info!(option = %name, "menu option"));
                }
            })
            .ok_or_else(|| anyhow!("toolbar {toolbar:?} rejected tab '{label}'"))?;
        }
        let window = InspectorWindow::spawn(tree, root, &sprite, ctx).context("building sprite inspector")?;
        (window, toolbar)
    };

    let changes = Rc::new(RefCell::new(0u32));
    if let Some(inspector) = ui.tree().widget::<InspectorWindow>(window) {
        let counter = Rc::clone(&changes);
        inspector.object_changed().subscribe(move || *counter.borrow_mut() += 1);
    }

    let frames = cli.frames();
    let delta = cli.frame_delta();
    ui.frame_with_delta(delta);
    let first_tab = ui.tree().widget::<Toolbar>(toolbar).and_then(|bar| bar.tabs().first().copied());
    if let Some(tab) = first_tab.and_then(|tab| ui.tree().last_global_shape(tab)) {
        press_at(&mut ui, tab.center(), screen);
    }
    commit_sample_edit(&mut ui, window)?;
    for frame in 0..frames {
        // Sweep the cursor across the inspector window.
        let t = frame as f32 / frames.max(1) as f32;
        ui.push_input(InputEvent::CursorPos { x: screen.x * (0.4 + 0.2 * t), y: screen.y * 0.5 });
        ui.frame_with_delta(delta);
    }

    println!("{}", ui.tree().debug_dump());
    for record in ui.context().edits().drain() {
        println!("edit: {record}");
    }
    println!("object_changed raised {} times", changes.borrow());
    Ok(())
}

fn press_at(ui: &mut EditorUi, position: Vec2, screen: Vec2) {
    let pixel = (position + Vec2::ONE) * 0.5;
    ui.push_input(InputEvent::CursorPos { x: pixel.x * screen.x, y: (1.0 - pixel.y) * screen.y });
    ui.push_input(InputEvent::MouseButton { button: MouseButton::Left, pressed: true });
    ui.push_input(InputEvent::MouseButton { button: MouseButton::Left, pressed: false });
}

fn commit_sample_edit(ui: &mut EditorUi, window: kestrel_inspector::ui::ElementId) -> Result<()> {
    let row_value = |ui: &EditorUi, member: &str| {
        ui.tree()
            .widget::<InspectorWindow>(window)
            .and_then(|inspector| inspector.rows().find(|row| row.member.name == member).map(|row| row.value))
            .ok_or_else(|| anyhow!("inspector has no {member} row"))
    };
    let opacity = row_value(ui, "opacity")?;
    ui.tree_mut()
        .with_widget::<ValueEditor, _>(opacity, |editor, _| editor.commit(&0.5f32))
        .ok_or_else(|| anyhow!("opacity row is not a value editor"))??;
    let blend = row_value(ui, "blend")?;
    ui.tree_mut()
        .with_widget::<ValueEditor, _>(blend, |editor, _| editor.commit_variant("Additive"))
        .ok_or_else(|| anyhow!("blend row is not a value editor"))??;
    Ok(())
}

#[derive(Reflect)]
struct Node {
    name: String,
    position: Vec3,
    visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
enum BlendMode {
    Alpha,
    Additive,
    Multiply,
}

#[derive(Reflect)]
struct Sprite {
    #[reflect(@Base)]
    node: Node,
    atlas_region_identifier: String,
    pivot: Vec2,
    opacity: f32,
    layer: i32,
    blend: BlendMode,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            node: Node { name: "player".to_string(), position: Vec3::new(0.0, 1.5, 0.0), visible: true },
            atlas_region_identifier: "characters/player/idle_0".to_string(),
            pivot: Vec2::splat(0.5),
            opacity: 1.0,
            layer: 2,
            blend: BlendMode::Alpha,
        }
    }
}
