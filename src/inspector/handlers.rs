use crate::editor::EditorContext;
use crate::error::InspectorError;
use crate::events::{EditQueue, EditRecord};
use crate::geometry::Shape;
use crate::reflect::{member_mut, member_ref, MemberDescriptor, TypeKey};
use crate::ui::{Alignment, ElementId, ElementTree, FrameUpdateArgs, Label, Style, Widget};
use bevy_reflect::{
    DynamicEnum, DynamicTypePath, DynamicVariant, PartialReflect, Reflect, ReflectRef, TypeInfo, Typed,
    VariantInfo,
};
use glam::{Vec2, Vec3};
use std::any::TypeId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

/// Extension point for value kinds the built-in variants do not cover.
pub trait CustomHandler {
    fn create_inspector_element(
        &self,
        tree: &mut ElementTree,
        parent: ElementId,
        member: &MemberDescriptor,
        target: &Rc<RefCell<dyn Reflect>>,
        window: ElementId,
        ctx: &EditorContext,
    ) -> ElementId;
}

#[derive(Clone)]
pub enum MemberHandler {
    Numeric { integral: bool },
    Boolean,
    Text,
    /// Any reflected enum; variants come from the member's type info.
    Enum,
    Vector { axes: u8 },
    ObjectRef,
    Collection,
    Custom(Rc<dyn CustomHandler>),
}

impl fmt::Debug for MemberHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberHandler::Numeric { integral } => f.debug_struct("Numeric").field("integral", integral).finish(),
            MemberHandler::Vector { axes } => f.debug_struct("Vector").field("axes", axes).finish(),
            other => f.write_str(other.label()),
        }
    }
}

macro_rules! numeric_access {
    ($($ty:ty),* $(,)?) => {
        fn read_number(value: &dyn PartialReflect) -> Option<f64> {
            $(
                if let Some(number) = value.try_downcast_ref::<$ty>() {
                    return Some(*number as f64);
                }
            )*
            None
        }

        fn write_number(value: &mut dyn PartialReflect, number: f64, integral: bool) -> bool {
            let number = if integral { number.round() } else { number };
            $(
                if let Some(slot) = value.try_downcast_mut::<$ty>() {
                    *slot = number as $ty;
                    return true;
                }
            )*
            false
        }
    };
}

numeric_access!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl MemberHandler {
    pub fn label(&self) -> &'static str {
        match self {
            MemberHandler::Numeric { integral: true } => "integer",
            MemberHandler::Numeric { integral: false } => "number",
            MemberHandler::Boolean => "bool",
            MemberHandler::Text => "text",
            MemberHandler::Enum => "enum",
            MemberHandler::Vector { axes: 2 } => "vec2",
            MemberHandler::Vector { .. } => "vec3",
            MemberHandler::ObjectRef => "object",
            MemberHandler::Collection => "collection",
            MemberHandler::Custom(_) => "custom",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, MemberHandler::ObjectRef | MemberHandler::Collection)
    }

    pub fn create_inspector_element(
        &self,
        tree: &mut ElementTree,
        parent: ElementId,
        member: &MemberDescriptor,
        target: &Rc<RefCell<dyn Reflect>>,
        window: ElementId,
        ctx: &EditorContext,
    ) -> ElementId {
        match self {
            MemberHandler::Custom(custom) => {
                custom.create_inspector_element(tree, parent, member, target, window, ctx)
            }
            builtin => ValueEditor::spawn(tree, parent, builtin.clone(), member, target, window, ctx),
        }
    }

    /// Text shown in the value column for `value`.
    pub fn display(&self, value: &dyn PartialReflect) -> String {
        let shown = match self {
            MemberHandler::Numeric { integral } => read_number(value).map(|number| {
                if *integral {
                    format!("{number}")
                } else {
                    format!("{number:.3}")
                }
            }),
            MemberHandler::Boolean => value.try_downcast_ref::<bool>().map(|flag| flag.to_string()),
            MemberHandler::Text => value.try_downcast_ref::<String>().cloned(),
            MemberHandler::Enum => match value.reflect_ref() {
                ReflectRef::Enum(variant) => Some(variant.variant_name().to_string()),
                _ => None,
            },
            MemberHandler::Vector { .. } => {
                if let Some(v) = value.try_downcast_ref::<Vec2>() {
                    Some(format!("({:.3}, {:.3})", v.x, v.y))
                } else {
                    value.try_downcast_ref::<Vec3>().map(|v| format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z))
                }
            }
            MemberHandler::ObjectRef => match value.reflect_ref() {
                ReflectRef::Enum(option) => Some(match option.field_at(0) {
                    Some(inner) => format!("<{}>", inner.reflect_short_type_path()),
                    None => "<none>".to_string(),
                }),
                _ => None,
            },
            MemberHandler::Collection => match value.reflect_ref() {
                ReflectRef::List(list) => Some(format!("[{} items]", list.len())),
                ReflectRef::Array(array) => Some(format!("[{} items]", array.len())),
                ReflectRef::Map(map) => Some(format!("[{} entries]", map.len())),
                _ => None,
            },
            MemberHandler::Custom(_) => None,
        };
        shown.unwrap_or_else(|| format!("{value:?}"))
    }
}

/// Maps exact member types to the handler that edits them. Resolution never walks a type
/// hierarchy; aliases registered here are the only fallback.
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<TypeId, MemberHandler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin_handlers() -> Self {
        let mut registry = Self::new();
        let real = MemberHandler::Numeric { integral: false };
        let integral = MemberHandler::Numeric { integral: true };
        registry.register::<f32>(real.clone());
        registry.register::<f64>(real);
        registry.register::<i8>(integral.clone());
        registry.register::<i16>(integral.clone());
        registry.register::<i32>(integral.clone());
        registry.register::<i64>(integral.clone());
        registry.register::<isize>(integral.clone());
        registry.register::<u8>(integral.clone());
        registry.register::<u16>(integral.clone());
        registry.register::<u32>(integral.clone());
        registry.register::<u64>(integral.clone());
        registry.register::<usize>(integral);
        registry.register::<bool>(MemberHandler::Boolean);
        registry.register::<String>(MemberHandler::Text);
        registry.register::<Vec2>(MemberHandler::Vector { axes: 2 });
        registry.register::<Vec3>(MemberHandler::Vector { axes: 3 });
        registry
    }

    pub fn register<T: ?Sized + 'static>(&mut self, handler: MemberHandler) -> Option<MemberHandler> {
        self.handlers.insert(TypeId::of::<T>(), handler)
    }

    /// Registers the enum handler for `T`. Returns `false` when `T` does not reflect as an enum.
    pub fn register_enum<T: Typed>(&mut self) -> bool {
        if !matches!(T::type_info(), TypeInfo::Enum(_)) {
            return false;
        }
        self.register::<T>(MemberHandler::Enum);
        true
    }

    /// Lets `T` resolve to whatever `Base` resolves to. Returns `false` when `Base` is unknown.
    pub fn register_alias<T: ?Sized + 'static, Base: ?Sized + 'static>(&mut self) -> bool {
        match self.handlers.get(&TypeId::of::<Base>()).cloned() {
            Some(handler) => {
                self.handlers.insert(TypeId::of::<T>(), handler);
                true
            }
            None => false,
        }
    }

    pub fn handler(&self, member_type: &TypeKey) -> Option<&MemberHandler> {
        self.handlers.get(&member_type.id())
    }

    pub fn handler_for(&self, member: &MemberDescriptor) -> Result<&MemberHandler, InspectorError> {
        self.handler(&member.member_type).ok_or_else(|| InspectorError::UnsupportedMemberType {
            member: member.name.to_string(),
            type_name: member.member_type.name(),
        })
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Live editor bound to one member of one object.
pub struct ValueEditor {
    member: MemberDescriptor,
    target: Weak<RefCell<dyn Reflect>>,
    handler: MemberHandler,
    window: ElementId,
    edits: Rc<EditQueue>,
    text: ElementId,
    display: String,
}

impl ValueEditor {
    pub fn spawn(
        tree: &mut ElementTree,
        parent: ElementId,
        handler: MemberHandler,
        member: &MemberDescriptor,
        target: &Rc<RefCell<dyn Reflect>>,
        window: ElementId,
        ctx: &EditorContext,
    ) -> ElementId {
        let id = tree.spawn(parent, "value", Shape::new(0.5, 0.0, 1.0, 1.0));
        let mut editor = ValueEditor {
            member: member.clone(),
            target: Rc::downgrade(target),
            handler,
            window,
            edits: Rc::clone(ctx.edits()),
            text: id,
            display: String::new(),
        };
        editor.display = editor.current_display();
        editor.text = tree.spawn_widget(
            id,
            "value_text",
            Shape::IDENTITY,
            Label::new(editor.display.clone())
                .with_color(Style::FOREGROUND_STRONG)
                .with_alignment(Alignment::Min, Alignment::Min)
                .with_metrics(ctx.text_metrics()),
        );
        tree.set_widget(id, editor);
        id
    }

    pub fn member(&self) -> &MemberDescriptor {
        &self.member
    }

    pub fn handler(&self) -> &MemberHandler {
        &self.handler
    }

    pub fn window(&self) -> ElementId {
        self.window
    }

    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Current value rendered by the member's handler.
    pub fn read(&self) -> Result<String, InspectorError> {
        let target = self.target()?;
        let object = target.borrow();
        let Some(field) = member_ref(object.as_partial_reflect(), &self.member.path) else {
            return Err(InspectorError::MemberNotFound {
                object_type: object.reflect_short_type_path().to_string(),
                member: self.member.name.to_string(),
            });
        };
        let text = self.handler.display(field);
        Ok(text)
    }

    /// Variant names of an enum member, empty for every other kind.
    pub fn variants(&self) -> Vec<&'static str> {
        let Ok(target) = self.target() else {
            return Vec::new();
        };
        let object = target.borrow();
        let info = member_ref(object.as_partial_reflect(), &self.member.path)
            .and_then(|field| field.get_represented_type_info());
        let names = match info {
            Some(TypeInfo::Enum(info)) => info.iter().map(VariantInfo::name).collect(),
            _ => Vec::new(),
        };
        names
    }

    /// Writes `value` into the inspected member and records the edit. `value` must be of the
    /// member's exact type.
    pub fn commit(&mut self, value: &dyn PartialReflect) -> Result<(), InspectorError> {
        if TypeKey::of_value(value) != Some(self.member.member_type) {
            return Err(InspectorError::ValueKindMismatch {
                member: self.member.name.to_string(),
                expected: self.member.member_type.short_name(),
                found: value.reflect_short_type_path().to_string(),
            });
        }
        self.write(|field| field.try_apply(value).map_err(|err| err.to_string()))
    }

    /// Numeric members accept any number; integral members round to the nearest integer.
    pub fn commit_number(&mut self, number: f64) -> Result<(), InspectorError> {
        let MemberHandler::Numeric { integral } = self.handler else {
            return Err(self.mismatch("number"));
        };
        let member_type = self.member.member_type.short_name();
        self.write(|field| {
            if write_number(field, number, integral) {
                Ok(())
            } else {
                Err(format!("{member_type} is not a primitive number"))
            }
        })
    }

    /// Switches an enum member to the unit variant named `variant`.
    pub fn commit_variant(&mut self, variant: &str) -> Result<(), InspectorError> {
        if !matches!(self.handler, MemberHandler::Enum) {
            return Err(self.mismatch("enum"));
        }
        let known = self.variant_is_unit(variant)?;
        if !known {
            return Err(InspectorError::UnknownEnumVariant {
                type_name: self.member.member_type.short_name(),
                variant: variant.to_string(),
            });
        }
        let value = DynamicEnum::new(variant, DynamicVariant::Unit);
        self.write(|field| field.try_apply(&value).map_err(|err| err.to_string()))
    }

    fn variant_is_unit(&self, variant: &str) -> Result<bool, InspectorError> {
        let target = self.target()?;
        let object = target.borrow();
        let info = member_ref(object.as_partial_reflect(), &self.member.path)
            .and_then(|field| field.get_represented_type_info());
        let unit = match info {
            Some(TypeInfo::Enum(info)) => matches!(info.variant(variant), Some(VariantInfo::Unit(_))),
            _ => false,
        };
        Ok(unit)
    }

    fn write(
        &mut self,
        apply: impl FnOnce(&mut dyn PartialReflect) -> Result<(), String>,
    ) -> Result<(), InspectorError> {
        if self.handler.is_read_only() {
            return Err(InspectorError::ReadOnlyMember { member: self.member.name.to_string() });
        }
        let target = self.target()?;
        let mut object = target.borrow_mut();
        let object_type = object.reflect_short_type_path().to_string();
        let Some(field) = member_mut(object.as_partial_reflect_mut(), &self.member.path) else {
            return Err(InspectorError::MemberNotFound { object_type, member: self.member.name.to_string() });
        };
        let previous = field.clone_value();
        let previous_text = self.handler.display(&*field);
        apply(&mut *field)
            .map_err(|reason| InspectorError::ApplyFailed { member: self.member.name.to_string(), reason })?;
        let value = field.clone_value();
        let value_text = self.handler.display(&*field);
        drop(object);

        self.display = value_text.clone();
        tracing::debug!(member = self.member.name, value = %value_text, "inspector edit committed");
        self.edits.push(EditRecord {
            object_type,
            member: self.member.name.to_string(),
            previous,
            value,
            previous_text,
            value_text,
        });
        Ok(())
    }

    fn target(&self) -> Result<Rc<RefCell<dyn Reflect>>, InspectorError> {
        self.target.upgrade().ok_or_else(|| InspectorError::TargetDropped { member: self.member.name.to_string() })
    }

    fn mismatch(&self, found: &str) -> InspectorError {
        InspectorError::ValueKindMismatch {
            member: self.member.name.to_string(),
            expected: self.handler.label(),
            found: found.to_string(),
        }
    }

    fn current_display(&self) -> String {
        match self.read() {
            Ok(value) => value,
            Err(InspectorError::TargetDropped { .. }) => "<dropped>".to_string(),
            Err(_) => "<missing>".to_string(),
        }
    }
}

impl Widget for ValueEditor {
    fn frame_update(&mut self, tree: &mut ElementTree, _id: ElementId, _args: &FrameUpdateArgs) {
        self.display = self.current_display();
        if let Some(label) = tree.widget_mut::<Label>(self.text) {
            if label.text() != self.display {
                label.set_text(self.display.clone());
            }
        }
    }

    fn describe(&self) -> Option<String> {
        Some(format!("{} = {}", self.handler.label(), self.display))
    }
}
