//! Member discovery and field access on top of `bevy_reflect`.
//!
//! Inspectable objects derive [`Reflect`]. Their public members are the reflected named fields, in
//! declaration order. A field tagged `#[reflect(@Base)]` is not a member itself: its own fields are
//! spliced in at that position and attributed to the field's type, which is how a type shares the
//! members of the type it builds on.

use bevy_reflect::{PartialReflect, Reflect, ReflectMut, ReflectRef, TypeInfo, TypePath};
use smallvec::SmallVec;
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Field attribute marking an embedded base whose fields belong to the outer object.
#[derive(Debug, Clone, Copy, Default, Reflect)]
pub struct Base;

/// Field indices from the inspected object down to a member.
pub type FieldPath = SmallVec<[usize; 4]>;

/// Reflected type identity. Equality is by `TypeId`; the paths are only for display.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    path: &'static str,
    short: &'static str,
}

impl TypeKey {
    pub fn of<T: TypePath + 'static>() -> Self {
        Self { id: TypeId::of::<T>(), path: T::type_path(), short: T::short_type_path() }
    }

    pub fn from_info(info: &'static TypeInfo) -> Self {
        let table = info.type_path_table();
        Self { id: info.type_id(), path: table.path(), short: table.short_path() }
    }

    /// `None` for dynamic values that do not represent a concrete type.
    pub fn of_value(value: &dyn PartialReflect) -> Option<Self> {
        value.get_represented_type_info().map(Self::from_info)
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.path
    }

    /// Type path without its module prefix, e.g. `Vec<i32>`.
    pub fn short_name(&self) -> &'static str {
        self.short
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
    pub name: &'static str,
    pub path: FieldPath,
    pub member_type: TypeKey,
    pub declaring_type: TypeKey,
}

/// Reflected members of `object`, declaration order, bases spliced in place.
pub fn public_members(object: &dyn PartialReflect) -> Vec<MemberDescriptor> {
    let mut members = Vec::new();
    if let Some(declaring) = TypeKey::of_value(object) {
        collect_members(object, declaring, &mut FieldPath::new(), &mut members);
    }
    members
}

fn collect_members(
    value: &dyn PartialReflect,
    declaring: TypeKey,
    path: &mut FieldPath,
    out: &mut Vec<MemberDescriptor>,
) {
    let (ReflectRef::Struct(fields), Some(TypeInfo::Struct(info))) =
        (value.reflect_ref(), value.get_represented_type_info())
    else {
        return;
    };
    for index in 0..fields.field_len() {
        let (Some(field), Some(named)) = (fields.field_at(index), info.field_at(index)) else {
            continue;
        };
        path.push(index);
        if named.has_attribute::<Base>() {
            match TypeKey::of_value(field) {
                Some(base) => collect_members(field, base, path, out),
                None => tracing::warn!(field = named.name(), "base field has no type info, skipped"),
            }
        } else {
            let table = named.type_path_table();
            out.push(MemberDescriptor {
                name: named.name(),
                path: path.clone(),
                member_type: TypeKey { id: named.type_id(), path: table.path(), short: table.short_path() },
                declaring_type: declaring,
            });
        }
        path.pop();
    }
}

pub fn member_ref<'a>(value: &'a dyn PartialReflect, path: &[usize]) -> Option<&'a dyn PartialReflect> {
    let Some((&first, rest)) = path.split_first() else {
        return Some(value);
    };
    match value.reflect_ref() {
        ReflectRef::Struct(fields) => member_ref(fields.field_at(first)?, rest),
        _ => None,
    }
}

pub fn member_mut<'a>(value: &'a mut dyn PartialReflect, path: &[usize]) -> Option<&'a mut dyn PartialReflect> {
    let Some((&first, rest)) = path.split_first() else {
        return Some(value);
    };
    match value.reflect_mut() {
        ReflectMut::Struct(fields) => member_mut(fields.field_at_mut(first)?, rest),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberGroup {
    pub declaring_type: TypeKey,
    pub members: Vec<MemberDescriptor>,
}

impl MemberGroup {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Caches member groups per reflected type.
#[derive(Debug, Default)]
pub struct ReflectionCache {
    groups: HashMap<TypeKey, Rc<[MemberGroup]>>,
}

impl ReflectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn public_members(&mut self, object: &dyn PartialReflect) -> Rc<[MemberGroup]> {
        let Some(key) = TypeKey::of_value(object) else {
            return group_by_declaring_type(public_members(object)).into();
        };
        if let Some(groups) = self.groups.get(&key) {
            return Rc::clone(groups);
        }
        let groups: Rc<[MemberGroup]> = group_by_declaring_type(public_members(object)).into();
        self.groups.insert(key, Rc::clone(&groups));
        groups
    }

    pub fn cached_types(&self) -> usize {
        self.groups.len()
    }
}

/// Groups are ordered by first appearance of their declaring type, members keep their order.
/// A member listed twice under the same declaring type is kept once.
pub fn group_by_declaring_type(members: Vec<MemberDescriptor>) -> Vec<MemberGroup> {
    let mut groups: Vec<MemberGroup> = Vec::new();
    for member in members {
        let index = match groups.iter().position(|group| group.declaring_type == member.declaring_type) {
            Some(index) => index,
            None => {
                groups.push(MemberGroup { declaring_type: member.declaring_type, members: Vec::new() });
                groups.len() - 1
            }
        };
        let group = &mut groups[index];
        if !group.members.iter().any(|existing| existing.name == member.name) {
            group.members.push(member);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[derive(Reflect, Default)]
    struct Transform {
        offset: Vec2,
        angle: f32,
    }

    #[derive(Reflect, Default)]
    struct Marker {
        #[reflect(@Base)]
        transform: Transform,
        label: String,
        #[reflect(ignore)]
        _scratch: u32,
    }

    #[test]
    fn short_name_strips_module_paths() {
        assert_eq!(TypeKey::of::<Vec2>().short_name(), "Vec2");
        assert_eq!(TypeKey::of::<Vec<i32>>().short_name(), "Vec<i32>");
        assert_eq!(TypeKey::of::<f32>().short_name(), "f32");
    }

    #[test]
    fn base_fields_are_spliced_in_place() {
        let marker = Marker::default();
        let members = public_members(&marker);
        let names: Vec<_> = members.iter().map(|member| member.name).collect();
        assert_eq!(names, ["offset", "angle", "label"]);
        assert_eq!(members[0].declaring_type, TypeKey::of::<Transform>());
        assert_eq!(members[0].member_type, TypeKey::of::<Vec2>());
        assert_eq!(members[0].path.as_slice(), [0, 0]);
        assert_eq!(members[2].declaring_type, TypeKey::of::<Marker>());
        assert_eq!(members[2].path.as_slice(), [1]);
    }

    #[test]
    fn paths_reach_nested_fields() {
        let mut marker = Marker::default();
        let members = public_members(&marker);
        let angle = member_mut(&mut marker, &members[1].path).and_then(|field| field.try_downcast_mut::<f32>());
        if let Some(angle) = angle {
            *angle = 0.25;
        }
        assert_eq!(marker.transform.angle, 0.25);
        let read = member_ref(&marker, &members[1].path).and_then(|field| field.try_downcast_ref::<f32>());
        assert_eq!(read, Some(&0.25));
        assert!(member_ref(&marker, &[7]).is_none());
    }

    #[test]
    fn groups_follow_first_appearance() {
        let groups = group_by_declaring_type(public_members(&Marker::default()));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].declaring_type, TypeKey::of::<Transform>());
        assert_eq!(groups[0].members.len(), 2);
        assert_eq!(groups[1].members[0].name, "label");

        let mut cache = ReflectionCache::new();
        let first = cache.public_members(&Marker::default());
        let second = cache.public_members(&Marker::default());
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.cached_types(), 1);
    }
}
