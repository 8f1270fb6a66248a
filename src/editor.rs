use crate::config::EditorUiConfig;
use crate::events::EditQueue;
use crate::inspector::HandlerRegistry;
use crate::reflect::{MemberGroup, ReflectionCache};
use crate::ui::TextMetrics;
use bevy_reflect::PartialReflect;
use std::cell::RefCell;
use std::rc::Rc;

/// Services shared by every inspector window and toolbar tab. Cloning is cheap.
#[derive(Clone)]
pub struct EditorContext {
    config: Rc<EditorUiConfig>,
    handlers: Rc<HandlerRegistry>,
    reflection: Rc<RefCell<ReflectionCache>>,
    edits: Rc<EditQueue>,
}

impl EditorContext {
    pub fn new(config: EditorUiConfig) -> Self {
        Self::with_handlers(config, HandlerRegistry::with_builtin_handlers())
    }

    pub fn with_handlers(config: EditorUiConfig, handlers: HandlerRegistry) -> Self {
        Self {
            config: Rc::new(config),
            handlers: Rc::new(handlers),
            reflection: Rc::new(RefCell::new(ReflectionCache::new())),
            edits: Rc::new(EditQueue::new()),
        }
    }

    pub fn config(&self) -> &EditorUiConfig {
        &self.config
    }

    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    pub fn edits(&self) -> &Rc<EditQueue> {
        &self.edits
    }

    pub fn public_members(&self, object: &dyn PartialReflect) -> Rc<[MemberGroup]> {
        self.reflection.borrow_mut().public_members(object)
    }

    pub fn text_metrics(&self) -> TextMetrics {
        TextMetrics::from_config(&self.config.text)
    }
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(EditorUiConfig::default())
    }
}
