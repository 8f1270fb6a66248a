pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod inspector;
pub mod reflect;
pub mod shell;
pub mod time;
pub mod toolbar;
pub mod ui;

pub use editor::EditorContext;
pub use error::InspectorError;
pub use inspector::InspectorWindow;
pub use shell::EditorUi;
pub use toolbar::{Tab, Toolbar};
