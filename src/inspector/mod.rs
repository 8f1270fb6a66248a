//! Reflection-driven object inspector.
//!
//! [`InspectorWindow::spawn`] walks an object's public members, grouped by declaring type, and builds
//! one `[name | value]` row per member. Values are edited through the [`MemberHandler`] registered
//! for the member's exact type.

mod handlers;
mod name;
mod window;

pub use handlers::{CustomHandler, HandlerRegistry, MemberHandler, ValueEditor};
pub use name::{InspectorName, MarqueeGeometry, MarqueePhase, NameScroller};
pub use window::{InspectorRow, InspectorSection, InspectorWindow};
