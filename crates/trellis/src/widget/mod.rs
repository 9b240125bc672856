//! The widget system: storage, the [`Widget`] trait, events, and layouts.

mod arena;
mod base;
mod events;
mod keyboard;
pub mod layout;
mod traits;
pub mod widgets;

#[cfg(test)]
pub(crate) mod testing;

pub use arena::{WidgetArena, WidgetId};
pub use base::WidgetBase;
pub use events::{FrameContext, MouseButton, WidgetEvent};
pub use keyboard::{Key, Modifiers};
pub use traits::{PaintContext, Widget};
