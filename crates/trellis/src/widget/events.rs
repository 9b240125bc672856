//! Widget-facing event types.
//!
//! The router translates platform input into [`WidgetEvent`]s and delivers
//! them to widgets through [`Widget::event`](super::Widget::event). A widget
//! handles the subset of events it cares about and returns `false` for the
//! rest, which is how optional capabilities are expressed: dispatch simply
//! moves on when a widget declines an event.

use trellis_core::{Point, Size};

use super::arena::WidgetId;
use super::keyboard::{Key, Modifiers};

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left). The only button that drives focus.
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// An input event delivered to a widget.
///
/// Positions are in window coordinates; widget geometry is absolute, so a
/// widget compares event positions against its own rect directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetEvent {
    /// A mouse button was pressed.
    MousePress { button: MouseButton, pos: Point },
    /// A mouse button was released.
    ///
    /// Delivered to the focused widget regardless of cursor position, so
    /// drag-based widgets can end a drag outside their bounds.
    MouseRelease { button: MouseButton, pos: Point },
    /// The cursor moved. Broadcast to every widget, not just the focused one.
    MouseMove { pos: Point },
    /// A key was pressed. Delivered only to the focused widget.
    KeyPress { key: Key, modifiers: Modifiers },
    /// A character was typed. Delivered only to the focused widget.
    Char { ch: char },
    /// The widget gained keyboard focus.
    FocusIn,
    /// The widget lost keyboard focus.
    FocusOut,
}

/// Read-only per-frame context passed into paint and event handlers.
///
/// This replaces an ambient application back-pointer: widgets that need the
/// window size, the cursor position, or the focus owner read them from here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameContext {
    /// Current window size in logical pixels.
    pub window_size: Size,
    /// Current cursor position in window coordinates.
    pub cursor_pos: Point,
    /// The widget currently holding keyboard focus, if any.
    pub focused: Option<WidgetId>,
}

impl FrameContext {
    /// Create a frame context.
    pub fn new(window_size: Size, cursor_pos: Point, focused: Option<WidgetId>) -> Self {
        Self {
            window_size,
            cursor_pos,
            focused,
        }
    }
}
