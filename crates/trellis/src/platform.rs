//! The platform shell contract.
//!
//! Trellis does not open windows or talk to the OS itself; it drives a
//! [`Platform`] implementation that owns the native window, the input queue,
//! and the drawing backend. The crate ships no backend — tests use an
//! in-memory shell, and real applications supply one for their windowing
//! stack.

use std::time::Duration;

use trellis_core::{Color, Point, Size};

use crate::painter::Painter;
use crate::widget::{Key, Modifiers, MouseButton};

/// A raw input or window event produced by the platform shell.
///
/// The application router translates these into widget events; widgets never
/// see this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformEvent {
    /// A mouse button was pressed at `pos`.
    MousePress { button: MouseButton, pos: Point },
    /// A mouse button was released at `pos`.
    MouseRelease { button: MouseButton, pos: Point },
    /// The cursor moved to `pos`.
    MouseMove { pos: Point },
    /// A key went down.
    KeyPress { key: Key, modifiers: Modifiers },
    /// A unicode character was produced by the keyboard.
    Char { ch: char },
    /// The window was resized to `width` x `height` logical pixels.
    ///
    /// Degenerate sizes (zero or negative, as some shells report during
    /// minimize) are delivered as-is; the router drops them.
    Resized { width: f32, height: f32 },
    /// The user asked to close the window.
    CloseRequested,
}

/// The shell that hosts a Trellis application.
///
/// One implementation per windowing backend. The application loop calls
/// [`poll_events`](Self::poll_events) once per frame, then paints between
/// [`begin_frame`](Self::begin_frame) and [`end_frame`](Self::end_frame).
pub trait Platform {
    /// Current window size in logical pixels.
    fn window_size(&self) -> Size;

    /// Current cursor position in window coordinates.
    fn cursor_pos(&self) -> Point;

    /// Whether the shell wants the application loop to stop.
    fn should_close(&self) -> bool;

    /// Drain all events that arrived since the previous call.
    fn poll_events(&mut self) -> Vec<PlatformEvent>;

    /// Start a frame, clearing the surface to `clear_color`.
    fn begin_frame(&mut self, clear_color: Color);

    /// Present the frame.
    fn end_frame(&mut self);

    /// The painter for the frame currently being recorded.
    fn painter(&mut self) -> &mut dyn Painter;

    /// Monotonic time since the shell started.
    ///
    /// Drives animation; widget ticks receive deltas of this clock, so a
    /// headless shell can advance it manually.
    fn elapsed(&self) -> Duration;
}
