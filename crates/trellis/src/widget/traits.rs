//! The [`Widget`] trait and paint context.

use std::any::Any;

use trellis_core::Point;

use crate::painter::Painter;

use super::arena::WidgetId;
use super::base::WidgetBase;
use super::events::{FrameContext, WidgetEvent};

/// Everything a painter call needs for one frame.
///
/// Bundles the active [`Painter`] with the read-only [`FrameContext`] so
/// paint methods take a single argument.
pub struct PaintContext<'a> {
    painter: &'a mut dyn Painter,
    frame: &'a FrameContext,
}

impl<'a> PaintContext<'a> {
    /// Create a paint context for one frame.
    pub fn new(painter: &'a mut dyn Painter, frame: &'a FrameContext) -> Self {
        Self { painter, frame }
    }

    /// The active painter.
    pub fn painter(&mut self) -> &mut dyn Painter {
        self.painter
    }

    /// Read-only frame state (window size, cursor, focus owner).
    pub fn frame(&self) -> &FrameContext {
        self.frame
    }
}

/// The base trait implemented by every widget.
///
/// Required methods are the widget's identity (its [`WidgetBase`] and `Any`
/// casts) plus [`paint`](Self::paint). Everything else has a default:
/// widgets opt into input by overriding [`event`](Self::event), into
/// animation by overriding [`tick`](Self::tick), and into late painting by
/// overriding [`wants_overlay`](Self::wants_overlay). A widget that leaves
/// `event` at its default simply never consumes input, which is how the
/// dispatcher distinguishes interactive widgets from passive ones.
pub trait Widget: Any {
    /// The widget's shared base state.
    fn widget_base(&self) -> &WidgetBase;

    /// Mutable access to the widget's shared base state.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Paint the widget. Called once per frame when visible.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Upcast for downcasting to the concrete widget type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the concrete widget type.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Handle an input event.
    ///
    /// Returns `true` when the event was consumed. The default declines
    /// everything.
    fn event(&mut self, _event: &WidgetEvent, _frame: &FrameContext) -> bool {
        false
    }

    /// Advance time-based state by `dt` seconds.
    fn tick(&mut self, _dt: f32) {}

    /// Whether the widget currently paints in the overlay pass.
    ///
    /// Overlay widgets are painted after everything else and are offered
    /// mouse presses first, so popups (an expanded combo box) can cover and
    /// shield the widgets beneath them.
    fn wants_overlay(&self) -> bool {
        false
    }

    /// Whether `point` hits this widget.
    ///
    /// The default tests the widget's rect; widgets with an extended
    /// interactive region (a popup, a round thumb) override this.
    fn hit_test(&self, point: Point) -> bool {
        self.widget_base().is_visible() && self.widget_base().geometry().contains(point)
    }

    /// Called once when the widget is inserted into the arena, after its id
    /// has been stamped.
    fn attached(&mut self, _id: WidgetId) {}
}
