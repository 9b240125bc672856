//! Layout managers.
//!
//! A layout owns an ordered list of children — widget ids and nested
//! layouts — and assigns each an absolute window rect inside its own
//! geometry whenever [`Layout::update_layout`] runs. Layouts are not
//! widgets: they live outside the arena, borrow it per call, and never
//! receive input themselves.
//!
//! All variants share the same box model: the layout's rect is deflated by
//! `padding` on every side to produce the content box, and `spacing` pixels
//! separate adjacent children. Children are positioned even when they do not
//! fit; overflow clamping is the caller's concern.

mod box_layout;
mod grid;
mod linear;

pub use box_layout::{BoxLayout, SizeSpec};
pub use grid::GridLayout;
pub use linear::{HorizontalLayout, VerticalLayout};

use trellis_core::{Point, Rect, Size};

use crate::widget::arena::{WidgetArena, WidgetId};
use crate::widget::events::{FrameContext, WidgetEvent};
use crate::widget::traits::PaintContext;

/// Axis along which a linear or box layout stacks its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Cross-axis placement of children within their slot.
///
/// The main axis is always divided by the layout; alignment only controls
/// the perpendicular direction. [`Stretch`](Alignment::Stretch) fills the
/// slot; the other variants keep the child's own cross-axis extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Stretch,
    Start,
    Center,
    End,
}

/// Window-relative placement of a top-level layout.
///
/// Each field, when set, is a fraction of the window along that dimension
/// and overrides the corresponding part of the layout's geometry on every
/// resize. Unset fields leave the absolute value alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RelativePlacement {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl RelativePlacement {
    /// Fill the whole window.
    pub fn fill() -> Self {
        Self {
            x: Some(0.0),
            y: Some(0.0),
            width: Some(1.0),
            height: Some(1.0),
        }
    }
}

/// One entry in a layout's child list.
pub enum LayoutChild {
    /// A widget stored in the arena.
    Widget(WidgetId),
    /// A nested layout, owned by its parent.
    Nested(Box<dyn Layout>),
}

/// Current geometry of a child, whichever kind it is.
///
/// Returns `None` for a widget id that is no longer live.
pub(crate) fn child_geometry(arena: &WidgetArena, child: &LayoutChild) -> Option<Rect> {
    match child {
        LayoutChild::Widget(id) => arena.get(*id).map(|w| w.widget_base().geometry()),
        LayoutChild::Nested(layout) => Some(layout.layout_base().geometry()),
    }
}

/// Assign a child its rect. Stale widget ids are skipped.
pub(crate) fn set_child_geometry(arena: &mut WidgetArena, child: &mut LayoutChild, rect: Rect) {
    match child {
        LayoutChild::Widget(id) => {
            if let Some(widget) = arena.get_mut(*id) {
                widget.widget_base_mut().set_geometry(rect);
            } else {
                tracing::warn!(target: "trellis::layout", id = ?id, "skipping stale widget id");
            }
        }
        LayoutChild::Nested(layout) => layout.layout_base_mut().set_geometry(rect),
    }
}

/// State shared by every layout variant.
pub struct LayoutBase {
    geometry: Rect,
    padding: f32,
    spacing: f32,
    visible: bool,
    placement: RelativePlacement,
    children: Vec<LayoutChild>,
}

impl LayoutBase {
    /// Default padding and spacing, in pixels.
    pub const DEFAULT_PADDING: f32 = 5.0;
    pub const DEFAULT_SPACING: f32 = 5.0;

    /// Create a layout base with default padding and spacing.
    pub fn new(geometry: Rect) -> Self {
        Self {
            geometry,
            padding: Self::DEFAULT_PADDING,
            spacing: Self::DEFAULT_SPACING,
            visible: true,
            placement: RelativePlacement::default(),
            children: Vec::new(),
        }
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
    }

    /// The geometry minus padding on every side; children are placed here.
    pub fn content_rect(&self) -> Rect {
        self.geometry.deflate(self.padding)
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding;
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn placement(&self) -> RelativePlacement {
        self.placement
    }

    pub fn set_placement(&mut self, placement: RelativePlacement) {
        self.placement = placement;
    }

    pub fn children(&self) -> &[LayoutChild] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<LayoutChild> {
        &mut self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Re-derive geometry from the window size for each placement field set.
    pub fn resolve_placement(&mut self, window: Size) {
        if let Some(fx) = self.placement.x {
            self.geometry.origin.x = fx * window.width;
        }
        if let Some(fy) = self.placement.y {
            self.geometry.origin.y = fy * window.height;
        }
        if let Some(fw) = self.placement.width {
            self.geometry.size.width = fw * window.width;
        }
        if let Some(fh) = self.placement.height {
            self.geometry.size.height = fh * window.height;
        }
    }
}

/// A layout manager.
///
/// Variants implement [`update_layout`](Self::update_layout); everything
/// else — child management, painting, hit-testing, event broadcast — is
/// provided here by walking the shared [`LayoutBase`].
pub trait Layout {
    /// The layout's shared base state.
    fn layout_base(&self) -> &LayoutBase;

    /// Mutable access to the layout's shared base state.
    fn layout_base_mut(&mut self) -> &mut LayoutBase;

    /// Recompute every child's geometry from the layout's current rect.
    ///
    /// Runs recursively: after a nested layout is assigned its slot, its own
    /// `update_layout` is invoked.
    fn update_layout(&mut self, arena: &mut WidgetArena);

    /// Append a widget child.
    fn add_widget(&mut self, id: WidgetId) {
        self.layout_base_mut()
            .children_mut()
            .push(LayoutChild::Widget(id));
    }

    /// Append a nested layout child.
    fn add_layout(&mut self, layout: Box<dyn Layout>) {
        self.layout_base_mut()
            .children_mut()
            .push(LayoutChild::Nested(layout));
    }

    /// Remove a widget child if present. Does not touch the arena.
    fn remove_widget(&mut self, id: WidgetId) -> bool {
        let children = self.layout_base_mut().children_mut();
        let before = children.len();
        children.retain(|c| !matches!(c, LayoutChild::Widget(w) if *w == id));
        children.len() != before
    }

    /// Remove all children. Does not touch the arena.
    fn clear(&mut self) {
        self.layout_base_mut().children_mut().clear();
    }

    /// Re-resolve window-relative placement, then lay children out.
    fn update_from_window_size(&mut self, arena: &mut WidgetArena, window: Size) {
        self.layout_base_mut().resolve_placement(window);
        self.update_layout(arena);
    }

    /// Whether `point` falls within the layout's bounds.
    fn contains(&self, point: Point) -> bool {
        self.layout_base().geometry().contains(point)
    }

    /// Paint all visible children in order.
    ///
    /// Widgets whose [`wants_overlay`](crate::widget::Widget::wants_overlay)
    /// is set are skipped; the router paints those in a later pass so they
    /// appear above everything else.
    fn paint(&self, arena: &WidgetArena, ctx: &mut PaintContext<'_>) {
        if !self.layout_base().is_visible() {
            return;
        }
        for child in self.layout_base().children() {
            match child {
                LayoutChild::Widget(id) => {
                    if let Some(widget) = arena.get(*id) {
                        if widget.widget_base().is_visible() && !widget.wants_overlay() {
                            widget.paint(ctx);
                        }
                    }
                }
                LayoutChild::Nested(layout) => layout.paint(arena, ctx),
            }
        }
    }

    /// Find the topmost widget under `point`.
    ///
    /// Children are tested in reverse order so later (painted-on-top)
    /// children win.
    fn hit_test(&self, arena: &WidgetArena, point: Point) -> Option<WidgetId> {
        if !self.layout_base().is_visible() {
            return None;
        }
        for child in self.layout_base().children().iter().rev() {
            match child {
                LayoutChild::Widget(id) => {
                    if let Some(widget) = arena.get(*id) {
                        if widget.hit_test(point) {
                            return Some(*id);
                        }
                    }
                }
                LayoutChild::Nested(layout) => {
                    if let Some(hit) = layout.hit_test(arena, point) {
                        return Some(hit);
                    }
                }
            }
        }
        None
    }

    /// Deliver an event to every widget in the subtree.
    ///
    /// Used for cursor-move broadcast; consumption flags are ignored.
    fn broadcast_event(&mut self, arena: &mut WidgetArena, event: &WidgetEvent, frame: &FrameContext) {
        for child in self.layout_base_mut().children_mut() {
            match child {
                LayoutChild::Widget(id) => {
                    if let Some(widget) = arena.get_mut(*id) {
                        widget.event(event, frame);
                    }
                }
                LayoutChild::Nested(layout) => layout.broadcast_event(arena, event, frame),
            }
        }
    }

    /// Advance animation for every widget in the subtree.
    fn tick(&mut self, arena: &mut WidgetArena, dt: f32) {
        for child in self.layout_base_mut().children_mut() {
            match child {
                LayoutChild::Widget(id) => {
                    if let Some(widget) = arena.get_mut(*id) {
                        widget.tick(dt);
                    }
                }
                LayoutChild::Nested(layout) => layout.tick(arena, dt),
            }
        }
    }
}
