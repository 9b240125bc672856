//! Common state shared by all widgets.

use trellis_core::{Point, Rect, Size};

use super::arena::WidgetId;

/// Base state embedded in every widget.
///
/// Widgets hold a `WidgetBase` as a field and expose it through
/// [`Widget::widget_base`](super::Widget::widget_base); the trait's provided
/// methods delegate here so each widget only implements its own behavior.
#[derive(Debug, Clone)]
pub struct WidgetBase {
    /// Arena identity, stamped when the widget is inserted.
    id: Option<WidgetId>,
    /// Absolute geometry in window coordinates.
    geometry: Rect,
    /// Hidden widgets are skipped by painting and hit-testing.
    visible: bool,
    /// Disabled widgets paint but decline input.
    enabled: bool,
    /// Whether this widget holds keyboard focus.
    focused: bool,
    /// Whether the cursor is currently over this widget.
    hovered: bool,
}

impl WidgetBase {
    /// Create a new widget base with a zero rect, visible and enabled.
    pub fn new() -> Self {
        Self {
            id: None,
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            focused: false,
            hovered: false,
        }
    }

    /// Create a widget base with an initial geometry.
    pub fn with_geometry(geometry: Rect) -> Self {
        Self {
            geometry,
            ..Self::new()
        }
    }

    /// The widget's arena identity, if it has been inserted.
    pub fn id(&self) -> Option<WidgetId> {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: WidgetId) {
        self.id = Some(id);
    }

    /// Absolute geometry in window coordinates.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    pub fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
    }

    /// Top-left corner of the widget.
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Move the widget without changing its size.
    pub fn set_pos(&mut self, pos: Point) {
        self.geometry.origin = pos;
    }

    /// The widget's size.
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Resize the widget in place.
    pub fn set_size(&mut self, size: Size) {
        self.geometry.size = size;
    }

    /// Whether the widget is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the widget.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the widget accepts input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable input for the widget.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the widget holds keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether the cursor is over the widget.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Update hover state. Widgets call this from their mouse-move handling.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}
