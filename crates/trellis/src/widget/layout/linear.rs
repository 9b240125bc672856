//! Equal-slot vertical and horizontal layouts.

use trellis_core::Rect;

use crate::widget::arena::WidgetArena;

use super::{
    child_geometry, set_child_geometry, Alignment, Layout, LayoutBase, LayoutChild, Orientation,
};

/// Stacks children top-to-bottom, each receiving an equal slot.
///
/// The content height minus inter-child spacing is split evenly across all
/// children regardless of their own preferred size; alignment controls the
/// horizontal placement inside each slot.
pub struct VerticalLayout {
    base: LayoutBase,
    alignment: Alignment,
}

impl VerticalLayout {
    pub fn new(geometry: Rect) -> Self {
        Self {
            base: LayoutBase::new(geometry),
            alignment: Alignment::default(),
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.base.set_padding(padding);
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.base.set_spacing(spacing);
        self
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }
}

impl Layout for VerticalLayout {
    fn layout_base(&self) -> &LayoutBase {
        &self.base
    }

    fn layout_base_mut(&mut self) -> &mut LayoutBase {
        &mut self.base
    }

    fn update_layout(&mut self, arena: &mut WidgetArena) {
        distribute(&mut self.base, arena, Orientation::Vertical, self.alignment);
    }
}

/// Stacks children left-to-right, each receiving an equal slot.
///
/// The horizontal counterpart of [`VerticalLayout`]; alignment controls the
/// vertical placement inside each slot.
pub struct HorizontalLayout {
    base: LayoutBase,
    alignment: Alignment,
}

impl HorizontalLayout {
    pub fn new(geometry: Rect) -> Self {
        Self {
            base: LayoutBase::new(geometry),
            alignment: Alignment::default(),
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.base.set_padding(padding);
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.base.set_spacing(spacing);
        self
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }
}

impl Layout for HorizontalLayout {
    fn layout_base(&self) -> &LayoutBase {
        &self.base
    }

    fn layout_base_mut(&mut self) -> &mut LayoutBase {
        &mut self.base
    }

    fn update_layout(&mut self, arena: &mut WidgetArena) {
        distribute(&mut self.base, arena, Orientation::Horizontal, self.alignment);
    }
}

/// Equal-slot distribution along `orientation`.
fn distribute(
    base: &mut LayoutBase,
    arena: &mut WidgetArena,
    orientation: Orientation,
    alignment: Alignment,
) {
    let n = base.child_count();
    if n == 0 {
        return;
    }
    let content = base.content_rect();
    if content.is_empty() {
        tracing::trace!(target: "trellis::layout", "empty content rect, skipping");
        return;
    }
    let spacing = base.spacing();

    let main_len = match orientation {
        Orientation::Vertical => content.height(),
        Orientation::Horizontal => content.width(),
    };
    let slot = ((main_len - spacing * (n as f32 - 1.0)) / n as f32).max(0.0);

    let mut cursor = match orientation {
        Orientation::Vertical => content.top(),
        Orientation::Horizontal => content.left(),
    };

    for child in base.children_mut() {
        let current = child_geometry(arena, child).unwrap_or(Rect::ZERO);
        let rect = match orientation {
            Orientation::Vertical => {
                let (x, w) = cross_axis(content.left(), content.width(), current.width(), alignment);
                Rect::new(x, cursor, w, slot)
            }
            Orientation::Horizontal => {
                let (y, h) = cross_axis(content.top(), content.height(), current.height(), alignment);
                Rect::new(cursor, y, slot, h)
            }
        };
        set_child_geometry(arena, child, rect);
        if let LayoutChild::Nested(layout) = child {
            layout.update_layout(arena);
        }
        cursor += slot + spacing;
    }
}

/// Cross-axis origin and extent for one slot.
fn cross_axis(start: f32, extent: f32, child_extent: f32, alignment: Alignment) -> (f32, f32) {
    match alignment {
        Alignment::Stretch => (start, extent),
        Alignment::Start => (start, child_extent),
        Alignment::Center => (start + (extent - child_extent) / 2.0, child_extent),
        Alignment::End => (start + extent - child_extent, child_extent),
    }
}
