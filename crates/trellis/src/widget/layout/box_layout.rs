//! Proportional box layout with per-child size specs.

use trellis_core::Rect;

use crate::widget::arena::WidgetArena;

use super::{set_child_geometry, Layout, LayoutBase, LayoutChild, Orientation};

/// How much of the main axis one child receives in a [`BoxLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizeSpec {
    /// Exactly this many pixels.
    Fixed(f32),
    /// This percentage of the space left after fixed children, where the
    /// percent values of all children are normalized against each other.
    Percent(f32),
    /// An equal share of the space left after fixed children.
    #[default]
    Auto,
}

/// Stacks children along one axis, sizing each by its [`SizeSpec`].
///
/// Size specs are matched to children by index; a child without a spec
/// behaves as [`SizeSpec::Auto`]. Fixed pixels are reserved first, then
/// percent children split the remainder proportionally to their percent
/// values, and auto children each take an equal cut of that same remainder.
/// The layout does not reconcile over-commitment: specs that add up to more
/// than the content box simply overflow it.
///
/// The cross axis is always stretched to the content box.
pub struct BoxLayout {
    base: LayoutBase,
    orientation: Orientation,
    sizes: Vec<SizeSpec>,
}

impl BoxLayout {
    pub fn new(geometry: Rect, orientation: Orientation) -> Self {
        Self {
            base: LayoutBase::new(geometry),
            orientation,
            sizes: Vec::new(),
        }
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.base.set_padding(padding);
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.base.set_spacing(spacing);
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Replace the whole size spec list.
    pub fn set_sizes(&mut self, sizes: Vec<SizeSpec>) {
        self.sizes = sizes;
    }

    pub fn sizes(&self) -> &[SizeSpec] {
        &self.sizes
    }

    /// Append one child together with its size spec.
    pub fn add_sized_widget(&mut self, id: crate::widget::WidgetId, size: SizeSpec) {
        // Pad earlier unspecified entries so the new spec lands on `id`.
        while self.sizes.len() < self.base.child_count() {
            self.sizes.push(SizeSpec::Auto);
        }
        self.sizes.push(size);
        self.add_widget(id);
    }

    fn spec_for(&self, index: usize) -> SizeSpec {
        self.sizes.get(index).copied().unwrap_or_default()
    }
}

impl Layout for BoxLayout {
    fn layout_base(&self) -> &LayoutBase {
        &self.base
    }

    fn layout_base_mut(&mut self) -> &mut LayoutBase {
        &mut self.base
    }

    fn update_layout(&mut self, arena: &mut WidgetArena) {
        let n = self.base.child_count();
        if n == 0 {
            return;
        }
        let content = self.base.content_rect();
        if content.is_empty() {
            tracing::trace!(target: "trellis::layout", "empty content rect, skipping");
            return;
        }
        let spacing = self.base.spacing();

        let main_len = match self.orientation {
            Orientation::Horizontal => content.width(),
            Orientation::Vertical => content.height(),
        };
        let available = main_len - spacing * (n as f32 - 1.0);

        let mut sum_fixed = 0.0;
        let mut sum_percent = 0.0;
        let mut auto_count = 0usize;
        for i in 0..n {
            match self.spec_for(i) {
                SizeSpec::Fixed(px) => sum_fixed += px,
                SizeSpec::Percent(p) => sum_percent += p,
                SizeSpec::Auto => auto_count += 1,
            }
        }

        let remainder = (available - sum_fixed).max(0.0);
        let per_percent = if sum_percent > 0.0 {
            remainder / sum_percent
        } else {
            0.0
        };
        let auto_share = if auto_count > 0 {
            remainder / auto_count as f32
        } else {
            0.0
        };

        let orientation = self.orientation;
        let specs: Vec<SizeSpec> = (0..n).map(|i| self.spec_for(i)).collect();
        let mut cursor = match orientation {
            Orientation::Horizontal => content.left(),
            Orientation::Vertical => content.top(),
        };

        for (child, spec) in self.base.children_mut().iter_mut().zip(specs) {
            let extent = match spec {
                SizeSpec::Fixed(px) => px.max(0.0),
                SizeSpec::Percent(p) => per_percent * p.max(0.0),
                SizeSpec::Auto => auto_share,
            };
            let rect = match orientation {
                Orientation::Horizontal => {
                    Rect::new(cursor, content.top(), extent, content.height())
                }
                Orientation::Vertical => Rect::new(content.left(), cursor, content.width(), extent),
            };
            set_child_geometry(arena, child, rect);
            if let LayoutChild::Nested(layout) = child {
                layout.update_layout(arena);
            }
            cursor += extent + spacing;
        }
    }
}
