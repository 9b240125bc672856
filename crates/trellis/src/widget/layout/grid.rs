//! Fixed-dimension grid layout.

use trellis_core::Rect;

use crate::widget::arena::WidgetArena;

use super::{set_child_geometry, Layout, LayoutBase, LayoutChild};

/// Places children into a `rows` x `cols` grid of uniform cells.
///
/// Children fill the grid in row-major order: child `i` lands in row
/// `i / cols`, column `i % cols`. Children past the grid's capacity are
/// never positioned and keep whatever geometry they had. Cells do not
/// adapt to their content; every cell is the same size.
pub struct GridLayout {
    base: LayoutBase,
    rows: usize,
    cols: usize,
    row_spacing: f32,
    col_spacing: f32,
}

impl GridLayout {
    pub fn new(geometry: Rect, rows: usize, cols: usize) -> Self {
        let base = LayoutBase::new(geometry);
        let spacing = base.spacing();
        Self {
            base,
            rows,
            cols,
            row_spacing: spacing,
            col_spacing: spacing,
        }
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.base.set_padding(padding);
        self
    }

    /// Set both row and column spacing at once.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.base.set_spacing(spacing);
        self.row_spacing = spacing;
        self.col_spacing = spacing;
        self
    }

    pub fn with_row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = spacing;
        self
    }

    pub fn with_col_spacing(mut self, spacing: f32) -> Self {
        self.col_spacing = spacing;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Change the grid dimensions. Takes effect on the next layout pass.
    pub fn set_dimensions(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    /// Maximum number of children the grid can place.
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}

impl Layout for GridLayout {
    fn layout_base(&self) -> &LayoutBase {
        &self.base
    }

    fn layout_base_mut(&mut self) -> &mut LayoutBase {
        &mut self.base
    }

    fn update_layout(&mut self, arena: &mut WidgetArena) {
        if self.rows == 0 || self.cols == 0 {
            return;
        }
        let content = self.base.content_rect();
        if content.is_empty() {
            tracing::trace!(target: "trellis::layout", "empty content rect, skipping");
            return;
        }
        let (row_spacing, col_spacing) = (self.row_spacing, self.col_spacing);
        let capacity = self.rows * self.cols;
        let cols = self.cols;

        let cell_w =
            ((content.width() - col_spacing * (cols as f32 - 1.0)) / cols as f32).max(0.0);
        let cell_h = ((content.height() - row_spacing * (self.rows as f32 - 1.0))
            / self.rows as f32)
            .max(0.0);

        for (i, child) in self.base.children_mut().iter_mut().enumerate() {
            if i >= capacity {
                break;
            }
            let row = i / cols;
            let col = i % cols;
            let rect = Rect::new(
                content.left() + col as f32 * (cell_w + col_spacing),
                content.top() + row as f32 * (cell_h + row_spacing),
                cell_w,
                cell_h,
            );
            set_child_geometry(arena, child, rect);
            if let LayoutChild::Nested(layout) = child {
                layout.update_layout(arena);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::testing::MockWidget;
    use crate::widget::{Widget, WidgetId};

    fn geometry_of(arena: &WidgetArena, id: WidgetId) -> Rect {
        arena.get(id).unwrap().widget_base().geometry()
    }

    #[test]
    fn test_row_major_fill() {
        let mut arena = WidgetArena::new();
        let ids: Vec<_> = (0..5)
            .map(|_| arena.insert(MockWidget::new(Rect::ZERO)))
            .collect();

        let mut grid = GridLayout::new(Rect::new(0.0, 0.0, 320.0, 210.0), 2, 3)
            .with_padding(0.0)
            .with_spacing(10.0);
        for &id in &ids {
            grid.add_widget(id);
        }
        grid.update_layout(&mut arena);

        // cells are 100 x 100.
        assert_eq!(geometry_of(&arena, ids[0]), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(geometry_of(&arena, ids[2]), Rect::new(220.0, 0.0, 100.0, 100.0));
        // Fifth child wraps to row 1, column 1.
        assert_eq!(
            geometry_of(&arena, ids[4]),
            Rect::new(110.0, 110.0, 100.0, 100.0)
        );
    }

    #[test]
    fn test_children_beyond_capacity_keep_geometry() {
        let mut arena = WidgetArena::new();
        let marker = Rect::new(-1.0, -1.0, 7.0, 7.0);
        let ids: Vec<_> = (0..5)
            .map(|_| arena.insert(MockWidget::new(marker)))
            .collect();

        let mut grid = GridLayout::new(Rect::new(0.0, 0.0, 100.0, 100.0), 2, 2).with_padding(0.0);
        for &id in &ids {
            grid.add_widget(id);
        }
        grid.update_layout(&mut arena);

        // Capacity is 4; the fifth child is untouched.
        assert_eq!(geometry_of(&arena, ids[4]), marker);
        assert_ne!(geometry_of(&arena, ids[3]), marker);
    }

    #[test]
    fn test_independent_row_and_col_spacing() {
        let mut arena = WidgetArena::new();
        let ids: Vec<_> = (0..4)
            .map(|_| arena.insert(MockWidget::new(Rect::ZERO)))
            .collect();

        let mut grid = GridLayout::new(Rect::new(0.0, 0.0, 110.0, 100.0), 2, 2)
            .with_padding(0.0)
            .with_row_spacing(0.0)
            .with_col_spacing(10.0);
        for &id in &ids {
            grid.add_widget(id);
        }
        grid.update_layout(&mut arena);

        assert_eq!(geometry_of(&arena, ids[1]).left(), 60.0);
        assert_eq!(geometry_of(&arena, ids[2]).top(), 50.0);
        assert_eq!(geometry_of(&arena, ids[0]), Rect::new(0.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn test_zero_dimension_grid_is_noop() {
        let mut arena = WidgetArena::new();
        let id = arena.insert(MockWidget::new(Rect::ZERO));

        let mut grid = GridLayout::new(Rect::new(0.0, 0.0, 100.0, 100.0), 0, 3);
        grid.add_widget(id);
        grid.update_layout(&mut arena); // Must not divide by zero.
        assert_eq!(geometry_of(&arena, id), Rect::ZERO);
    }
}
