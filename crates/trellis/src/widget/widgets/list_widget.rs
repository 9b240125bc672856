//! Scrollable selection list.

use std::any::Any;

use trellis_core::{Color, Point, Rect, Signal, Stroke};

use crate::widget::base::WidgetBase;
use crate::widget::events::{FrameContext, MouseButton, WidgetEvent};
use crate::widget::keyboard::Key;
use crate::widget::traits::{PaintContext, Widget};

const SCROLLBAR_WIDTH: f32 = 8.0;
const MIN_THUMB_HEIGHT: f32 = 16.0;

/// A vertically scrolling list of selectable rows.
///
/// Rows have a uniform height; the scroll offset is a whole row index so
/// rows never straddle the top edge. Arrow keys move the selection and keep
/// it scrolled into view.
pub struct ListWidget {
    base: WidgetBase,
    items: Vec<String>,
    item_height: f32,
    scroll_offset: usize,
    selected: Option<usize>,
    hover_index: Option<usize>,
    background: Color,
    highlight: Color,
    hover_color: Color,
    text_color: Color,
    font_size: f32,
    /// Emitted with the newly selected index.
    pub selection_changed: Signal<usize>,
}

impl ListWidget {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            items,
            item_height: 20.0,
            scroll_offset: 0,
            selected: None,
            hover_index: None,
            background: Color::from_rgb8(0x1e, 0x1e, 0x1e),
            highlight: Color::from_rgb8(0x3d, 0x5a, 0x80),
            hover_color: Color::from_rgb8(0x2a, 0x2a, 0x2a),
            text_color: Color::WHITE,
            font_size: 14.0,
            selection_changed: Signal::new(),
        }
    }

    pub fn with_item_height(mut self, item_height: f32) -> Self {
        self.item_height = item_height.max(1.0);
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Index of the row under the cursor, if any.
    pub fn hover_index(&self) -> Option<usize> {
        self.hover_index
    }

    /// Number of rows that fit in the widget.
    pub fn visible_count(&self) -> usize {
        (self.base.geometry().height() / self.item_height).floor() as usize
    }

    /// Select `index`, emitting on change. Out-of-range indices are no-ops.
    pub fn set_selected(&mut self, index: usize) {
        if index >= self.items.len() || self.selected == Some(index) {
            return;
        }
        self.selected = Some(index);
        self.selection_changed.emit(index);
    }

    /// Scroll by a signed number of rows, clamped to the valid range.
    pub fn scroll_by(&mut self, rows: i32) {
        let max_offset = self.max_scroll_offset();
        let next = self.scroll_offset as i64 + rows as i64;
        self.scroll_offset = next.clamp(0, max_offset as i64) as usize;
    }

    /// Scroll the minimum amount that brings `index` into view.
    pub fn scroll_to(&mut self, index: usize) {
        let visible = self.visible_count().max(1);
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + visible {
            self.scroll_offset = index + 1 - visible;
        }
    }

    fn max_scroll_offset(&self) -> usize {
        self.items.len().saturating_sub(self.visible_count())
    }

    fn needs_scrollbar(&self) -> bool {
        self.items.len() > self.visible_count()
    }

    /// The draggable scrollbar thumb, when the list overflows.
    fn thumb_rect(&self) -> Option<Rect> {
        if !self.needs_scrollbar() {
            return None;
        }
        let rect = self.base.geometry();
        let track_height = rect.height();
        let visible = self.visible_count() as f32;
        let total = self.items.len() as f32;

        let thumb_height = (track_height * visible / total).max(MIN_THUMB_HEIGHT);
        let free_travel = track_height - thumb_height;
        let max_offset = self.max_scroll_offset() as f32;
        let position = if max_offset > 0.0 {
            self.scroll_offset as f32 / max_offset
        } else {
            0.0
        };

        Some(Rect::new(
            rect.right() - SCROLLBAR_WIDTH,
            rect.top() + free_travel * position,
            SCROLLBAR_WIDTH,
            thumb_height,
        ))
    }

    fn row_at(&self, pos: Point) -> Option<usize> {
        let rect = self.base.geometry();
        if !rect.contains(pos) {
            return None;
        }
        // The scrollbar strip is not selectable.
        if self.needs_scrollbar() && pos.x >= rect.right() - SCROLLBAR_WIDTH {
            return None;
        }
        let visual = ((pos.y - rect.top()) / self.item_height) as usize;
        if visual >= self.visible_count() {
            return None;
        }
        let index = self.scroll_offset + visual;
        (index < self.items.len()).then_some(index)
    }

    fn handle_key(&mut self, key: Key) -> bool {
        let step: i32 = match key {
            Key::ArrowUp => -1,
            Key::ArrowDown => 1,
            Key::PageUp => -(self.visible_count().max(1) as i32),
            Key::PageDown => self.visible_count().max(1) as i32,
            _ => return false,
        };
        if self.items.is_empty() {
            return true;
        }
        let current = self.selected.unwrap_or(0) as i64;
        let next =
            (current + step as i64).clamp(0, self.items.len() as i64 - 1) as usize;
        self.set_selected(next);
        self.scroll_to(next);
        true
    }

    fn paint_rows(&self, ctx: &mut PaintContext<'_>) {
        let rect = self.base.geometry();
        let visible = self.visible_count();
        let painter = ctx.painter();

        let end = (self.scroll_offset + visible).min(self.items.len());
        for index in self.scroll_offset..end {
            let visual = index - self.scroll_offset;
            let row = Rect::new(
                rect.left(),
                rect.top() + visual as f32 * self.item_height,
                rect.width(),
                self.item_height,
            );
            if self.selected == Some(index) {
                painter.fill_rect(row, self.highlight);
            } else if self.hover_index == Some(index) {
                painter.fill_rect(row, self.hover_color);
            }
            let pos = Point::new(row.left() + 6.0, row.center().y - self.font_size / 2.0);
            painter.draw_text(&self.items[index], pos, self.text_color, self.font_size);
        }
    }
}

impl Widget for ListWidget {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = self.base.geometry();
        ctx.painter().fill_rect(rect, self.background);

        self.paint_rows(ctx);

        let painter = ctx.painter();
        if let Some(thumb) = self.thumb_rect() {
            painter.fill_rect(thumb, Color::GRAY);
        }
        painter.stroke_rect(rect, &Stroke::new(Color::GRAY, 1.0));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn event(&mut self, event: &WidgetEvent, _frame: &FrameContext) -> bool {
        if !self.base.is_enabled() {
            return false;
        }
        match *event {
            WidgetEvent::MousePress { button, pos } if button == MouseButton::Left => {
                if !self.base.geometry().contains(pos) {
                    return false;
                }
                if let Some(index) = self.row_at(pos) {
                    self.set_selected(index);
                }
                true
            }
            WidgetEvent::KeyPress { key, .. } => self.handle_key(key),
            WidgetEvent::MouseMove { pos } => {
                self.base.set_hovered(self.base.geometry().contains(pos));
                self.hover_index = self.row_at(pos);
                false
            }
            _ => false,
        }
    }
}
