//! Drop-down selection box.

use std::any::Any;

use trellis_core::{Color, Point, Rect, Signal, Stroke};

use crate::widget::base::WidgetBase;
use crate::widget::events::{FrameContext, MouseButton, WidgetEvent};
use crate::widget::keyboard::Key;
use crate::widget::traits::{PaintContext, Widget};

const ITEM_HEIGHT: f32 = 24.0;

/// A closed box showing the current choice, expanding into a drop-down list.
///
/// While expanded the widget reports [`wants_overlay`](Widget::wants_overlay),
/// which makes the router paint it above every sibling and offer it presses
/// first. A press outside both the box and the drop-down collapses the list
/// without consuming the press, so whatever was under the pointer still
/// receives it.
pub struct ComboBox {
    base: WidgetBase,
    items: Vec<String>,
    selected: Option<usize>,
    expanded: bool,
    item_height: f32,
    background: Color,
    highlight: Color,
    text_color: Color,
    font_size: f32,
    /// Emitted with the newly selected index.
    pub selection_changed: Signal<usize>,
}

impl ComboBox {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            items,
            selected: None,
            expanded: false,
            item_height: ITEM_HEIGHT,
            background: Color::from_rgb8(0x2a, 0x2a, 0x2a),
            highlight: Color::from_rgb8(0x3d, 0x5a, 0x80),
            text_color: Color::WHITE,
            font_size: 14.0,
            selection_changed: Signal::new(),
        }
    }

    pub fn with_selected(mut self, index: usize) -> Self {
        if index < self.items.len() {
            self.selected = Some(index);
        }
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Text of the current selection.
    pub fn selected_text(&self) -> Option<&str> {
        self.selected.map(|i| self.items[i].as_str())
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Select `index`, emitting on change. Out-of-range indices are no-ops.
    pub fn set_selected(&mut self, index: usize) {
        if index >= self.items.len() || self.selected == Some(index) {
            return;
        }
        self.selected = Some(index);
        self.selection_changed.emit(index);
    }

    /// Replace the item list, clearing a now-dangling selection.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        if matches!(self.selected, Some(i) if i >= self.items.len()) {
            self.selected = None;
        }
        self.expanded = false;
    }

    fn dropdown_rect(&self) -> Rect {
        let rect = self.base.geometry();
        Rect::new(
            rect.left(),
            rect.bottom(),
            rect.width(),
            self.item_height * self.items.len() as f32,
        )
    }

    fn item_at(&self, pos: Point) -> Option<usize> {
        let dropdown = self.dropdown_rect();
        if !dropdown.contains(pos) {
            return None;
        }
        let index = ((pos.y - dropdown.top()) / self.item_height) as usize;
        (index < self.items.len()).then_some(index)
    }

    fn handle_mouse_press(&mut self, pos: Point) -> bool {
        if self.base.geometry().contains(pos) {
            self.expanded = !self.expanded;
            return true;
        }
        if !self.expanded {
            return false;
        }
        self.expanded = false;
        match self.item_at(pos) {
            Some(index) => {
                self.set_selected(index);
                true
            }
            // Outside press collapses but stays unconsumed so the router
            // can route it to whatever is underneath.
            None => false,
        }
    }

    fn paint_dropdown(&self, ctx: &mut PaintContext<'_>) {
        let dropdown = self.dropdown_rect();
        let cursor = ctx.frame().cursor_pos;
        let hover = self.item_at(cursor);
        let painter = ctx.painter();

        painter.fill_rect(dropdown, self.background);
        painter.stroke_rect(dropdown, &Stroke::new(Color::GRAY, 1.0));

        for (i, item) in self.items.iter().enumerate() {
            let row = Rect::new(
                dropdown.left(),
                dropdown.top() + i as f32 * self.item_height,
                dropdown.width(),
                self.item_height,
            );
            if hover == Some(i) || self.selected == Some(i) {
                painter.fill_rect(row, self.highlight);
            }
            let pos = Point::new(row.left() + 6.0, row.center().y - self.font_size / 2.0);
            painter.draw_text(item, pos, self.text_color, self.font_size);
        }
    }
}

impl Widget for ComboBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = self.base.geometry();
        let painter = ctx.painter();

        painter.fill_rect(rect, self.background);
        let border_color = if self.base.is_focused() {
            Color::from_rgb8(0x6a, 0xa8, 0xf0)
        } else {
            Color::GRAY
        };
        painter.stroke_rect(rect, &Stroke::new(border_color, 1.0));

        if let Some(text) = self.selected_text() {
            let pos = Point::new(rect.left() + 6.0, rect.center().y - self.font_size / 2.0);
            painter.draw_text(text, pos, self.text_color, self.font_size);
        }

        // Chevron on the right edge, pointing down when closed.
        let cx = rect.right() - 12.0;
        let cy = rect.center().y;
        let stroke = Stroke::new(self.text_color, 1.0);
        let dir = if self.expanded { -3.0 } else { 3.0 };
        painter.draw_line(Point::new(cx - 5.0, cy - dir), Point::new(cx, cy + dir), &stroke);
        painter.draw_line(Point::new(cx, cy + dir), Point::new(cx + 5.0, cy - dir), &stroke);

        if self.expanded {
            self.paint_dropdown(ctx);
        }
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
                self.handle_mouse_press(pos)
            }
            WidgetEvent::KeyPress { key: Key::Escape, .. } if self.expanded => {
                self.expanded = false;
                true
            }
            WidgetEvent::FocusOut => {
                self.expanded = false;
                false
            }
            WidgetEvent::MouseMove { pos } => {
                self.base.set_hovered(self.base.geometry().contains(pos));
                false
            }
            _ => false,
        }
    }

    fn wants_overlay(&self) -> bool {
        self.expanded
    }

    fn hit_test(&self, point: Point) -> bool {
        if !self.base.is_visible() {
            return false;
        }
        self.base.geometry().contains(point)
            || (self.expanded && self.dropdown_rect().contains(point))
    }
}
