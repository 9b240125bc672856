//! Integer spin box.

use std::any::Any;

use trellis_core::{Color, Point, Rect, Signal, Stroke};

use crate::widget::base::WidgetBase;
use crate::widget::events::{FrameContext, MouseButton, WidgetEvent};
use crate::widget::keyboard::Key;
use crate::widget::traits::{PaintContext, Widget};

const ARROW_COLUMN_WIDTH: f32 = 16.0;

/// An integer value with up/down arrow zones and keyboard stepping.
///
/// Stepping saturates at the bounds without emitting; only an actual value
/// change fires [`value_changed`](Self::value_changed).
pub struct SpinBox {
    base: WidgetBase,
    value: i32,
    min: i32,
    max: i32,
    step: i32,
    background: Color,
    text_color: Color,
    font_size: f32,
    /// Emitted with the new value whenever it changes.
    pub value_changed: Signal<i32>,
}

impl SpinBox {
    pub fn new(min: i32, max: i32) -> Self {
        let max = max.max(min);
        Self {
            base: WidgetBase::new(),
            value: min,
            min,
            max,
            step: 1,
            background: Color::from_rgb8(0x1e, 0x1e, 0x1e),
            text_color: Color::WHITE,
            font_size: 14.0,
            value_changed: Signal::new(),
        }
    }

    pub fn with_value(mut self, value: i32) -> Self {
        self.value = value.clamp(self.min, self.max);
        self
    }

    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step.max(1);
        self
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Set the value, clamping to the range and emitting on change.
    pub fn set_value(&mut self, value: i32) {
        let value = value.clamp(self.min, self.max);
        if value == self.value {
            return;
        }
        self.value = value;
        self.value_changed.emit(value);
    }

    /// Increment by one step, saturating at the maximum.
    pub fn step_up(&mut self) {
        self.set_value(self.value.saturating_add(self.step));
    }

    /// Decrement by one step, saturating at the minimum.
    pub fn step_down(&mut self) {
        self.set_value(self.value.saturating_sub(self.step));
    }

    fn arrow_column(&self) -> Rect {
        let rect = self.base.geometry();
        Rect::new(
            rect.right() - ARROW_COLUMN_WIDTH,
            rect.top(),
            ARROW_COLUMN_WIDTH,
            rect.height(),
        )
    }

    fn up_zone(&self) -> Rect {
        let column = self.arrow_column();
        Rect::new(
            column.left(),
            column.top(),
            column.width(),
            column.height() / 2.0,
        )
    }

    fn down_zone(&self) -> Rect {
        let column = self.arrow_column();
        Rect::new(
            column.left(),
            column.center().y,
            column.width(),
            column.height() / 2.0,
        )
    }

    fn handle_mouse_press(&mut self, pos: Point) -> bool {
        if !self.base.geometry().contains(pos) {
            return false;
        }
        if self.up_zone().contains(pos) {
            self.step_up();
        } else if self.down_zone().contains(pos) {
            self.step_down();
        }
        // Presses in the text area still claim focus.
        true
    }

    fn paint_arrows(&self, ctx: &mut PaintContext<'_>) {
        let stroke = Stroke::new(self.text_color, 1.0);
        let up = self.up_zone().deflate(5.0);
        let down = self.down_zone().deflate(5.0);
        let painter = ctx.painter();

        painter.draw_line(Point::new(up.left(), up.bottom()), Point::new(up.center().x, up.top()), &stroke);
        painter.draw_line(Point::new(up.center().x, up.top()), Point::new(up.right(), up.bottom()), &stroke);
        painter.draw_line(Point::new(down.left(), down.top()), Point::new(down.center().x, down.bottom()), &stroke);
        painter.draw_line(Point::new(down.center().x, down.bottom()), Point::new(down.right(), down.top()), &stroke);
    }
}

impl Widget for SpinBox {
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

        let text = self.value.to_string();
        let pos = Point::new(
            rect.left() + 6.0,
            rect.center().y - self.font_size / 2.0,
        );
        painter.draw_text(&text, pos, self.text_color, self.font_size);

        self.paint_arrows(ctx);
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
            WidgetEvent::KeyPress { key: Key::ArrowUp, .. } => {
                self.step_up();
                true
            }
            WidgetEvent::KeyPress { key: Key::ArrowDown, .. } => {
                self.step_down();
                true
            }
            WidgetEvent::MouseMove { pos } => {
                self.base.set_hovered(self.base.geometry().contains(pos));
                false
            }
            _ => false,
        }
    }
}
