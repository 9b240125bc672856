//! Toggleable check box.

use std::any::Any;

use trellis_core::{Color, Point, Rect, Signal, Stroke};

use crate::widget::base::WidgetBase;
use crate::widget::events::{FrameContext, MouseButton, WidgetEvent};
use crate::widget::traits::{PaintContext, Widget};

const INDICATOR_SIZE: f32 = 16.0;

/// A labelled check box.
pub struct CheckBox {
    base: WidgetBase,
    text: String,
    checked: bool,
    text_color: Color,
    font_size: f32,
    /// Emitted with the new checked state whenever it changes.
    pub toggled: Signal<bool>,
}

impl CheckBox {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            text: text.into(),
            checked: false,
            text_color: Color::WHITE,
            font_size: 14.0,
            toggled: Signal::new(),
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state, emitting [`toggled`](Self::toggled) on change.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked == checked {
            return;
        }
        self.checked = checked;
        self.toggled.emit(checked);
    }

    /// Flip the checked state.
    pub fn toggle(&mut self) {
        self.set_checked(!self.checked);
    }

    fn indicator_rect(&self) -> Rect {
        let rect = self.base.geometry();
        Rect::new(
            rect.left(),
            rect.center().y - INDICATOR_SIZE / 2.0,
            INDICATOR_SIZE,
            INDICATOR_SIZE,
        )
    }
}

impl Widget for CheckBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let indicator = self.indicator_rect();
        let painter = ctx.painter();

        painter.fill_rect(indicator, Color::from_rgb8(0x2a, 0x2a, 0x2a));
        painter.stroke_rect(indicator, &Stroke::new(Color::LIGHT_GRAY, 1.0));
        if self.checked {
            painter.fill_rect(indicator.deflate(4.0), Color::from_rgb8(0x6a, 0xa8, 0xf0));
        }

        let text_pos = Point::new(
            indicator.right() + 6.0,
            self.base.geometry().center().y - self.font_size / 2.0,
        );
        painter.draw_text(&self.text, text_pos, self.text_color, self.font_size);
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
            WidgetEvent::MousePress { button, pos }
                if button == MouseButton::Left && self.base.geometry().contains(pos) =>
            {
                self.toggle();
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
