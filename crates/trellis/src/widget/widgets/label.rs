//! Static text display.

use std::any::Any;

use trellis_core::{Color, Point};

use crate::widget::base::WidgetBase;
use crate::widget::traits::{PaintContext, Widget};

/// A non-interactive line of text.
pub struct Label {
    base: WidgetBase,
    text: String,
    color: Color,
    font_size: f32,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            text: text.into(),
            color: Color::WHITE,
            font_size: 14.0,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Widget for Label {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = self.base.geometry();
        let pos = Point::new(rect.left(), rect.center().y - self.font_size / 2.0);
        ctx.painter().draw_text(&self.text, pos, self.color, self.font_size);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
