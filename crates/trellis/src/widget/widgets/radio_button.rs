//! Radio button widget.

use std::any::Any;

use trellis_core::{Color, Point, Signal, Stroke};

use crate::widget::arena::WidgetId;
use crate::widget::base::WidgetBase;
use crate::widget::events::{FrameContext, MouseButton, WidgetEvent};
use crate::widget::traits::{PaintContext, Widget};

use super::radio_group::RadioGroup;

const INDICATOR_RADIUS: f32 = 8.0;

/// One option in a [`RadioGroup`].
///
/// The button holds no selected flag of its own; selection lives entirely in
/// the group, which is what keeps members mutually exclusive.
pub struct RadioButton {
    base: WidgetBase,
    text: String,
    group: RadioGroup,
    text_color: Color,
    font_size: f32,
    /// Emitted when a click selects this button (not on reselection).
    pub selected: Signal<()>,
}

impl RadioButton {
    pub fn new(text: impl Into<String>, group: RadioGroup) -> Self {
        Self {
            base: WidgetBase::new(),
            text: text.into(),
            group,
            text_color: Color::WHITE,
            font_size: 14.0,
            selected: Signal::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn group(&self) -> &RadioGroup {
        &self.group
    }

    /// Whether this button is the group's current selection.
    pub fn is_selected(&self) -> bool {
        match self.base.id() {
            Some(id) => self.group.selected() == Some(id),
            None => false,
        }
    }

    /// Select this button in its group.
    pub fn select(&mut self) {
        if let Some(id) = self.base.id() {
            if self.group.selected() != Some(id) {
                self.group.select(id);
                self.selected.emit(());
            }
        }
    }

    fn indicator_center(&self) -> Point {
        let rect = self.base.geometry();
        Point::new(rect.left() + INDICATOR_RADIUS, rect.center().y)
    }
}

impl Widget for RadioButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let center = self.indicator_center();
        let painter = ctx.painter();

        painter.fill_circle(center, INDICATOR_RADIUS, Color::from_rgb8(0x2a, 0x2a, 0x2a));
        painter.stroke_circle(center, INDICATOR_RADIUS, &Stroke::new(Color::LIGHT_GRAY, 1.0));
        if self.is_selected() {
            painter.fill_circle(center, INDICATOR_RADIUS - 4.0, Color::from_rgb8(0x6a, 0xa8, 0xf0));
        }

        let text_pos = Point::new(
            center.x + INDICATOR_RADIUS + 6.0,
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
                self.select();
                true
            }
            WidgetEvent::MouseMove { pos } => {
                self.base.set_hovered(self.base.geometry().contains(pos));
                false
            }
            _ => false,
        }
    }

    fn attached(&mut self, id: WidgetId) {
        self.group.register(id);
    }
}
