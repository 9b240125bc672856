//! Clickable button.

use std::any::Any;

use trellis_core::{Color, Point, Signal, Stroke};

use crate::widget::base::WidgetBase;
use crate::widget::events::{FrameContext, MouseButton, WidgetEvent};
use crate::widget::traits::{PaintContext, Widget};

/// A push button that emits [`clicked`](Self::clicked) on press.
pub struct PushButton {
    base: WidgetBase,
    text: String,
    pressed: bool,
    background: Color,
    background_hover: Color,
    background_pressed: Color,
    text_color: Color,
    font_size: f32,
    /// Emitted on every primary-button press inside the button.
    pub clicked: Signal<()>,
}

impl PushButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            text: text.into(),
            pressed: false,
            background: Color::from_rgb8(0x3a, 0x3a, 0x3a),
            background_hover: Color::from_rgb8(0x4a, 0x4a, 0x4a),
            background_pressed: Color::from_rgb8(0x2a, 0x2a, 0x2a),
            text_color: Color::WHITE,
            font_size: 14.0,
            clicked: Signal::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the primary button is currently held on this widget.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn handle_mouse_press(&mut self, button: MouseButton, pos: Point) -> bool {
        if button != MouseButton::Left || !self.base.geometry().contains(pos) {
            return false;
        }
        self.pressed = true;
        tracing::trace!(target: "trellis::widgets", text = %self.text, "button clicked");
        self.clicked.emit(());
        true
    }

    fn handle_mouse_release(&mut self) -> bool {
        let was_pressed = self.pressed;
        self.pressed = false;
        was_pressed
    }
}

impl Widget for PushButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = self.base.geometry();
        let background = if self.pressed {
            self.background_pressed
        } else if self.base.is_hovered() {
            self.background_hover
        } else {
            self.background
        };

        let painter = ctx.painter();
        painter.fill_rect(rect, background);
        if self.base.is_focused() {
            painter.stroke_rect(rect, &Stroke::new(Color::LIGHT_GRAY, 1.0));
        }

        let text_w = painter.text_width(&self.text, self.font_size);
        let pos = Point::new(
            rect.center().x - text_w / 2.0,
            rect.center().y - self.font_size / 2.0,
        );
        painter.draw_text(&self.text, pos, self.text_color, self.font_size);
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
            WidgetEvent::MousePress { button, pos } => self.handle_mouse_press(button, pos),
            WidgetEvent::MouseRelease { .. } => self.handle_mouse_release(),
            WidgetEvent::MouseMove { pos } => {
                self.base.set_hovered(self.base.geometry().contains(pos));
                false
            }
            WidgetEvent::FocusOut => {
                self.pressed = false;
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use trellis_core::Rect;

    fn button_at(rect: Rect) -> PushButton {
        let mut button = PushButton::new("ok");
        button.widget_base_mut().set_geometry(rect);
        button
    }

    #[test]
    fn test_press_inside_emits_clicked() {
        let mut button = button_at(Rect::new(0.0, 0.0, 100.0, 30.0));
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        button.clicked.connect(move |_| c.set(c.get() + 1));

        let frame = FrameContext::default();
        let consumed = button.event(
            &WidgetEvent::MousePress {
                button: MouseButton::Left,
                pos: Point::new(50.0, 15.0),
            },
            &frame,
        );

        assert!(consumed);
        assert!(button.is_pressed());
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut button = button_at(Rect::new(0.0, 0.0, 100.0, 30.0));
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        button.clicked.connect(move |_| c.set(c.get() + 1));

        let frame = FrameContext::default();
        let consumed = button.event(
            &WidgetEvent::MousePress {
                button: MouseButton::Left,
                pos: Point::new(200.0, 15.0),
            },
            &frame,
        );

        assert!(!consumed);
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_release_clears_pressed_state() {
        let mut button = button_at(Rect::new(0.0, 0.0, 100.0, 30.0));
        let frame = FrameContext::default();

        button.event(
            &WidgetEvent::MousePress {
                button: MouseButton::Left,
                pos: Point::new(10.0, 10.0),
            },
            &frame,
        );
        assert!(button.is_pressed());

        // Release arrives even if the cursor has left the button.
        button.event(
            &WidgetEvent::MouseRelease {
                button: MouseButton::Left,
                pos: Point::new(500.0, 500.0),
            },
            &frame,
        );
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_disabled_button_declines_input() {
        let mut button = button_at(Rect::new(0.0, 0.0, 100.0, 30.0));
        button.widget_base_mut().set_enabled(false);

        let frame = FrameContext::default();
        let consumed = button.event(
            &WidgetEvent::MousePress {
                button: MouseButton::Left,
                pos: Point::new(10.0, 10.0),
            },
            &frame,
        );
        assert!(!consumed);
    }
}
