//! Draggable value slider.

use std::any::Any;

use trellis_core::{Color, Point, Rect, Signal, Stroke};

use crate::widget::base::WidgetBase;
use crate::widget::events::{FrameContext, MouseButton, WidgetEvent};
use crate::widget::traits::{PaintContext, Widget};

const THUMB_RADIUS: f32 = 8.0;
const TRACK_THICKNESS: f32 = 4.0;

/// A horizontal slider over a numeric range.
///
/// Pressing anywhere on the widget jumps the value to the pointer and
/// starts a drag; the drag then follows the pointer even outside the
/// widget's bounds, ending on release. When both ends of the range are
/// whole numbers the value snaps to integers, so a drag emits
/// [`value_changed`](Self::value_changed) once per distinct step rather
/// than once per pixel.
pub struct Slider {
    base: WidgetBase,
    min: f32,
    max: f32,
    value: f32,
    dragging: bool,
    track_color: Color,
    fill_color: Color,
    thumb_color: Color,
    /// Emitted with the new value whenever it changes.
    pub value_changed: Signal<f32>,
}

impl Slider {
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            base: WidgetBase::new(),
            min,
            max: max.max(min),
            value: min,
            dragging: false,
            track_color: Color::from_rgb8(0x2a, 0x2a, 0x2a),
            fill_color: Color::from_rgb8(0x6a, 0xa8, 0xf0),
            thumb_color: Color::LIGHT_GRAY,
            value_changed: Signal::new(),
        }
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.value = self.snap(value.clamp(self.min, self.max));
        self
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Set the value, clamping to the range and emitting on change.
    pub fn set_value(&mut self, value: f32) {
        let value = self.snap(value.clamp(self.min, self.max));
        if value == self.value {
            return;
        }
        self.value = value;
        self.value_changed.emit(value);
    }

    /// Integer snapping applies only to whole-number ranges.
    fn snap(&self, value: f32) -> f32 {
        if self.min.fract() == 0.0 && self.max.fract() == 0.0 {
            value.round()
        } else {
            value
        }
    }

    fn value_from_x(&self, x: f32) -> f32 {
        let rect = self.base.geometry();
        if rect.width() <= 0.0 {
            return self.min;
        }
        let ratio = ((x - rect.left()) / rect.width()).clamp(0.0, 1.0);
        self.min + ratio * (self.max - self.min)
    }

    fn thumb_center(&self) -> Point {
        let rect = self.base.geometry();
        let span = self.max - self.min;
        let ratio = if span > 0.0 {
            (self.value - self.min) / span
        } else {
            0.0
        };
        Point::new(rect.left() + ratio * rect.width(), rect.center().y)
    }

    fn track_rect(&self) -> Rect {
        let rect = self.base.geometry();
        Rect::new(
            rect.left(),
            rect.center().y - TRACK_THICKNESS / 2.0,
            rect.width(),
            TRACK_THICKNESS,
        )
    }
}

impl Widget for Slider {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let track = self.track_rect();
        let thumb = self.thumb_center();
        let painter = ctx.painter();

        painter.fill_rect(track, self.track_color);
        let mut fill = track;
        fill.size.width = thumb.x - track.left();
        painter.fill_rect(fill, self.fill_color);

        painter.fill_circle(thumb, THUMB_RADIUS, self.thumb_color);
        if self.base.is_focused() {
            painter.stroke_circle(thumb, THUMB_RADIUS + 2.0, &Stroke::new(Color::WHITE, 1.0));
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn hit_test(&self, point: Point) -> bool {
        if !self.base.is_visible() {
            return false;
        }
        // The thumb sticks out above and below the track rect.
        self.base.geometry().contains(point)
            || self.thumb_center().distance_to(point) <= THUMB_RADIUS + 2.0
    }

    fn event(&mut self, event: &WidgetEvent, _frame: &FrameContext) -> bool {
        if !self.base.is_enabled() {
            return false;
        }
        match *event {
            WidgetEvent::MousePress { button, pos } if button == MouseButton::Left => {
                if !self.hit_test(pos) {
                    return false;
                }
                self.dragging = true;
                self.set_value(self.value_from_x(pos.x));
                true
            }
            WidgetEvent::MouseMove { pos } => {
                self.base.set_hovered(self.base.geometry().contains(pos));
                if self.dragging {
                    self.set_value(self.value_from_x(pos.x));
                    true
                } else {
                    false
                }
            }
            WidgetEvent::MouseRelease { button, .. } if button == MouseButton::Left => {
                let was_dragging = self.dragging;
                self.dragging = false;
                was_dragging
            }
            WidgetEvent::FocusOut => {
                self.dragging = false;
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn slider_at(rect: Rect, min: f32, max: f32) -> Slider {
        let mut slider = Slider::new(min, max);
        slider.widget_base_mut().set_geometry(rect);
        slider
    }

    fn press(x: f32, y: f32) -> WidgetEvent {
        WidgetEvent::MousePress {
            button: MouseButton::Left,
            pos: Point::new(x, y),
        }
    }

    fn drag(x: f32, y: f32) -> WidgetEvent {
        WidgetEvent::MouseMove {
            pos: Point::new(x, y),
        }
    }

    #[test]
    fn test_press_jumps_to_pointer() {
        let mut slider = slider_at(Rect::new(0.0, 0.0, 200.0, 20.0), 0.0, 100.0);
        let frame = FrameContext::default();

        assert!(slider.event(&press(100.0, 10.0), &frame));
        assert!(slider.is_dragging());
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn test_drag_outside_bounds_clamps() {
        let mut slider = slider_at(Rect::new(0.0, 0.0, 200.0, 20.0), 0.0, 100.0);
        let frame = FrameContext::default();

        slider.event(&press(100.0, 10.0), &frame);
        slider.event(&drag(5000.0, 300.0), &frame);
        assert_eq!(slider.value(), 100.0);

        slider.event(&drag(-5000.0, 300.0), &frame);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn test_one_emission_per_distinct_value() {
        let mut slider = slider_at(Rect::new(0.0, 0.0, 200.0, 20.0), 0.0, 100.0);
        let values = Rc::new(RefCell::new(Vec::new()));
        let v = values.clone();
        slider.value_changed.connect(move |&x| v.borrow_mut().push(x));

        let frame = FrameContext::default();
        slider.event(&press(100.0, 10.0), &frame);
        // Sub-pixel moves that round to the same integer emit nothing.
        slider.event(&drag(100.4, 10.0), &frame);
        slider.event(&drag(100.8, 10.0), &frame);
        slider.event(&drag(102.0, 10.0), &frame);

        assert_eq!(*values.borrow(), vec![50.0, 51.0]);
    }

    #[test]
    fn test_release_ends_drag() {
        let mut slider = slider_at(Rect::new(0.0, 0.0, 200.0, 20.0), 0.0, 100.0);
        let frame = FrameContext::default();

        slider.event(&press(100.0, 10.0), &frame);
        slider.event(
            &WidgetEvent::MouseRelease {
                button: MouseButton::Left,
                pos: Point::new(100.0, 10.0),
            },
            &frame,
        );
        assert!(!slider.is_dragging());

        // Moves after release no longer change the value.
        slider.event(&drag(150.0, 10.0), &frame);
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn test_fractional_range_skips_snapping() {
        let mut slider = slider_at(Rect::new(0.0, 0.0, 100.0, 20.0), 0.0, 1.5);
        let frame = FrameContext::default();

        slider.event(&press(50.0, 10.0), &frame);
        assert_eq!(slider.value(), 0.75);
    }
}
