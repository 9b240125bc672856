//! Animated progress bar.

use std::any::Any;

use trellis_core::{Color, Stroke};

use crate::widget::base::WidgetBase;
use crate::widget::traits::{PaintContext, Widget};

/// Snap threshold for the displayed fraction.
const SNAP_EPSILON: f32 = 0.001;

/// A horizontal progress bar with an eased fill animation.
///
/// [`set_value`](Self::set_value) moves the target instantly; the painted
/// fill chases it over subsequent ticks so jumps read as motion. The easing
/// is exponential in wall-clock time, which keeps the animation identical
/// across frame rates.
pub struct ProgressBar {
    base: WidgetBase,
    /// Target fraction, 0.0 to 1.0.
    value: f32,
    /// Painted fraction, trailing `value`.
    displayed: f32,
    /// Easing rate in units of "fraction of remaining gap per second".
    animation_speed: f32,
    track_color: Color,
    fill_color: Color,
}

impl ProgressBar {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            value: 0.0,
            displayed: 0.0,
            animation_speed: 8.0,
            track_color: Color::from_rgb8(0x2a, 0x2a, 0x2a),
            fill_color: Color::from_rgb8(0x6a, 0xa8, 0xf0),
        }
    }

    pub fn with_animation_speed(mut self, speed: f32) -> Self {
        self.animation_speed = speed.max(0.0);
        self
    }

    /// Target fraction.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the target fraction, clamped to 0.0..=1.0.
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
    }

    /// Currently painted fraction.
    pub fn displayed(&self) -> f32 {
        self.displayed
    }

    /// Skip the animation and paint the target immediately.
    pub fn snap_to_value(&mut self) {
        self.displayed = self.value;
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ProgressBar {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = self.base.geometry();
        let painter = ctx.painter();

        painter.fill_rect(rect, self.track_color);
        let mut fill = rect;
        fill.size.width = rect.width() * self.displayed;
        painter.fill_rect(fill, self.fill_color);
        painter.stroke_rect(rect, &Stroke::new(Color::LIGHT_GRAY, 1.0));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn tick(&mut self, dt: f32) {
        let gap = self.value - self.displayed;
        if gap.abs() <= SNAP_EPSILON {
            self.displayed = self.value;
            return;
        }
        // min(1) caps the step so a long frame cannot overshoot the target.
        self.displayed += gap * (self.animation_speed * dt).min(1.0);
    }
}
