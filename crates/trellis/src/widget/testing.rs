//! Shared test doubles for widget, layout, and router tests.

use std::any::Any;

use trellis_core::{Color, Point, Rect, Stroke};

use crate::painter::Painter;

use super::base::WidgetBase;
use super::events::{FrameContext, WidgetEvent};
use super::traits::{PaintContext, Widget};

/// A widget that records the events and ticks it receives.
pub(crate) struct MockWidget {
    pub base: WidgetBase,
    pub events_seen: usize,
    pub last_event: Option<WidgetEvent>,
    pub ticks: Vec<f32>,
    /// Whether `event` reports the event as consumed.
    pub consume: bool,
}

impl MockWidget {
    pub fn new(geometry: Rect) -> Self {
        Self {
            base: WidgetBase::with_geometry(geometry),
            events_seen: 0,
            last_event: None,
            ticks: Vec::new(),
            consume: true,
        }
    }

}

impl Widget for MockWidget {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        ctx.painter().fill_rect(self.base.geometry(), Color::GRAY);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn event(&mut self, event: &WidgetEvent, _frame: &FrameContext) -> bool {
        self.events_seen += 1;
        self.last_event = Some(*event);
        self.consume
    }

    fn tick(&mut self, dt: f32) {
        self.ticks.push(dt);
    }
}

/// A painter op captured by [`RecordingPainter`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PaintOp {
    FillRect(Rect, Color),
    StrokeRect(Rect),
    FillCircle(Point, f32, Color),
    StrokeCircle(Point, f32),
    Arc(Point, f32),
    Line(Point, Point),
    Text(String, Point),
}

/// A painter that records every call for later assertion.
#[derive(Default)]
pub(crate) struct RecordingPainter {
    pub ops: Vec<PaintOp>,
    /// Fixed per-character advance so text metrics are deterministic.
    pub char_width: f32,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            char_width: 8.0,
        }
    }
}

impl Painter for RecordingPainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, _stroke: &Stroke) {
        self.ops.push(PaintOp::StrokeRect(rect));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.ops.push(PaintOp::FillCircle(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, _stroke: &Stroke) {
        self.ops.push(PaintOp::StrokeCircle(center, radius));
    }

    fn draw_arc(
        &mut self,
        center: Point,
        radius: f32,
        _start_angle: f32,
        _end_angle: f32,
        _stroke: &Stroke,
    ) {
        self.ops.push(PaintOp::Arc(center, radius));
    }

    fn draw_line(&mut self, from: Point, to: Point, _stroke: &Stroke) {
        self.ops.push(PaintOp::Line(from, to));
    }

    fn draw_text(&mut self, text: &str, pos: Point, _color: Color, _size: f32) {
        self.ops.push(PaintOp::Text(text.to_string(), pos));
    }

    fn text_width(&self, text: &str, _size: f32) -> f32 {
        text.chars().count() as f32 * self.char_width
    }
}
