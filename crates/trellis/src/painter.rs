//! The drawing contract widgets paint against.

use trellis_core::{Color, Point, Rect, Stroke};

/// Immediate-mode drawing surface for one frame.
///
/// Widgets issue calls against this trait every frame; a backend records or
/// rasterizes them between `begin_frame` and `end_frame` on the
/// [`Platform`](crate::platform::Platform). Coordinates are absolute window
/// coordinates with the origin at the top-left and y growing downward.
/// Angles are in radians, measured clockwise from the positive x axis.
pub trait Painter {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline a rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Fill a circle with a solid color.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Outline a circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke);

    /// Stroke a circular arc from `start_angle` to `end_angle`.
    fn draw_arc(&mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32, stroke: &Stroke);

    /// Draw a line segment.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw a single line of text with its top-left corner at `pos`.
    fn draw_text(&mut self, text: &str, pos: Point, color: Color, size: f32);

    /// Measure the advance width of `text` at font size `size`.
    fn text_width(&self, text: &str, size: f32) -> f32;
}
