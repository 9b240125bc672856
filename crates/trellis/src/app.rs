//! The application loop and event router.

use std::time::Duration;

use trellis_core::{Color, Point, Result, Size};

use crate::platform::{Platform, PlatformEvent};
use crate::widget::layout::Layout;
use crate::widget::{
    FrameContext, MouseButton, PaintContext, Widget, WidgetArena, WidgetEvent, WidgetId,
};

/// A top-level entry: either a free-floating widget or a layout subtree.
pub enum Root {
    Widget(WidgetId),
    Layout(Box<dyn Layout>),
}

/// Owns the widget arena, the top-level roots, and the platform shell, and
/// routes input between them.
///
/// The router maintains a single-focus model: every primary press reassigns
/// focus to the widget it hits (or clears it), and keyboard input plus mouse
/// releases go only to the focus owner. Cursor moves are broadcast to every
/// widget so drags and hover states update regardless of focus.
pub struct Application<P: Platform> {
    platform: P,
    arena: WidgetArena,
    roots: Vec<Root>,
    focused: Option<WidgetId>,
    cursor: Point,
    window_size: Size,
    clear_color: Color,
    last_frame: Duration,
}

impl<P: Platform> Application<P> {
    pub fn new(platform: P) -> Self {
        let window_size = platform.window_size();
        let cursor = platform.cursor_pos();
        let last_frame = platform.elapsed();
        Self {
            platform,
            arena: WidgetArena::new(),
            roots: Vec::new(),
            focused: None,
            cursor,
            window_size,
            clear_color: Color::from_rgb8(0x16, 0x16, 0x16),
            last_frame,
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn arena(&self) -> &WidgetArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut WidgetArena {
        &mut self.arena
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    pub fn window_size(&self) -> Size {
        self.window_size
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    /// Store a widget without making it a root. Used for layout children.
    pub fn register<W: Widget>(&mut self, widget: W) -> WidgetId {
        self.arena.insert(widget)
    }

    /// Store a widget and add it as a top-level root.
    pub fn add_widget<W: Widget>(&mut self, widget: W) -> WidgetId {
        let id = self.arena.insert(widget);
        self.roots.push(Root::Widget(id));
        id
    }

    /// Add a layout subtree as a top-level root; returns its root index.
    pub fn add_layout<L: Layout + 'static>(&mut self, layout: L) -> usize {
        self.roots.push(Root::Layout(Box::new(layout)));
        self.roots.len() - 1
    }

    /// Mutable access to the layout at root index `index`.
    pub fn root_layout_mut(&mut self, index: usize) -> Option<&mut dyn Layout> {
        match self.roots.get_mut(index) {
            Some(Root::Layout(layout)) => Some(layout.as_mut()),
            _ => None,
        }
    }

    /// Run a full layout pass over every top-level layout.
    ///
    /// Call once after building the widget tree; resizes re-run it
    /// automatically.
    pub fn layout_all(&mut self) {
        for root in &mut self.roots {
            if let Root::Layout(layout) = root {
                layout.update_from_window_size(&mut self.arena, self.window_size);
            }
        }
    }

    /// The main loop: tick, paint, dispatch, until the shell asks to close.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(target: "trellis::app", "entering main loop");
        self.layout_all();
        while !self.platform.should_close() {
            self.tick_frame();
            self.paint_frame();
            for event in self.platform.poll_events() {
                self.pump_event(event);
            }
        }
        tracing::info!(target: "trellis::app", "main loop finished");
        Ok(())
    }

    /// Route one platform event. Public so headless tests can drive the
    /// router without a real shell.
    pub fn pump_event(&mut self, event: PlatformEvent) {
        match event {
            PlatformEvent::MousePress { button, pos } => {
                self.cursor = pos;
                if button == MouseButton::Left {
                    self.handle_primary_press(pos);
                }
                // Secondary buttons never move focus.
            }
            PlatformEvent::MouseRelease { button, pos } => {
                self.cursor = pos;
                self.dispatch_to_focused(WidgetEvent::MouseRelease { button, pos });
            }
            PlatformEvent::MouseMove { pos } => {
                self.cursor = pos;
                self.broadcast(WidgetEvent::MouseMove { pos });
            }
            PlatformEvent::KeyPress { key, modifiers } => {
                self.dispatch_to_focused(WidgetEvent::KeyPress { key, modifiers });
            }
            PlatformEvent::Char { ch } => {
                self.dispatch_to_focused(WidgetEvent::Char { ch });
            }
            PlatformEvent::Resized { width, height } => {
                self.handle_resize(width, height);
            }
            PlatformEvent::CloseRequested => {
                tracing::info!(target: "trellis::app", "close requested");
            }
        }
    }

    /// Advance animation on every widget by the elapsed wall-clock delta.
    pub fn tick_frame(&mut self) {
        let now = self.platform.elapsed();
        let dt = now.saturating_sub(self.last_frame).as_secs_f32();
        self.last_frame = now;

        for root in &mut self.roots {
            match root {
                Root::Widget(id) => {
                    if let Some(widget) = self.arena.get_mut(*id) {
                        widget.tick(dt);
                    }
                }
                Root::Layout(layout) => layout.tick(&mut self.arena, dt),
            }
        }
    }

    /// Paint one frame: roots in insertion order, then overlay widgets.
    pub fn paint_frame(&mut self) {
        let overlay = self.overlay_widgets();
        let frame = self.frame_context();

        self.platform.begin_frame(self.clear_color);
        {
            let mut ctx = PaintContext::new(self.platform.painter(), &frame);
            for root in &self.roots {
                match root {
                    Root::Widget(id) => {
                        if let Some(widget) = self.arena.get(*id) {
                            if widget.widget_base().is_visible() && !widget.wants_overlay() {
                                widget.paint(&mut ctx);
                            }
                        }
                    }
                    Root::Layout(layout) => layout.paint(&self.arena, &mut ctx),
                }
            }
            // Overlay pass: popups paint above everything that came before.
            for id in overlay {
                if let Some(widget) = self.arena.get(id) {
                    widget.paint(&mut ctx);
                }
            }
        }
        self.platform.end_frame();
    }

    fn frame_context(&self) -> FrameContext {
        FrameContext::new(self.window_size, self.cursor, self.focused)
    }

    fn overlay_widgets(&self) -> Vec<WidgetId> {
        self.arena
            .ids()
            .filter(|&id| {
                self.arena
                    .get(id)
                    .is_some_and(|w| w.widget_base().is_visible() && w.wants_overlay())
            })
            .collect()
    }

    fn handle_primary_press(&mut self, pos: Point) {
        // Popups first: an expanded drop-down must see the press even when
        // the pointer is outside it, so it can collapse or shield whatever
        // is underneath.
        let frame = self.frame_context();
        for id in self.overlay_widgets() {
            if let Some(widget) = self.arena.get_mut(id) {
                let consumed = widget.event(&WidgetEvent::MousePress {
                    button: MouseButton::Left,
                    pos,
                }, &frame);
                if consumed {
                    self.set_focus(Some(id));
                    return;
                }
            }
        }

        let hit = self.hit_test(pos);
        self.set_focus(hit);
        if let Some(id) = hit {
            let frame = self.frame_context();
            if let Some(widget) = self.arena.get_mut(id) {
                widget.event(&WidgetEvent::MousePress {
                    button: MouseButton::Left,
                    pos,
                }, &frame);
            }
        }
    }

    /// First hit across roots in insertion order.
    fn hit_test(&self, pos: Point) -> Option<WidgetId> {
        for root in &self.roots {
            match root {
                Root::Widget(id) => {
                    if self.arena.get(*id).is_some_and(|w| w.hit_test(pos)) {
                        return Some(*id);
                    }
                }
                Root::Layout(layout) => {
                    if let Some(hit) = layout.hit_test(&self.arena, pos) {
                        return Some(hit);
                    }
                }
            }
        }
        None
    }

    fn set_focus(&mut self, next: Option<WidgetId>) {
        if next == self.focused {
            return;
        }
        let frame = self.frame_context();
        if let Some(old) = self.focused.take() {
            if let Some(widget) = self.arena.get_mut(old) {
                widget.widget_base_mut().set_focused(false);
                widget.event(&WidgetEvent::FocusOut, &frame);
            }
        }
        if let Some(new) = next {
            if let Some(widget) = self.arena.get_mut(new) {
                widget.widget_base_mut().set_focused(true);
                widget.event(&WidgetEvent::FocusIn, &frame);
            }
        }
        self.focused = next;
        tracing::trace!(target: "trellis::app", focused = ?next, "focus changed");
    }

    fn dispatch_to_focused(&mut self, event: WidgetEvent) {
        let frame = self.frame_context();
        if let Some(id) = self.focused {
            if let Some(widget) = self.arena.get_mut(id) {
                widget.event(&event, &frame);
            }
        }
    }

    fn broadcast(&mut self, event: WidgetEvent) {
        let frame = self.frame_context();
        for root in &mut self.roots {
            match root {
                Root::Widget(id) => {
                    if let Some(widget) = self.arena.get_mut(*id) {
                        widget.event(&event, &frame);
                    }
                }
                Root::Layout(layout) => layout.broadcast_event(&mut self.arena, &event, &frame),
            }
        }
    }

    fn handle_resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            tracing::debug!(target: "trellis::app", width, height, "ignoring degenerate resize");
            return;
        }
        self.window_size = Size::new(width, height);
        self.layout_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::layout::{LayoutBase, VerticalLayout};
    use crate::widget::testing::{MockWidget, RecordingPainter};
    use crate::widget::widgets::{ComboBox, PushButton};
    use std::cell::Cell;
    use std::rc::Rc;
    use trellis_core::Rect;

    struct HeadlessPlatform {
        size: Size,
        painter: RecordingPainter,
        clock: Duration,
        frames: usize,
    }

    impl HeadlessPlatform {
        fn new(width: f32, height: f32) -> Self {
            Self {
                size: Size::new(width, height),
                painter: RecordingPainter::new(),
                clock: Duration::ZERO,
                frames: 0,
            }
        }
    }

    impl Platform for HeadlessPlatform {
        fn window_size(&self) -> Size {
            self.size
        }

        fn cursor_pos(&self) -> Point {
            Point::ZERO
        }

        fn should_close(&self) -> bool {
            true
        }

        fn poll_events(&mut self) -> Vec<PlatformEvent> {
            Vec::new()
        }

        fn begin_frame(&mut self, _clear_color: Color) {
            self.painter.ops.clear();
            self.frames += 1;
        }

        fn end_frame(&mut self) {}

        fn painter(&mut self) -> &mut dyn crate::painter::Painter {
            &mut self.painter
        }

        fn elapsed(&self) -> Duration {
            self.clock
        }
    }

    fn app() -> Application<HeadlessPlatform> {
        Application::new(HeadlessPlatform::new(800.0, 600.0))
    }

    fn press(x: f32, y: f32) -> PlatformEvent {
        PlatformEvent::MousePress {
            button: MouseButton::Left,
            pos: Point::new(x, y),
        }
    }

    #[test]
    fn test_press_assigns_focus_and_sends_transitions() {
        let mut app = app();
        let a = app.add_widget(MockWidget::new(Rect::new(0.0, 0.0, 100.0, 50.0)));
        let b = app.add_widget(MockWidget::new(Rect::new(0.0, 100.0, 100.0, 50.0)));

        app.pump_event(press(50.0, 25.0));
        assert_eq!(app.focused(), Some(a));
        assert!(app.arena().get(a).unwrap().widget_base().is_focused());

        app.pump_event(press(50.0, 125.0));
        assert_eq!(app.focused(), Some(b));
        assert!(!app.arena().get(a).unwrap().widget_base().is_focused());
        // The old owner's last event is the focus-out notification.
        assert_eq!(
            app.arena().get_as::<MockWidget>(a).unwrap().last_event,
            Some(WidgetEvent::FocusOut)
        );
    }

    #[test]
    fn test_press_on_empty_space_clears_focus() {
        let mut app = app();
        let a = app.add_widget(MockWidget::new(Rect::new(0.0, 0.0, 100.0, 50.0)));

        app.pump_event(press(50.0, 25.0));
        assert_eq!(app.focused(), Some(a));

        app.pump_event(press(700.0, 500.0));
        assert_eq!(app.focused(), None);
        assert!(!app.arena().get(a).unwrap().widget_base().is_focused());
    }

    #[test]
    fn test_secondary_press_does_not_move_focus() {
        let mut app = app();
        let a = app.add_widget(MockWidget::new(Rect::new(0.0, 0.0, 100.0, 50.0)));
        app.pump_event(press(50.0, 25.0));

        app.pump_event(PlatformEvent::MousePress {
            button: MouseButton::Right,
            pos: Point::new(700.0, 500.0),
        });
        assert_eq!(app.focused(), Some(a));
    }

    #[test]
    fn test_release_goes_to_focused_only() {
        let mut app = app();
        let a = app.add_widget(MockWidget::new(Rect::new(0.0, 0.0, 100.0, 50.0)));
        let b = app.add_widget(MockWidget::new(Rect::new(0.0, 100.0, 100.0, 50.0)));

        app.pump_event(press(50.0, 25.0));
        let seen_before = app.arena().get_as::<MockWidget>(b).unwrap().events_seen;

        // Release far away from both widgets still reaches the focus owner.
        app.pump_event(PlatformEvent::MouseRelease {
            button: MouseButton::Left,
            pos: Point::new(700.0, 500.0),
        });
        assert_eq!(
            app.arena().get_as::<MockWidget>(a).unwrap().last_event,
            Some(WidgetEvent::MouseRelease {
                button: MouseButton::Left,
                pos: Point::new(700.0, 500.0),
            })
        );
        assert_eq!(
            app.arena().get_as::<MockWidget>(b).unwrap().events_seen,
            seen_before
        );
    }

    #[test]
    fn test_move_is_broadcast_to_all_widgets() {
        let mut app = app();
        let a = app.add_widget(MockWidget::new(Rect::new(0.0, 0.0, 100.0, 50.0)));

        let mut layout = VerticalLayout::new(Rect::new(0.0, 100.0, 200.0, 200.0));
        let b = app.register(MockWidget::new(Rect::ZERO));
        layout.add_widget(b);
        app.add_layout(layout);

        app.pump_event(PlatformEvent::MouseMove {
            pos: Point::new(10.0, 10.0),
        });
        assert_eq!(app.arena().get_as::<MockWidget>(a).unwrap().events_seen, 1);
        assert_eq!(app.arena().get_as::<MockWidget>(b).unwrap().events_seen, 1);
    }

    #[test]
    fn test_keyboard_without_focus_is_dropped() {
        let mut app = app();
        let a = app.add_widget(MockWidget::new(Rect::new(0.0, 0.0, 100.0, 50.0)));

        app.pump_event(PlatformEvent::Char { ch: 'x' });
        assert_eq!(app.arena().get_as::<MockWidget>(a).unwrap().events_seen, 0);
    }

    /// Layout double that counts update passes.
    struct CountingLayout {
        base: LayoutBase,
        updates: Rc<Cell<usize>>,
    }

    impl Layout for CountingLayout {
        fn layout_base(&self) -> &LayoutBase {
            &self.base
        }

        fn layout_base_mut(&mut self) -> &mut LayoutBase {
            &mut self.base
        }

        fn update_layout(&mut self, _arena: &mut WidgetArena) {
            self.updates.set(self.updates.get() + 1);
        }
    }

    #[test]
    fn test_resize_relayouts_each_root_exactly_once() {
        let mut app = app();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        app.add_layout(CountingLayout {
            base: LayoutBase::new(Rect::new(0.0, 0.0, 800.0, 600.0)),
            updates: first.clone(),
        });
        app.add_layout(CountingLayout {
            base: LayoutBase::new(Rect::new(0.0, 0.0, 800.0, 600.0)),
            updates: second.clone(),
        });

        app.pump_event(PlatformEvent::Resized {
            width: 400.0,
            height: 300.0,
        });
        assert_eq!(app.window_size(), Size::new(400.0, 300.0));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_degenerate_resize_is_ignored() {
        let mut app = app();
        let updates = Rc::new(Cell::new(0));
        app.add_layout(CountingLayout {
            base: LayoutBase::new(Rect::ZERO),
            updates: updates.clone(),
        });

        app.pump_event(PlatformEvent::Resized {
            width: 0.0,
            height: 300.0,
        });
        app.pump_event(PlatformEvent::Resized {
            width: 400.0,
            height: -1.0,
        });
        assert_eq!(app.window_size(), Size::new(800.0, 600.0));
        assert_eq!(updates.get(), 0);
    }

    #[test]
    fn test_expanded_combo_shields_widget_underneath() {
        let mut app = app();
        // A button sitting where the combo's drop-down will open.
        let button_id = {
            let mut button = PushButton::new("under");
            button
                .widget_base_mut()
                .set_geometry(Rect::new(0.0, 40.0, 150.0, 30.0));
            app.add_widget(button)
        };
        let combo_id = {
            let mut combo = ComboBox::new(vec!["a".into(), "b".into(), "c".into()]);
            combo
                .widget_base_mut()
                .set_geometry(Rect::new(0.0, 0.0, 150.0, 30.0));
            app.add_widget(combo)
        };

        app.pump_event(press(10.0, 10.0));
        assert!(app.arena().get_as::<ComboBox>(combo_id).unwrap().is_expanded());

        // This press lands on the button's rect, but the drop-down covers
        // it: the combo takes the press and selects row 0.
        app.pump_event(press(10.0, 45.0));
        let combo = app.arena().get_as::<ComboBox>(combo_id).unwrap();
        assert_eq!(combo.selected(), Some(0));
        assert!(!combo.is_expanded());
        assert!(!app.arena().get_as::<PushButton>(button_id).unwrap().is_pressed());
        assert_eq!(app.focused(), Some(combo_id));
    }

    #[test]
    fn test_outside_press_collapses_combo_then_routes_through() {
        let mut app = app();
        let button_id = {
            let mut button = PushButton::new("elsewhere");
            button
                .widget_base_mut()
                .set_geometry(Rect::new(300.0, 300.0, 100.0, 30.0));
            app.add_widget(button)
        };
        let combo_id = {
            let mut combo = ComboBox::new(vec!["a".into(), "b".into()]);
            combo
                .widget_base_mut()
                .set_geometry(Rect::new(0.0, 0.0, 150.0, 30.0));
            app.add_widget(combo)
        };

        app.pump_event(press(10.0, 10.0));
        app.pump_event(press(350.0, 315.0));

        // The combo collapsed without consuming, so the same press reached
        // the button beneath the pointer.
        assert!(!app.arena().get_as::<ComboBox>(combo_id).unwrap().is_expanded());
        assert!(app.arena().get_as::<PushButton>(button_id).unwrap().is_pressed());
        assert_eq!(app.focused(), Some(button_id));
    }

    #[test]
    fn test_tick_uses_elapsed_clock_delta() {
        let mut app = app();
        let a = app.add_widget(MockWidget::new(Rect::new(0.0, 0.0, 100.0, 50.0)));

        app.platform_mut().clock = Duration::from_millis(16);
        app.tick_frame();
        app.platform_mut().clock = Duration::from_millis(48);
        app.tick_frame();

        let ticks = &app.arena().get_as::<MockWidget>(a).unwrap().ticks;
        assert_eq!(ticks.len(), 2);
        assert!((ticks[0] - 0.016).abs() < 1e-6);
        assert!((ticks[1] - 0.032).abs() < 1e-6);
    }

    #[test]
    fn test_overlay_paints_after_roots() {
        use crate::widget::testing::PaintOp;

        let mut app = app();
        let mut combo = ComboBox::new(vec!["a".into()]);
        combo
            .widget_base_mut()
            .set_geometry(Rect::new(0.0, 0.0, 150.0, 30.0));
        app.add_widget(combo);
        let behind = app.add_widget(MockWidget::new(Rect::new(0.0, 20.0, 100.0, 100.0)));

        app.pump_event(press(10.0, 10.0)); // Expand.
        app.paint_frame();

        let ops = &app.platform().painter.ops;
        // The mock's gray fill must come before the combo's surfaces even
        // though the combo is the earlier root.
        let mock_rect = app.arena().get(behind).unwrap().widget_base().geometry();
        let mock_pos = ops
            .iter()
            .position(|op| matches!(op, PaintOp::FillRect(r, _) if *r == mock_rect));
        let combo_pos = ops
            .iter()
            .position(|op| matches!(op, PaintOp::FillRect(r, _) if r.top() == 0.0));
        assert!(mock_pos.unwrap() < combo_pos.unwrap());
    }
}
