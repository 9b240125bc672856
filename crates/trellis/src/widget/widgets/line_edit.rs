//! Single-line text input.

use std::any::Any;

use trellis_core::{Color, Point, Signal, Stroke};

use crate::widget::base::WidgetBase;
use crate::widget::events::{FrameContext, MouseButton, WidgetEvent};
use crate::widget::keyboard::Key;
use crate::widget::traits::{PaintContext, Widget};

const TEXT_INSET: f32 = 6.0;
/// Full blink cycle in seconds; the caret is visible for the first half.
const BLINK_PERIOD: f32 = 1.0;

/// An editable single line of text with a blinking caret.
///
/// The caret blinks on accumulated tick time rather than frame count, so it
/// pulses at the same rate at any refresh rate, and every edit or cursor
/// move resets the phase so the caret is visible while typing.
pub struct LineEdit {
    base: WidgetBase,
    text: String,
    /// Caret position in characters, 0..=char_count.
    cursor: usize,
    blink_phase: f32,
    background: Color,
    text_color: Color,
    border: Stroke,
    border_focused: Stroke,
    font_size: f32,
    /// Emitted with the full text after every edit.
    pub text_changed: Signal<String>,
    /// Emitted with the full text when Enter is pressed.
    pub submitted: Signal<String>,
}

impl LineEdit {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            text: String::new(),
            cursor: 0,
            blink_phase: 0.0,
            background: Color::from_rgb8(0x1e, 0x1e, 0x1e),
            text_color: Color::WHITE,
            border: Stroke::new(Color::GRAY, 1.0),
            border_focused: Stroke::new(Color::from_rgb8(0x6a, 0xa8, 0xf0), 1.0),
            font_size: 14.0,
            text_changed: Signal::new(),
            submitted: Signal::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.cursor = self.text.chars().count();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, moving the caret to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.text = text;
        self.cursor = self.text.chars().count();
        self.reset_blink();
        self.text_changed.emit(self.text.clone());
    }

    /// Caret position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the caret is in the visible half of its blink cycle.
    pub fn cursor_visible(&self) -> bool {
        self.base.is_focused() && self.blink_phase < BLINK_PERIOD / 2.0
    }

    fn reset_blink(&mut self) {
        self.blink_phase = 0.0;
    }

    /// Byte offset of the `cursor`-th character.
    fn byte_cursor(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn emit_text_changed(&self) {
        self.text_changed.emit(self.text.clone());
    }

    fn handle_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let at = self.byte_cursor();
        self.text.insert(at, ch);
        self.cursor += 1;
        self.reset_blink();
        self.emit_text_changed();
        true
    }

    fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Backspace => {
                if self.cursor == 0 {
                    return true;
                }
                self.cursor -= 1;
                let at = self.byte_cursor();
                self.text.remove(at);
                self.reset_blink();
                self.emit_text_changed();
                true
            }
            Key::Delete => {
                let at = self.byte_cursor();
                if at < self.text.len() {
                    self.text.remove(at);
                    self.reset_blink();
                    self.emit_text_changed();
                }
                true
            }
            Key::ArrowLeft => {
                self.cursor = self.cursor.saturating_sub(1);
                self.reset_blink();
                true
            }
            Key::ArrowRight => {
                self.cursor = (self.cursor + 1).min(self.text.chars().count());
                self.reset_blink();
                true
            }
            Key::Home => {
                self.cursor = 0;
                self.reset_blink();
                true
            }
            Key::End => {
                self.cursor = self.text.chars().count();
                self.reset_blink();
                true
            }
            Key::Enter => {
                self.submitted.emit(self.text.clone());
                true
            }
            _ => false,
        }
    }
}

impl Default for LineEdit {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for LineEdit {
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
        let border = if self.base.is_focused() {
            &self.border_focused
        } else {
            &self.border
        };
        painter.stroke_rect(rect, border);

        let text_pos = Point::new(
            rect.left() + TEXT_INSET,
            rect.center().y - self.font_size / 2.0,
        );
        painter.draw_text(&self.text, text_pos, self.text_color, self.font_size);

        if self.cursor_visible() {
            let prefix: String = self.text.chars().take(self.cursor).collect();
            let caret_x = text_pos.x + painter.text_width(&prefix, self.font_size);
            painter.draw_line(
                Point::new(caret_x, rect.top() + 4.0),
                Point::new(caret_x, rect.bottom() - 4.0),
                &Stroke::new(self.text_color, 1.0),
            );
        }
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
            WidgetEvent::Char { ch } => self.handle_char(ch),
            WidgetEvent::KeyPress { key, .. } => self.handle_key(key),
            WidgetEvent::MousePress { button, pos }
                if button == MouseButton::Left && self.base.geometry().contains(pos) =>
            {
                // No per-glyph metrics outside paint; clicking parks the
                // caret at the end.
                self.cursor = self.text.chars().count();
                self.reset_blink();
                true
            }
            WidgetEvent::FocusIn => {
                self.reset_blink();
                false
            }
            WidgetEvent::MouseMove { pos } => {
                self.base.set_hovered(self.base.geometry().contains(pos));
                false
            }
            _ => false,
        }
    }

    fn tick(&mut self, dt: f32) {
        self.blink_phase = (self.blink_phase + dt) % BLINK_PERIOD;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::keyboard::Modifiers;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn type_char(edit: &mut LineEdit, ch: char) {
        edit.event(&WidgetEvent::Char { ch }, &FrameContext::default());
    }

    fn press_key(edit: &mut LineEdit, key: Key) {
        edit.event(
            &WidgetEvent::KeyPress {
                key,
                modifiers: Modifiers::NONE,
            },
            &FrameContext::default(),
        );
    }

    #[test]
    fn test_typing_inserts_at_cursor() {
        let mut edit = LineEdit::new();
        type_char(&mut edit, 'a');
        type_char(&mut edit, 'c');
        press_key(&mut edit, Key::ArrowLeft);
        type_char(&mut edit, 'b');
        assert_eq!(edit.text(), "abc");
        assert_eq!(edit.cursor(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut edit = LineEdit::new().with_text("abc");
        press_key(&mut edit, Key::Backspace);
        assert_eq!(edit.text(), "ab");

        press_key(&mut edit, Key::Home);
        press_key(&mut edit, Key::Delete);
        assert_eq!(edit.text(), "b");

        // Backspace at the start is a consumed no-op.
        press_key(&mut edit, Key::Backspace);
        assert_eq!(edit.text(), "b");
    }

    #[test]
    fn test_multibyte_editing_stays_on_char_boundaries() {
        let mut edit = LineEdit::new().with_text("héllo");
        press_key(&mut edit, Key::Home);
        press_key(&mut edit, Key::ArrowRight);
        press_key(&mut edit, Key::ArrowRight);
        press_key(&mut edit, Key::Backspace);
        assert_eq!(edit.text(), "hllo");
    }

    #[test]
    fn test_control_chars_are_rejected() {
        let mut edit = LineEdit::new();
        assert!(!edit.event(&WidgetEvent::Char { ch: '\u{8}' }, &FrameContext::default()));
        assert_eq!(edit.text(), "");
    }

    #[test]
    fn test_enter_emits_submitted() {
        let mut edit = LineEdit::new().with_text("hello");
        let submitted = Rc::new(RefCell::new(Vec::new()));
        let s = submitted.clone();
        edit.submitted.connect(move |text| s.borrow_mut().push(text.clone()));

        press_key(&mut edit, Key::Enter);
        assert_eq!(*submitted.borrow(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_text_changed_fires_per_edit() {
        let mut edit = LineEdit::new();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let c = changes.clone();
        edit.text_changed.connect(move |text| c.borrow_mut().push(text.clone()));

        type_char(&mut edit, 'h');
        type_char(&mut edit, 'i');
        press_key(&mut edit, Key::Backspace);
        assert_eq!(
            *changes.borrow(),
            vec!["h".to_string(), "hi".to_string(), "h".to_string()]
        );
    }

    #[test]
    fn test_blink_is_time_based_and_resets_on_edit() {
        let mut edit = LineEdit::new();
        edit.widget_base_mut().set_focused(true);
        assert!(edit.cursor_visible());

        edit.tick(0.6);
        assert!(!edit.cursor_visible());

        type_char(&mut edit, 'a'); // Editing makes the caret visible again.
        assert!(edit.cursor_visible());

        edit.tick(1.0); // Full period wraps back to visible.
        assert!(edit.cursor_visible());
    }
}
