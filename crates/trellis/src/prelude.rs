//! Convenience re-exports for application code.

pub use trellis_core::{Color, Point, Rect, Signal, Size, Stroke};

pub use crate::app::{Application, Root};
pub use crate::painter::Painter;
pub use crate::platform::{Platform, PlatformEvent};
pub use crate::widget::layout::{
    Alignment, BoxLayout, GridLayout, HorizontalLayout, Layout, Orientation, RelativePlacement,
    SizeSpec, VerticalLayout,
};
pub use crate::widget::widgets::{
    CheckBox, ComboBox, Label, LineEdit, ListWidget, ProgressBar, PushButton, RadioButton,
    RadioGroup, Slider, SpinBox,
};
pub use crate::widget::{
    FrameContext, Key, Modifiers, MouseButton, PaintContext, Widget, WidgetArena, WidgetBase,
    WidgetEvent, WidgetId,
};
