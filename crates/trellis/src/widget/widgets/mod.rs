//! Built-in widgets.

mod check_box;
mod combo_box;
mod label;
mod line_edit;
mod list_widget;
mod progress_bar;
mod push_button;
mod radio_button;
mod radio_group;
mod slider;
mod spin_box;

pub use check_box::CheckBox;
pub use combo_box::ComboBox;
pub use label::Label;
pub use line_edit::LineEdit;
pub use list_widget::ListWidget;
pub use progress_bar::ProgressBar;
pub use push_button::PushButton;
pub use radio_button::RadioButton;
pub use radio_group::RadioGroup;
pub use slider::Slider;
pub use spin_box::SpinBox;
