//! Trellis: a retained-tree widget toolkit painted in immediate mode.
//!
//! Widgets live in a [`WidgetArena`](widget::WidgetArena) and are wired into
//! top-level roots — free widgets or [`layout`](widget::layout) subtrees —
//! owned by an [`Application`](app::Application). Every frame the
//! application ticks animation, repaints the whole tree through the
//! [`Painter`](painter::Painter) contract, and routes input from the
//! [`Platform`](platform::Platform) shell to widgets under a single-focus
//! model. State changes surface as [`Signal`](trellis_core::Signal)s.
//!
//! The crate ships no windowing backend; implement [`platform::Platform`]
//! for your windowing stack, or drive
//! [`Application::pump_event`](app::Application::pump_event) directly for
//! headless use.
//!
//! # Example
//!
//! ```no_run
//! use trellis::prelude::*;
//!
//! fn build<P: Platform>(app: &mut Application<P>) {
//!     let mut layout = VerticalLayout::new(Rect::new(0.0, 0.0, 200.0, 120.0));
//!     let button = app.register(PushButton::new("Click me"));
//!     app.arena()
//!         .get_as::<PushButton>(button)
//!         .unwrap()
//!         .clicked
//!         .connect(|_| println!("clicked"));
//!     layout.add_widget(button);
//!     app.add_layout(layout);
//!     app.layout_all();
//! }
//! ```

pub mod app;
pub mod painter;
pub mod platform;
pub mod prelude;
pub mod widget;

pub use trellis_core as core;

pub use app::{Application, Root};
pub use painter::Painter;
pub use platform::{Platform, PlatformEvent};
