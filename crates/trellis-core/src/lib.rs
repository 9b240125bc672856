//! Core systems for Trellis: geometry, colors, and the signal/slot system.
//!
//! This crate carries the pieces of the toolkit that have no dependency on
//! the widget tree: the 2D geometry vocabulary ([`Point`], [`Size`],
//! [`Rect`]), [`Color`] and [`Stroke`] for the painter contract, the
//! [`Signal`] observer primitive, and the [`ShellError`] startup error type.
//!
//! # Logging
//!
//! Trellis instruments itself with the `tracing` crate. No subscriber is
//! installed by the library; applications that want log output should
//! install one (for example `tracing_subscriber::fmt::init()`).

mod color;
mod error;
mod geometry;
mod signal;

pub use color::{Color, Stroke};
pub use error::{Result, ShellError};
pub use geometry::{Point, Rect, Size};
pub use signal::{ConnectionId, Signal};
