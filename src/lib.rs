//! cartesian-plane: equation-to-geometry engine for a cartesian graph.
//!
//! Equations are evaluated numerically over a swept range and turned into
//! plot commands in graph space. Grid lines, tics and axes are generated in
//! pixel space. Painting is left to a [`render::Renderer`] backend.

pub mod api;
pub mod core;
pub mod error;
pub mod expr;
pub mod render;
pub mod telemetry;

pub use api::{CommandSession, GraphManager, GraphProperties};
pub use crate::core::{Equation, PlotCommand, PlotKind, plot};
pub use error::{EvalError, PlotError, PlotResult, RangeError};
