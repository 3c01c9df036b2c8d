//! Charts module - binding and rendering

mod binder;
mod plotter;

pub use binder::{BindError, BoundPoint, ChartBinder, ChartKind, ChartSpec, MarkerSpec};
pub use plotter::ChartPlotter;
