//! GUI module - dashboard application, layout composer, card widgets

mod app;
mod cards;
mod layout;
mod model;

pub use app::DashboardApp;
pub use layout::{compose, LayoutError, LayoutTree, Pane, Row, Slot};
pub use model::DashboardModel;
