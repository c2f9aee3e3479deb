//! TUI module: terminal user interface using Ratatui.
//!
//! Two screens: the case entry form and the prediction result.

mod app;
mod styles;
mod ui;

pub use app::{App, Screen};
pub use styles::ClinicalTheme;
