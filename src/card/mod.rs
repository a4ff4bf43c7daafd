//! SVG stat card rendering.
//!
//! - [`format`] - colors, XML escaping, duration formatting
//! - [`layout`] - column split, bar scaling and canvas geometry
//! - [`templates`] - Askama templates for the stat and error cards

pub mod format;
pub mod layout;
pub mod templates;

pub use layout::RenderInput;
pub use templates::{render_error_card, render_stat_card};
