//! Rendering boundary - amount formatting and dashboard view models.
//!
//! Nothing here draws anything. It turns engine output into the typed records a
//! summary card, pie chart, and progress list consume.

mod currency_formatter;
mod display_model;
mod display_service;

pub use currency_formatter::*;
pub use display_model::*;
pub use display_service::*;
