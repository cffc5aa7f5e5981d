//! Dashboard settings - explicit configuration passed into the engine and the view layer.

mod settings_model;

pub use settings_model::*;

#[cfg(test)]
mod settings_model_tests;
