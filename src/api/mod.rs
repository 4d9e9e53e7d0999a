//! Webhook API: intake payload in, filled forms out.

pub mod handlers;
pub mod models;

pub use handlers::config;

use crate::forms::FormGenerator;
use crate::intake::Normalizer;

/// Shared, read-only application state.
pub struct AppState {
    pub normalizer: Normalizer,
    pub generator: FormGenerator,
}

impl AppState {
    pub fn new(normalizer: Normalizer, generator: FormGenerator) -> Self {
        Self {
            normalizer,
            generator,
        }
    }
}
