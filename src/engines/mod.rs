//! Search engine implementations.

// HTML-scraped engines
mod google;

// Engines with embedded JSON payloads
mod coccoc;

pub use google::{Google, GoogleExtractor, GOOGLE_BASE_URL};

pub use coccoc::{Coccoc, CoccocExtractor, COCCOC_BASE_URL};

/// Source ids of every built-in engine.
pub const AVAILABLE: &[&str] = &["google", "coccoc"];
