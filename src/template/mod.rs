//! Template module - a targeted shape language for JSON documents.
//!
//! Templates are authored as values in the same shape-space as the data
//! they constrain and compiled once into a tagged model, so the decision
//! of what a raw shape means is made in exactly one place.

mod model;
mod validation;

pub use model::*;
pub use validation::*;
