//! View module - validated, ergonomic access to templated data.
//!
//! A view pairs a type-name label, a compiled template, and an owned data
//! subtree. Construction validates eagerly and recursively; every write is
//! re-validated before it commits; reads hand out nested views on demand.

mod mapping;
mod parser;
mod sequence;
mod wrap;


pub use mapping::*;
pub use parser::*;
pub use sequence::*;
pub use wrap::*;

pub use crate::template::ValidationError;

/// Translates an identifier-style field name to its stored key form.
///
/// External field names may contain spaces; substituting underscores at
/// the accessor boundary lets both `view.get("unit_price")` and the stored
/// key `"unit price"` refer to the same field. A name without underscores
/// is returned unchanged.
pub fn underscores_to_spaces(name: &str) -> String {
    name.replace('_', " ")
}
