//! # JSON Template
//!
//! Template-constrained views and structural deltas over JSON-like data.
//!
//! A template is authored as a value in the same shape-space as the data it
//! constrains: a map declares fixed fields, a map whose only key is the empty
//! string accepts any key, a single-element list declares a homogeneous
//! sequence, a longer list is a closed enumeration of literals, and `null`
//! accepts anything. Wrapping raw data against a compiled template yields a
//! view that validates eagerly, re-validates every write, and hands out
//! nested views on demand. Two same-shaped views can be diffed into a
//! minimal delta, itself a view, which can be applied back to reconstruct
//! the updated document.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of JSON objects
//! - [`template`] - Compiled template model and validation
//! - [`view`] - Mapping and sequence views over templated data
//! - [`delta`] - Structural delta computation and application

pub mod delta;
pub mod template;
pub mod value;
pub mod view;

pub use delta::{apply_delta, compute_delta};
pub use template::{Scalar, Template, ValidationError};
pub use value::{Map, Value};
pub use view::{underscores_to_spaces, Field, MappingView, ParseError, Parser, SequenceView};
