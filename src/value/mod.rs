//! Value module - In-memory representation of JSON objects.
//!
//! This module provides the raw data tree that templates constrain and
//! views wrap.

mod value;

pub use value::*;
