//! Delta module - minimal structural patches between same-shaped views.

mod engine;


pub use engine::*;
