//! Source code generation from type graphs.

pub mod golang;
