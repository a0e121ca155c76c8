//! The symbolic pipeline: canonicalization, rewriting, and rendering.

pub mod canonical;
pub mod render;
pub mod simplify;
pub mod trace;
