// src/render/mod.rs
//! DOT rendering of the analysis results: flat, per-class and recursion
//! views, plus canonical symbol annotation.

mod annotate;
mod color;
mod dot;

pub use annotate::SymbolAnnotator;
pub use dot::DotRenderer;
