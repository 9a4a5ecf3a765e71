//! Command handlers - the sanctioned mutation entry points.

pub mod document;
pub mod tabular;
