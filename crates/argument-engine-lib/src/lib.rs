//! Propositional argumentation engine: DNF normalization over signed
//! literals, a resolution-style argument builder, a defeat/rebuttal
//! argumentation semantics, and an open-question extractor.
//!
//! The crate is pure and synchronous (no I/O, no shared mutable state);
//! surface parsing, persistence, and rendering are external collaborators.

pub mod models;
pub mod services;
