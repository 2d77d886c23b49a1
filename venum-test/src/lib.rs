//! Test frameworks and golden vectors for `venum-core`.
//!
//! Mirrors the teacher's `eyelid-test` crate: a place for fixtures and
//! property-test generators that are shared between `venum-core`'s
//! `#[cfg(test)]` modules and any integration tests, kept out of the
//! production crate's dependency graph.

pub mod fixtures;
pub mod generators;
