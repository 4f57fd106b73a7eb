//! Core data structures for the lattice pipeline.
//!
//! Includes the lattice point alias, center parity and the angularly ordered
//! [`Polygon`](polygon::Polygon).

pub mod point;
pub mod polygon;
