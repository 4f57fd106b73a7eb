//! # Config Crate
//!
//! Centralized configuration for the wedge-circle pipeline. Every tunable
//! number used by the lattice search and the blueprint compiler lives here,
//! together with the validated [`search::SearchConfig`] that drives a sweep.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{QUANTIZATION_LIMIT, DEFAULT_INITIAL_RADIUS};
//! use config::search::SearchConfig;
//!
//! let cfg = SearchConfig::default();
//! assert_eq!(cfg.quantization_limit, QUANTIZATION_LIMIT);
//! assert_eq!(cfg.initial_radius, DEFAULT_INITIAL_RADIUS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Format Compatible**: Limits match the target voxel-construction format
//! - **Validated**: Search parameters can only be built through checked constructors

pub mod constants;
pub mod search;

#[cfg(test)]
mod tests;
