//! # primer_core - Console Program Engine
//!
//! `primer_core` holds the computation behind five small console programs:
//! a vowel/consonant counter, a root table printer, an integer splitter, a
//! right triangle model, and a daily temperature logger. Front ends read
//! input, call into this crate, and print what it renders.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All input and result types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Exact Output**: Renderers reproduce fixed-width text layouts byte for byte
//!
//! ## Quick Start
//!
//! ```rust
//! use primer_core::programs::split::{calculate, render, SplitInput};
//!
//! let partition = calculate(&SplitInput::new(vec![3, -1, 0, -5, 2])).unwrap();
//! print!("{}", render(&partition));
//!
//! // Serialize to JSON for tooling
//! let json = serde_json::to_string_pretty(&partition).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`programs`] - The five programs (inputs, results, renderers)
//! - [`units`] - Type-safe temperature units
//! - [`format`] - Fixed-width console formatting helpers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Locked writes for the temperature log

pub mod errors;
pub mod file_io;
pub mod format;
pub mod programs;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{PrimerError, PrimerResult};
pub use file_io::write_log;
pub use programs::ProgramKind;
