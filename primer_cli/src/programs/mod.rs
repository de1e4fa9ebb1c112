//! Interactive drivers, one per program.
//!
//! Each `run` reads its input through a [`Prompter`](crate::prompt::Prompter),
//! prints the rendered result to the same output, and returns the computed
//! result so the binary can also emit it as JSON.

pub mod freq;
pub mod root_table;
pub mod split;
pub mod temps;
pub mod triangles;
