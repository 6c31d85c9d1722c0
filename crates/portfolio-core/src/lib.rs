//! Platform-independent logic for the portfolio front-end.
//!
//! Everything in this crate is pure Rust with no DOM or canvas access, so it
//! compiles and tests natively. The `portfolio-web` crate wires these types
//! to the page: it feeds pointer and scroll state in, and executes the
//! [`console::Effect`] values the command evaluator hands back.

pub mod color;
pub mod config;
pub mod console;
pub mod constants;
pub mod field;
pub mod history;
pub mod projects;
pub mod scramble;
pub mod sequence;

pub use color::*;
pub use config::*;
pub use console::*;
pub use field::*;
pub use history::*;
pub use projects::*;
pub use scramble::*;
pub use sequence::*;
