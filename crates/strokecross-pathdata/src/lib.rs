//! Lexer and parser for SVG path-data strings (`M 10 10 L 90 90 Z`).
//!
//! This crate is dependency-free so tooling can read path data without pulling
//! in the rasterizer. Output segments are absolute; relative commands and the
//! `H`/`V` shorthands are resolved during parsing.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `PathData`, `Segment`, `Point` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use strokecross_pathdata::{parse_str, Segment};
//!
//! let data = parse_str("M 20 20 l 160 160").unwrap();
//! assert_eq!(data.segments.len(), 2);
//! assert!(matches!(data.segments[1], Segment::LineTo(p) if p.x == 180.0));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{PathData, Point, Segment};
pub use error::ParseError;
pub use parser::parse_str;
