//! Common data structures for Monkey.
//!
//! This crate provides the source location types used across the toolchain:
//! - `BytePos`: a byte offset into a source string
//! - `Span`: a half-open byte range attached to tokens and diagnostics

mod span;

pub use span::{BytePos, Span};
