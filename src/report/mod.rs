//! Report renderers for processed expressions.
//!
//! - [`terminal`] — colored table with a summary line; respects `--quiet`.
//! - [`json`] — pretty-printed JSON array of [`ExpressionReport`](crate::models::ExpressionReport)s.

pub mod json;
pub mod terminal;
