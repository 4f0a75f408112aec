//! SPDX license expression engine.
//!
//! - [`token`] — splits expression text into tokens.
//! - [`parser`] — precedence-climbing parser producing [`SpdxExpression`] trees.
//! - [`deprecated`] — rewrites deprecated ids while leaves are built.
//! - [`printer`] — canonical, minimally parenthesized rendering (`Display`).
//! - [`registry`] — known license and exception ids, used to filter license sets.

pub mod deprecated;
pub mod expression;
pub mod parser;
mod printer;
pub mod registry;
mod registry_data;
pub mod token;

pub use expression::{SpdxExpression, SpdxOperator};
pub use registry::{Identifier, IdentifierRegistry, SpdxRegistry};
