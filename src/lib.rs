//! `spdx-expr` — parse, normalize and pretty-print SPDX license expressions.
//!
//! ```
//! use spdx_expr::SpdxExpression;
//!
//! let expr = SpdxExpression::parse("(MIT OR (Apache-2.0)) AND GPL-2.0+").unwrap();
//! assert_eq!(expr.to_string(), "(MIT OR Apache-2.0) AND GPL-2.0-or-later");
//! ```
//!
//! Parsing, printing and license-set extraction are pure functions over
//! immutable trees; the embedded registry is built once and shared read-only.

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod spdx;

pub use error::{SyntaxError, SyntaxErrorKind};
pub use spdx::{Identifier, IdentifierRegistry, SpdxExpression, SpdxOperator, SpdxRegistry};
