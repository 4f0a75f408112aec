use serde::Serialize;

use crate::spdx::{IdentifierRegistry, SpdxExpression};

/// Outcome of processing one input expression.
#[derive(Debug, Clone, Serialize)]
pub struct ExpressionReport {
    pub input: String,
    pub status: ExpressionStatus,
    /// Canonical form; `None` when the input is unparseable.
    pub canonical: Option<String>,
    /// Registry-recognised license ids referenced by the expression.
    pub licenses: Vec<LicenseEntry>,
    /// Referenced ids the registry does not know.
    pub unknown: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LicenseEntry {
    pub id: String,
    pub deprecated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionStatus {
    Canonical,
    Normalized,
    Unparseable,
}

impl std::fmt::Display for ExpressionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpressionStatus::Canonical => write!(f, "canonical"),
            ExpressionStatus::Normalized => write!(f, "normalized"),
            ExpressionStatus::Unparseable => write!(f, "license unparseable"),
        }
    }
}

impl ExpressionReport {
    /// Parse `input` and describe it against `registry`.
    pub fn build<R>(input: &str, registry: &R) -> Self
    where
        R: IdentifierRegistry + ?Sized,
    {
        let expr = match SpdxExpression::parse(input) {
            Ok(expr) => expr,
            Err(err) => {
                return ExpressionReport {
                    input: input.to_string(),
                    status: ExpressionStatus::Unparseable,
                    canonical: None,
                    licenses: Vec::new(),
                    unknown: Vec::new(),
                    error: Some(err.to_string()),
                }
            }
        };

        let canonical = expr.to_string();
        let status = if canonical == input {
            ExpressionStatus::Canonical
        } else {
            ExpressionStatus::Normalized
        };

        let mut licenses = Vec::new();
        let mut unknown = Vec::new();
        for id in expr.license_ids() {
            match registry.license(id) {
                Some(license) if licenses.iter().any(|l: &LicenseEntry| l.id == license.id) => {}
                Some(license) => licenses.push(LicenseEntry {
                    id: license.id.clone(),
                    deprecated: license.deprecated,
                }),
                None => unknown.push(id.to_string()),
            }
        }

        ExpressionReport {
            input: input.to_string(),
            status,
            canonical: Some(canonical),
            licenses,
            unknown,
            error: None,
        }
    }

    pub fn is_parseable(&self) -> bool {
        self.status != ExpressionStatus::Unparseable
    }
}
