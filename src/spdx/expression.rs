use std::collections::BTreeSet;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::SyntaxError;
use crate::spdx::parser;
use crate::spdx::registry::{IdentifierRegistry, SpdxRegistry};

/// The binary operators of an SPDX expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpdxOperator {
    And,
    Or,
    With,
}

impl SpdxOperator {
    /// Binding strength: `WITH` binds tightest, `OR` loosest.
    pub fn precedence(self) -> u8 {
        match self {
            SpdxOperator::Or => 0,
            SpdxOperator::And => 1,
            SpdxOperator::With => 2,
        }
    }
}

impl std::fmt::Display for SpdxOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpdxOperator::And => write!(f, "AND"),
            SpdxOperator::Or => write!(f, "OR"),
            SpdxOperator::With => write!(f, "WITH"),
        }
    }
}

/// A parsed SPDX license expression.
///
/// Trees are built once by [`SpdxExpression::parse`] and never mutated. Leaf
/// license ids are already normalized: deprecated ids that have a current
/// replacement never appear in a parsed tree.
///
/// `AND`/`OR` chains may be arbitrarily long, so every walk over the tree
/// (printing, comparison, cloning, dropping) uses an explicit stack.
#[derive(Debug)]
pub enum SpdxExpression {
    /// A single license id; `or_later` records a trailing `+`.
    LicenseId { id: String, or_later: bool },
    /// An exception id, only ever the right operand of `WITH`.
    LicenseException { id: String },
    Compound {
        left: Box<SpdxExpression>,
        operator: SpdxOperator,
        right: Box<SpdxExpression>,
    },
}

impl SpdxExpression {
    /// Parse `expr` into a normalized expression tree.
    pub fn parse(expr: &str) -> Result<SpdxExpression, SyntaxError> {
        parser::parse(expr)
    }

    pub fn license(id: impl Into<String>) -> Self {
        SpdxExpression::LicenseId {
            id: id.into(),
            or_later: false,
        }
    }

    pub fn license_or_later(id: impl Into<String>) -> Self {
        SpdxExpression::LicenseId {
            id: id.into(),
            or_later: true,
        }
    }

    pub fn exception(id: impl Into<String>) -> Self {
        SpdxExpression::LicenseException { id: id.into() }
    }

    pub fn compound(left: SpdxExpression, operator: SpdxOperator, right: SpdxExpression) -> Self {
        SpdxExpression::Compound {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// The operator of a compound node, `None` for leaves.
    pub fn operator(&self) -> Option<SpdxOperator> {
        match self {
            SpdxExpression::Compound { operator, .. } => Some(*operator),
            _ => None,
        }
    }

    /// Every license id referenced by the tree, unfiltered. Exception ids and
    /// the `+` flag are ignored.
    pub fn license_ids(&self) -> BTreeSet<&str> {
        let mut ids = BTreeSet::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                SpdxExpression::LicenseId { id, .. } => {
                    ids.insert(id.as_str());
                }
                SpdxExpression::LicenseException { .. } => {}
                SpdxExpression::Compound { left, right, .. } => {
                    pending.push(right);
                    pending.push(left);
                }
            }
        }
        ids
    }

    /// Split a compound node into its parts; leaves are handed back as-is.
    pub(crate) fn into_parts(
        mut self,
    ) -> Result<(SpdxExpression, SpdxOperator, SpdxExpression), SpdxExpression> {
        if let SpdxExpression::Compound {
            left,
            operator,
            right,
        } = &mut self
        {
            let operator = *operator;
            return Ok((take(left), operator, take(right)));
        }
        Err(self)
    }

    /// The license ids of the tree that `registry` recognizes, in the
    /// registry's canonical spelling. Unknown ids are silently dropped.
    pub fn license_set<R>(&self, registry: &R) -> BTreeSet<String>
    where
        R: IdentifierRegistry + ?Sized,
    {
        self.license_ids()
            .into_iter()
            .filter_map(|id| registry.license(id))
            .map(|license| license.id.clone())
            .collect()
    }

    /// [`license_set`](Self::license_set) against the embedded SPDX registry.
    pub fn spdx_licenses(&self) -> BTreeSet<String> {
        self.license_set(SpdxRegistry::embedded())
    }
}

/// Move a child out, leaving an empty leaf that drops without recursion.
fn take(child: &mut SpdxExpression) -> SpdxExpression {
    std::mem::replace(child, SpdxExpression::LicenseException { id: String::new() })
}

impl Drop for SpdxExpression {
    fn drop(&mut self) {
        let mut pending = match self {
            SpdxExpression::Compound { left, right, .. } => vec![take(left), take(right)],
            _ => return,
        };
        while let Some(mut node) = pending.pop() {
            if let SpdxExpression::Compound { left, right, .. } = &mut node {
                pending.push(take(left));
                pending.push(take(right));
            }
        }
    }
}

impl Clone for SpdxExpression {
    fn clone(&self) -> Self {
        enum Step<'a> {
            Visit(&'a SpdxExpression),
            Join(SpdxOperator),
        }

        let mut steps = vec![Step::Visit(self)];
        let mut built: Vec<SpdxExpression> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(SpdxExpression::LicenseId { id, or_later }) => {
                    built.push(SpdxExpression::LicenseId {
                        id: id.clone(),
                        or_later: *or_later,
                    })
                }
                Step::Visit(SpdxExpression::LicenseException { id }) => {
                    built.push(SpdxExpression::exception(id.clone()))
                }
                Step::Visit(SpdxExpression::Compound {
                    left,
                    operator,
                    right,
                }) => {
                    steps.push(Step::Join(*operator));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                }
                Step::Join(operator) => match (built.pop(), built.pop()) {
                    (Some(right), Some(left)) => {
                        built.push(SpdxExpression::compound(left, operator, right))
                    }
                    _ => unreachable!("both operands are built before their join"),
                },
            }
        }
        match built.pop() {
            Some(expr) => expr,
            None => unreachable!("the root is always built"),
        }
    }
}

impl PartialEq for SpdxExpression {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (
                    SpdxExpression::LicenseId { id: a, or_later: x },
                    SpdxExpression::LicenseId { id: b, or_later: y },
                ) => {
                    if a != b || x != y {
                        return false;
                    }
                }
                (
                    SpdxExpression::LicenseException { id: a },
                    SpdxExpression::LicenseException { id: b },
                ) => {
                    if a != b {
                        return false;
                    }
                }
                (
                    SpdxExpression::Compound {
                        left: l1,
                        operator: o1,
                        right: r1,
                    },
                    SpdxExpression::Compound {
                        left: l2,
                        operator: o2,
                        right: r2,
                    },
                ) => {
                    if o1 != o2 {
                        return false;
                    }
                    pending.push((r1, r2));
                    pending.push((l1, l2));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for SpdxExpression {}

impl FromStr for SpdxExpression {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpdxExpression::parse(s)
    }
}

impl Serialize for SpdxExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SpdxExpression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        SpdxExpression::parse(&text).map_err(de::Error::custom)
    }
}
