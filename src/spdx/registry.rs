//! Lookup of known SPDX license and exception ids.
//!
//! The parser never consults a registry; unknown ids survive parsing as
//! opaque leaves. Registries only decide what
//! [`SpdxExpression::license_set`](crate::SpdxExpression::license_set)
//! reports.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::spdx::registry_data::{EXCEPTIONS, LICENSES, LIST_VERSION};

/// A registry entry in its canonical spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub id: String,
    pub deprecated: bool,
}

impl Identifier {
    pub fn new(id: impl Into<String>) -> Self {
        Identifier {
            id: id.into(),
            deprecated: false,
        }
    }

    pub fn deprecated(id: impl Into<String>) -> Self {
        Identifier {
            id: id.into(),
            deprecated: true,
        }
    }
}

/// Read-only table of license and exception ids.
pub trait IdentifierRegistry: Send + Sync {
    /// Version of the id list this registry was built from.
    fn version(&self) -> &str;

    fn license(&self, id: &str) -> Option<&Identifier>;

    fn exception(&self, id: &str) -> Option<&Identifier>;

    fn is_known_license(&self, id: &str) -> bool {
        self.license(id).is_some()
    }

    fn is_known_exception(&self, id: &str) -> bool {
        self.exception(id).is_some()
    }
}

/// Hash-backed registry; lookups ignore ASCII case.
#[derive(Debug, Clone)]
pub struct SpdxRegistry {
    version: String,
    licenses: HashMap<String, Identifier>,
    exceptions: HashMap<String, Identifier>,
}

fn index(ids: impl IntoIterator<Item = Identifier>) -> HashMap<String, Identifier> {
    ids.into_iter()
        .map(|entry| (entry.id.to_ascii_lowercase(), entry))
        .collect()
}

impl SpdxRegistry {
    pub fn new(
        version: impl Into<String>,
        licenses: impl IntoIterator<Item = Identifier>,
        exceptions: impl IntoIterator<Item = Identifier>,
    ) -> Self {
        SpdxRegistry {
            version: version.into(),
            licenses: index(licenses),
            exceptions: index(exceptions),
        }
    }

    /// The SPDX list snapshot compiled into this crate, built on first use.
    pub fn embedded() -> &'static SpdxRegistry {
        static EMBEDDED: OnceLock<SpdxRegistry> = OnceLock::new();
        EMBEDDED.get_or_init(|| {
            let entries = |table: &[(&str, bool)]| -> Vec<Identifier> {
                table
                    .iter()
                    .map(|&(id, deprecated)| Identifier {
                        id: id.to_string(),
                        deprecated,
                    })
                    .collect()
            };
            SpdxRegistry::new(LIST_VERSION, entries(LICENSES), entries(EXCEPTIONS))
        })
    }

    /// Add further current ids, e.g. `LicenseRef-` ids from configuration.
    /// Ids already present keep their existing entry.
    pub fn extend<L, E>(&mut self, licenses: L, exceptions: E)
    where
        L: IntoIterator,
        L::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        for id in licenses {
            let entry = Identifier::new(id);
            self.licenses
                .entry(entry.id.to_ascii_lowercase())
                .or_insert(entry);
        }
        for id in exceptions {
            let entry = Identifier::new(id);
            self.exceptions
                .entry(entry.id.to_ascii_lowercase())
                .or_insert(entry);
        }
    }

    pub fn license_count(&self) -> usize {
        self.licenses.len()
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }
}

impl IdentifierRegistry for SpdxRegistry {
    fn version(&self) -> &str {
        &self.version
    }

    fn license(&self, id: &str) -> Option<&Identifier> {
        self.licenses.get(&id.to_ascii_lowercase())
    }

    fn exception(&self, id: &str) -> Option<&Identifier> {
        self.exceptions.get(&id.to_ascii_lowercase())
    }
}
