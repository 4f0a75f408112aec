//! Rewrites deprecated SPDX identifiers to their current form.
//!
//! Applied by the parser before a leaf is built. Lookups are ASCII
//! case-insensitive; anything not listed here is kept verbatim, including
//! deprecated ids that have no replacement (e.g. `wxWindows`, `AGPL-3.0`).

use tracing::debug;

use crate::spdx::expression::{SpdxExpression, SpdxOperator};

/// Deprecated ids split into an explicit `-only` and `-or-later` form.
/// The legacy `+` suffix selects the `-or-later` column.
const VERSIONED_LICENSES: &[(&str, &str, &str)] = &[
    ("GPL-1.0", "GPL-1.0-only", "GPL-1.0-or-later"),
    ("GPL-2.0", "GPL-2.0-only", "GPL-2.0-or-later"),
    ("GPL-3.0", "GPL-3.0-only", "GPL-3.0-or-later"),
    ("LGPL-2.0", "LGPL-2.0-only", "LGPL-2.0-or-later"),
    ("LGPL-2.1", "LGPL-2.1-only", "LGPL-2.1-or-later"),
    ("LGPL-3.0", "LGPL-3.0-only", "LGPL-3.0-or-later"),
];

/// Legacy single tokens that stand for `<license> WITH <exception>`. The
/// license half goes through [`VERSIONED_LICENSES`] afterwards.
const COMBINED: &[(&str, &str, &str)] = &[
    ("GPL-2.0-with-autoconf-exception", "GPL-2.0", "Autoconf-exception-2.0"),
    ("GPL-2.0-with-bison-exception", "GPL-2.0", "Bison-exception-2.2"),
    ("GPL-2.0-with-classpath-exception", "GPL-2.0", "Classpath-exception-2.0"),
    ("GPL-2.0-with-font-exception", "GPL-2.0", "Font-exception-2.0"),
    ("GPL-2.0-with-GCC-exception", "GPL-2.0", "GCC-exception-2.0"),
    ("GPL-3.0-with-autoconf-exception", "GPL-3.0", "Autoconf-exception-3.0"),
    ("GPL-3.0-with-GCC-exception", "GPL-3.0", "GCC-exception-3.1"),
];

/// Unversioned exception names still found in old manifests.
const EXCEPTIONS: &[(&str, &str)] = &[
    ("Bison-exception", "Bison-exception-2.2"),
    ("Classpath-exception", "Classpath-exception-2.0"),
    ("Font-exception", "Font-exception-2.0"),
];

fn lookup<'t, T>(table: &'t [T], id: &str, key: impl Fn(&T) -> &str) -> Option<&'t T> {
    table.iter().find(|entry| key(*entry).eq_ignore_ascii_case(id))
}

/// The canonical leaf for a license id token, honouring the `+` suffix.
fn license_leaf(id: &str, plus: bool) -> SpdxExpression {
    match lookup(VERSIONED_LICENSES, id, |e| e.0) {
        Some(&(_, only, or_later)) => {
            let canonical = if plus { or_later } else { only };
            debug!(deprecated = id, plus, canonical, "rewrote deprecated license id");
            SpdxExpression::license(canonical)
        }
        None if plus => SpdxExpression::license_or_later(id),
        None => SpdxExpression::license(id),
    }
}

/// Resolve a license id token into a normalized subtree.
///
/// Usually a single leaf; a legacy combined token expands to a `WITH`
/// compound.
pub fn resolve_license(id: &str, plus: bool) -> SpdxExpression {
    if let Some(&(_, license, exception)) = lookup(COMBINED, id, |e| e.0) {
        debug!(deprecated = id, license, exception, "expanded combined license token");
        return SpdxExpression::compound(
            license_leaf(license, plus),
            SpdxOperator::With,
            SpdxExpression::exception(exception),
        );
    }
    license_leaf(id, plus)
}

/// Resolve an exception id token into a normalized exception leaf.
pub fn resolve_exception(id: &str) -> SpdxExpression {
    match lookup(EXCEPTIONS, id, |e| e.0) {
        Some(&(_, canonical)) => {
            debug!(deprecated = id, canonical, "rewrote deprecated exception id");
            SpdxExpression::exception(canonical)
        }
        None => SpdxExpression::exception(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versioned_license() {
        assert_eq!(resolve_license("GPL-2.0", false), SpdxExpression::license("GPL-2.0-only"));
        assert_eq!(
            resolve_license("GPL-2.0", true),
            SpdxExpression::license("GPL-2.0-or-later")
        );
        assert_eq!(resolve_license("lgpl-2.1", false), SpdxExpression::license("LGPL-2.1-only"));
    }

    #[test]
    fn test_unlisted_license_kept_verbatim() {
        assert_eq!(resolve_license("wxWindows", false), SpdxExpression::license("wxWindows"));
        assert_eq!(resolve_license("AGPL-3.0", false), SpdxExpression::license("AGPL-3.0"));
        assert_eq!(resolve_license("MIT", true), SpdxExpression::license_or_later("MIT"));
    }

    #[test]
    fn test_combined_token() {
        assert_eq!(
            resolve_license("GPL-3.0-with-GCC-exception", false),
            SpdxExpression::compound(
                SpdxExpression::license("GPL-3.0-only"),
                SpdxOperator::With,
                SpdxExpression::exception("GCC-exception-3.1"),
            )
        );
        assert_eq!(
            resolve_license("GPL-2.0-with-classpath-exception", true),
            SpdxExpression::compound(
                SpdxExpression::license("GPL-2.0-or-later"),
                SpdxOperator::With,
                SpdxExpression::exception("Classpath-exception-2.0"),
            )
        );
    }

    #[test]
    fn test_every_combined_entry_is_a_with_compound() {
        for &(token, license, exception) in COMBINED {
            let (left, operator, right) = resolve_license(token, false).into_parts().unwrap();
            assert_eq!(operator, SpdxOperator::With, "{}", token);
            assert_eq!(left, license_leaf(license, false), "{}", token);
            assert_eq!(right, SpdxExpression::exception(exception), "{}", token);
        }
    }

    #[test]
    fn test_exception() {
        assert_eq!(
            resolve_exception("classpath-exception"),
            SpdxExpression::exception("Classpath-exception-2.0")
        );
        assert_eq!(
            resolve_exception("LLVM-exception"),
            SpdxExpression::exception("LLVM-exception")
        );
    }
}
