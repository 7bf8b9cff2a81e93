use crate::{err, error::ErrorTree, node::BlockShape};
use std::collections::BTreeSet;

/// Reserved structural column names.
///
/// A fixed, versioned contract with the storage layer (ordering, parent
/// linkage, locale, path, uniqueness bookkeeping). Any addition here is a
/// breaking change and must land in lockstep with the storage layer's
/// schema conventions.
pub const RESERVED_COLUMNS: [&str; 5] = ["_locale", "_order", "_parentID", "_path", "_uuid"];

#[must_use]
pub fn is_reserved_column(name: &str) -> bool {
    RESERVED_COLUMNS.contains(&name)
}

/// Flattened columns must be unique within one shape and must never collide
/// with a reserved structural name.
///
/// Legacy behavior silently assumed uniqueness; failing loudly at
/// registration is a deliberate strengthening.
pub(crate) fn validate_flat_columns(shape: &BlockShape, errs: &mut ErrorTree) {
    let mut seen = BTreeSet::new();

    for flat in shape.flatten() {
        if is_reserved_column(&flat.column) {
            err!(
                errs,
                "column '{}' in block '{}' collides with a reserved structural column",
                flat.column,
                shape.ident
            );
        }

        if !seen.insert(flat.column.clone()) {
            err!(
                errs,
                "duplicate column '{}' in block '{}'",
                flat.column,
                shape.ident
            );
        }
    }
}

///
/// TESTS
///
