//! Shape validation: decide whether a candidate table is an exact
//! structural match for one declared block shape.

use crate::table::{TableDescriptor, is_reserved_column};
use blockrel_schema::node::BlockShape;
use serde::Serialize;
use std::fmt::{self, Display};

/// Whether `table` (and `locale_table`, when supplied) is an exact
/// structural match for `shape`.
///
/// A flattened field targets the locale table's columns when it is
/// localized and a locale table was supplied, otherwise the base table's.
/// Every flattened field must find its column, every non-reserved base
/// column must be explained by the declared fields, and the base table's
/// `_locale` marker must agree with the shape's localization flag.
///
/// Known limitation, kept on purpose: the reverse direction only detects
/// "the shape flattens to nothing yet non-reserved columns exist". An
/// unexplained column sitting next to at least one declared field passes
/// this verdict; callers have relied on that permissiveness, so only
/// [`diagnose`] performs the precise check.
#[must_use]
pub fn is_identical(
    shape: &BlockShape,
    table: &TableDescriptor,
    locale_table: Option<&TableDescriptor>,
) -> bool {
    let flat = shape.flatten();

    // Every declared field must land in its target column set.
    for field in &flat {
        let target = match locale_table {
            Some(locales) if field.localized => locales,
            _ => table,
        };

        if !target.has_column(&field.column) {
            return false;
        }
    }

    // Reverse direction, at its historical strength (see above): only the
    // zero-field case is detectable here.
    if flat.is_empty() && table.columns.keys().any(|c| !is_reserved_column(c)) {
        return false;
    }

    // The locale marker must agree with the shape's localization flag.
    shape.localized == table.has_locale_marker()
}

///
/// Mismatch
///
/// One specific disagreement between a shape and a candidate table,
/// reported by [`diagnose`].
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Mismatch {
    /// A flattened field has no column in its target table.
    MissingColumn { column: String, localized: bool },

    /// A non-reserved base-table column matches no flattened field.
    UnexpectedColumn { column: String },

    /// The base table's `_locale` marker contradicts the shape.
    LocaleMarkerDisagrees {
        localized: bool,
        has_locale_column: bool,
    },
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { column, localized } => {
                let table = if *localized { "locale table" } else { "table" };
                write!(f, "missing column '{column}' in {table}")
            }
            Self::UnexpectedColumn { column } => {
                write!(f, "unexpected column '{column}'")
            }
            Self::LocaleMarkerDisagrees {
                localized,
                has_locale_column,
            } => write!(
                f,
                "shape localized = {localized} but table has _locale column = {has_locale_column}"
            ),
        }
    }
}

/// Report every specific disagreement between `shape` and the candidate
/// table pair. Empty output means a clean match.
///
/// Diagnostic only: unlike [`is_identical`] this runs the *precise*
/// reverse check (each unexplained non-reserved column is reported), so it
/// may list mismatches the boolean verdict deliberately tolerates.
#[must_use]
pub fn diagnose(
    shape: &BlockShape,
    table: &TableDescriptor,
    locale_table: Option<&TableDescriptor>,
) -> Vec<Mismatch> {
    let flat = shape.flatten();
    let mut out = Vec::new();

    for field in &flat {
        let target = match locale_table {
            Some(locales) if field.localized => locales,
            _ => table,
        };

        if !target.has_column(&field.column) {
            out.push(Mismatch::MissingColumn {
                column: field.column.clone(),
                localized: field.localized,
            });
        }
    }

    for column in table.columns.keys() {
        if !is_reserved_column(column) && !flat.iter().any(|f| f.column == *column) {
            out.push(Mismatch::UnexpectedColumn {
                column: column.clone(),
            });
        }
    }

    if shape.localized != table.has_locale_marker() {
        out.push(Mismatch::LocaleMarkerDisagrees {
            localized: shape.localized,
            has_locale_column: table.has_locale_marker(),
        });
    }

    out
}

///
/// TESTS
///
