//! Field flattening: recursive reduction of a nested field tree into the
//! flat ordered column namespace of one block table.

use crate::{node::Field, types::Localize};
use serde::Serialize;

///
/// FlatField
///
/// Leaf descriptor produced by flattening. `column` is the underscore-joined
/// path of all enclosing named containers plus the leaf's own name; named
/// tabs are the exception and anchor their column at the tab's bare name.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FlatField {
    pub column: String,
    pub localized: bool,
}

/// Flatten a field tree into its flat ordered column list.
///
/// Output order equals declaration order, depth-first; the order carries no
/// meaning for callers but stays reproducible for stable diagnostics.
/// Uniqueness of column names is assumed here, not enforced; the validation
/// pass detects duplicates at registration.
#[must_use]
pub fn flatten(fields: &[Field], parent_localized: bool, prefix: &str) -> Vec<FlatField> {
    let mut out = Vec::new();
    flatten_into(fields, parent_localized, prefix, &mut out);

    out
}

fn flatten_into(fields: &[Field], parent_localized: bool, prefix: &str, out: &mut Vec<FlatField>) {
    for field in fields {
        match field {
            Field::Group(group) => {
                let localized = group.localize.or_inherited(parent_localized);
                match &group.ident {
                    Some(ident) => {
                        let prefix = format!("{prefix}{ident}_");
                        flatten_into(&group.fields, localized, &prefix, out);
                    }
                    None => flatten_into(&group.fields, localized, prefix, out),
                }
            }

            // Owns its storage elsewhere; contributes no columns here.
            Field::Relational(_) => {}

            Field::Scalar(scalar) => {
                // Multi-value scalars are opaque, same as relational fields.
                if scalar.many {
                    continue;
                }

                out.push(FlatField {
                    column: format!("{prefix}{}", scalar.ident),
                    localized: scalar.localize.resolved(parent_localized),
                });
            }

            Field::Tabs(tabs) => {
                for tab in &tabs.tabs {
                    match &tab.ident {
                        // A named tab stores its sub-fields in one structured
                        // column anchored at the tab's own name; enclosing
                        // prefixes do not apply. It carries only its own
                        // localization flag.
                        Some(ident) => out.push(FlatField {
                            column: ident.clone(),
                            localized: matches!(tab.localize, Localize::Yes),
                        }),
                        None => flatten_into(
                            &tab.fields,
                            tab.localize.or_inherited(parent_localized),
                            prefix,
                            out,
                        ),
                    }
                }
            }

            // No stored representation.
            Field::Ui(_) => {}
        }
    }
}

///
/// TESTS
///
