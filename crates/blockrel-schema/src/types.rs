use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Localize
///
/// Tri-state localization declaration. `Inherit` follows the enclosing
/// context, `Yes` localizes the field individually, and `No` opts out of a
/// localized ancestor.
///

#[derive(Clone, Copy, Default, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum Localize {
    #[default]
    Inherit,
    Yes,
    No,
}

impl Localize {
    /// Resolve the flag for a leaf under a (possibly localized) ancestor.
    #[must_use]
    pub const fn resolved(self, parent_localized: bool) -> bool {
        match self {
            Self::Inherit => parent_localized,
            Self::Yes => true,
            Self::No => false,
        }
    }

    /// Combine into the flag propagated down through a container boundary.
    ///
    /// Containers only ever add localization; a container-level `No` does
    /// not reset an already-localized ancestor for its children.
    #[must_use]
    pub const fn or_inherited(self, parent_localized: bool) -> bool {
        parent_localized || matches!(self, Self::Yes)
    }

    #[must_use]
    pub const fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

///
/// Scalar
///
/// Leaf data-field kinds. Every scalar stores a single concrete value in
/// one column of the block's table.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum Scalar {
    Checkbox,
    Code,
    Date,
    Email,
    Json,
    Number,
    Point,
    Radio,
    Select,
    Text,
    Textarea,
}

///
/// RelationKind
///
/// Field kinds whose values own their storage elsewhere (child tables,
/// join tables). They never appear as columns on the block's own table.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum RelationKind {
    Array,
    Blocks,
    Relationship,
    Upload,
}

///
/// TESTS
///
