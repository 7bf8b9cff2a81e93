//! Schema declarations for block-based document schemas: the field-node
//! tree, block shapes, visitor traversal, validation, and the flattener
//! that projects a nested field tree into a flat column namespace.

pub mod error;
pub mod flatten;
pub mod node;
pub mod types;
pub mod validate;
pub mod visit;

/// Maximum length for block logical names.
pub const MAX_BLOCK_NAME_LEN: usize = 64;

/// Maximum length for field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        flatten::{FlatField, flatten},
        node::*,
        types::{Localize, RelationKind, Scalar},
        visit::{ValidateNode, ValidateVisitor, VisitableNode, Visitor},
    };
    pub use serde::{Deserialize, Serialize};
}
