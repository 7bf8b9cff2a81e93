//! Relational side of block-shape reconciliation: table snapshots, the
//! validator that decides whether a table is an exact structural match for
//! a declared block shape, and the per-pass registry that resolves
//! physical table identities for colliding shapes.

pub mod reconcile;
pub mod registry;
pub mod table;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        reconcile::{Mismatch, diagnose, is_identical},
        registry::{RegistryError, ShapeId, ShapeRegistry, table_ident},
        table::{Column, ColumnType, TableDescriptor},
    };
    pub use blockrel_schema::prelude::*;
}
