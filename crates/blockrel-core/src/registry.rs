//! Per-build-pass shape registry: owns the registered block shapes and the
//! out-of-band identity tags that resolve physical table names.
//!
//! The registry is an explicit value created at the start of one
//! schema-build pass and dropped at its end, so repeated builds stay
//! independent. Tags live in a side-table keyed by [`ShapeId`], never
//! inside the shape declaration itself; schema authors never see them.

use blockrel_schema::{error::ErrorTree, node::BlockShape, validate::validate_shape};
use convert_case::{Case, Casing};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// RegistryError
///

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),

    #[error("unknown shape id: {0}")]
    UnknownShape(ShapeId),
}

///
/// ShapeId
///
/// Arena index handed out at registration. Stable for the lifetime of one
/// registry, meaningless across registries.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct ShapeId(usize);

///
/// ShapeRegistry
///

#[derive(Debug, Default)]
pub struct ShapeRegistry {
    shapes: Vec<BlockShape>,
    tags: BTreeMap<ShapeId, u32>,
}

impl ShapeRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shapes: Vec::new(),
            tags: BTreeMap::new(),
        }
    }

    /// Register a shape for this pass, failing loudly on structural
    /// problems (bad idents, duplicate or reserved flattened columns).
    pub fn register(&mut self, shape: BlockShape) -> Result<ShapeId, RegistryError> {
        validate_shape(&shape).map_err(RegistryError::Validation)?;

        let id = ShapeId(self.shapes.len());
        self.shapes.push(shape);

        Ok(id)
    }

    pub fn shape(&self, id: ShapeId) -> Result<&BlockShape, RegistryError> {
        self.shapes
            .get(id.0)
            .ok_or(RegistryError::UnknownShape(id))
    }

    /// Assign the disambiguation tag for a shape whose logical name
    /// collides with a differently-shaped block. Repeat calls overwrite;
    /// serializing concurrent writers is the caller's responsibility.
    pub fn assign_tag(&mut self, id: ShapeId, tag: u32) -> Result<(), RegistryError> {
        if id.0 >= self.shapes.len() {
            return Err(RegistryError::UnknownShape(id));
        }
        self.tags.insert(id, tag);

        Ok(())
    }

    /// Resolve the physical table name for a registered shape.
    ///
    /// Returns `logical_name` unchanged when no tag was assigned or the
    /// assigned tag is zero (zero is the "unset" sentinel), otherwise
    /// `{logical_name}_{tag}`. Repeated calls are stable.
    pub fn resolve_table_name(
        &self,
        id: ShapeId,
        logical_name: &str,
    ) -> Result<String, RegistryError> {
        if id.0 >= self.shapes.len() {
            return Err(RegistryError::UnknownShape(id));
        }

        let name = match self.tags.get(&id) {
            Some(&tag) if tag != 0 => format!("{logical_name}_{tag}"),
            _ => logical_name.to_string(),
        };

        Ok(name)
    }
}

/// Snake-case a logical block name into the storage layer's physical
/// identifier convention. The resolver itself never re-cases its input.
#[must_use]
pub fn table_ident(logical: &str) -> String {
    logical.to_case(Case::Snake)
}

///
/// TESTS
///
