//! Snapshots of persisted tables, introspected upstream and read once per
//! validation call.

use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use blockrel_schema::validate::columns::{RESERVED_COLUMNS, is_reserved_column};

///
/// ColumnType
///
/// Column kinds the storage layer reports. Only column *presence*
/// participates in matching; the type rides along for diagnostics and
/// serialized snapshots.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum ColumnType {
    Boolean,
    Integer,
    Jsonb,
    Numeric,
    Text,
    Timestamp,
    Uuid,
    Varchar,
}

///
/// Column
///

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Column {
    pub ty: ColumnType,

    #[serde(default)]
    pub not_null: bool,
}

impl Column {
    #[must_use]
    pub const fn new(ty: ColumnType) -> Self {
        Self { ty, not_null: false }
    }
}

///
/// TableDescriptor
///
/// A table name plus an unordered column map with unique keys. A locale
/// table is a second descriptor of the same shape holding the per-locale
/// copies of localized columns.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TableDescriptor {
    pub ident: String,

    #[serde(default)]
    pub columns: BTreeMap<String, Column>,
}

impl TableDescriptor {
    #[must_use]
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            columns: BTreeMap::new(),
        }
    }

    /// Builder-style column insertion, mostly for tests and fixtures.
    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, ty: ColumnType) -> Self {
        self.columns.insert(name.into(), Column::new(ty));
        self
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Whether the storage layer marked this table as locale-carrying.
    #[must_use]
    pub fn has_locale_marker(&self) -> bool {
        self.has_column("_locale")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_type_display_and_parse_round_trip() {
        assert_eq!(ColumnType::Jsonb.to_string(), "Jsonb");
        assert_eq!("Varchar".parse::<ColumnType>().unwrap(), ColumnType::Varchar);
    }

    #[test]
    fn locale_marker_follows_column_presence() {
        let plain = TableDescriptor::new("hero").with_column("title", ColumnType::Varchar);
        let localized = plain.clone().with_column("_locale", ColumnType::Varchar);

        assert!(!plain.has_locale_marker());
        assert!(localized.has_locale_marker());
    }

    #[test]
    fn descriptor_deserializes_from_introspection_snapshot() {
        let descriptor: TableDescriptor = serde_json::from_value(serde_json::json!({
            "ident": "pages_blocks_hero",
            "columns": {
                "_order": { "ty": "Integer", "not_null": true },
                "_parentID": { "ty": "Uuid", "not_null": true },
                "title": { "ty": "Varchar" }
            }
        }))
        .unwrap();

        assert_eq!(descriptor.ident, "pages_blocks_hero");
        assert!(descriptor.has_column("title"));
        assert!(!descriptor.columns["title"].not_null);
        assert!(descriptor.columns["_order"].not_null);
    }
}
