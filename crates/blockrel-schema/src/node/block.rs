use crate::{
    error::ErrorTree,
    flatten::{FlatField, flatten},
    node::FieldList,
    validate::naming,
    visit::{ValidateNode, VisitableNode, Visitor},
};
use serde::{Deserialize, Serialize};

///
/// BlockShape
///
/// One named variant of a polymorphic blocks field: a logical name, the
/// localization flag inherited from its enclosing context, and an ordered
/// field list. Shapes are read-only declarations for the duration of a
/// schema-build pass.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BlockShape {
    pub ident: String,

    #[serde(default)]
    pub localized: bool,

    #[serde(default)]
    pub fields: FieldList,
}

impl BlockShape {
    #[must_use]
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            localized: false,
            fields: FieldList::default(),
        }
    }

    /// Flatten this shape's field tree, seeded with the shape's own
    /// localization flag and an empty prefix.
    #[must_use]
    pub fn flatten(&self) -> Vec<FlatField> {
        flatten(&self.fields, self.localized, "")
    }
}

impl ValidateNode for BlockShape {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = naming::validate_block_ident(&self.ident) {
            errs.add(e);
        }

        errs.result()
    }
}

impl VisitableNode for BlockShape {
    fn route_key(&self) -> String {
        self.ident.clone()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        self.fields.accept(v);
    }
}
