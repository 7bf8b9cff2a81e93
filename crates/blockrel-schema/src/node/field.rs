use crate::{
    error::ErrorTree,
    types::{Localize, RelationKind, Scalar},
    validate::naming,
    visit::{ValidateNode, VisitableNode, Visitor},
};
use derive_more::Deref;
use serde::{Deserialize, Serialize};

///
/// FieldList
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

impl FieldList {
    #[must_use]
    pub const fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.ident() == Some(ident))
    }
}

impl From<Vec<Field>> for FieldList {
    fn from(fields: Vec<Field>) -> Self {
        Self::new(fields)
    }
}

impl ValidateNode for FieldList {}

impl VisitableNode for FieldList {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in &self.fields {
            node.accept(v);
        }
    }
}

///
/// Field
///
/// Closed set of field-node kinds. Dispatch is always per variant; nothing
/// in the crate inspects a field by type-name string.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[remain::sorted]
pub enum Field {
    Group(GroupField),
    Relational(RelationalField),
    Scalar(ScalarField),
    Tabs(TabsField),
    Ui(UiField),
}

impl Field {
    /// The field's own name segment, if it carries one.
    #[must_use]
    pub fn ident(&self) -> Option<&str> {
        match self {
            Self::Group(f) => f.ident.as_deref(),
            Self::Relational(f) => Some(&f.ident),
            Self::Scalar(f) => Some(&f.ident),
            Self::Tabs(_) => None,
            Self::Ui(f) => f.ident.as_deref(),
        }
    }

    #[must_use]
    pub fn scalar(ident: impl Into<String>, ty: Scalar) -> Self {
        Self::Scalar(ScalarField::new(ident, ty))
    }

    #[must_use]
    pub fn relational(ident: impl Into<String>, kind: RelationKind) -> Self {
        Self::Relational(RelationalField::new(ident, kind))
    }
}

impl ValidateNode for Field {
    fn validate(&self) -> Result<(), ErrorTree> {
        match self {
            Self::Group(f) => f.validate(),
            Self::Relational(f) => f.validate(),
            Self::Scalar(f) => f.validate(),
            Self::Tabs(f) => f.validate(),
            Self::Ui(f) => f.validate(),
        }
    }
}

impl VisitableNode for Field {
    fn route_key(&self) -> String {
        self.ident().unwrap_or_default().to_string()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        match self {
            Self::Group(f) => f.fields.accept(v),
            Self::Tabs(f) => {
                for tab in &f.tabs {
                    tab.accept(v);
                }
            }
            Self::Relational(_) | Self::Scalar(_) | Self::Ui(_) => {}
        }
    }
}

///
/// ScalarField
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScalarField {
    pub ident: String,
    pub ty: Scalar,

    #[serde(default, skip_serializing_if = "Localize::is_inherit")]
    pub localize: Localize,

    /// Multi-value scalars own their storage elsewhere, like relational
    /// fields, and never land as a column on the block's table.
    #[serde(default)]
    pub many: bool,
}

impl ScalarField {
    #[must_use]
    pub fn new(ident: impl Into<String>, ty: Scalar) -> Self {
        Self {
            ident: ident.into(),
            ty,
            localize: Localize::Inherit,
            many: false,
        }
    }
}

impl ValidateNode for ScalarField {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = naming::validate_field_ident(&self.ident) {
            errs.add(e);
        }

        errs.result()
    }
}

///
/// GroupField
///
/// Container of further fields. A named group contributes its name to the
/// column prefix of everything beneath it; an unnamed group splices its
/// sub-fields directly into the parent's namespace.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GroupField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ident: Option<String>,

    #[serde(default, skip_serializing_if = "Localize::is_inherit")]
    pub localize: Localize,

    #[serde(default)]
    pub fields: FieldList,
}

impl GroupField {
    #[must_use]
    pub fn new(ident: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            ident: Some(ident.into()),
            localize: Localize::Inherit,
            fields: FieldList::new(fields),
        }
    }

    #[must_use]
    pub fn unnamed(fields: Vec<Field>) -> Self {
        Self {
            ident: None,
            localize: Localize::Inherit,
            fields: FieldList::new(fields),
        }
    }
}

impl ValidateNode for GroupField {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Some(ident) = &self.ident
            && let Err(e) = naming::validate_field_ident(ident)
        {
            errs.add(e);
        }

        errs.result()
    }
}

///
/// TabsField
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TabsField {
    pub tabs: Vec<Tab>,
}

impl TabsField {
    #[must_use]
    pub const fn new(tabs: Vec<Tab>) -> Self {
        Self { tabs }
    }
}

impl ValidateNode for TabsField {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.tabs.is_empty() {
            errs.add("tabs field declares no tabs");
        }

        errs.result()
    }
}

///
/// Tab
///
/// A named tab stores its sub-fields in one structured column under its own
/// name; an unnamed tab splices its sub-fields into the parent's namespace.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Tab {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ident: Option<String>,

    #[serde(default, skip_serializing_if = "Localize::is_inherit")]
    pub localize: Localize,

    #[serde(default)]
    pub fields: FieldList,
}

impl Tab {
    #[must_use]
    pub fn named(ident: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            ident: Some(ident.into()),
            localize: Localize::Inherit,
            fields: FieldList::new(fields),
        }
    }

    #[must_use]
    pub fn unnamed(fields: Vec<Field>) -> Self {
        Self {
            ident: None,
            localize: Localize::Inherit,
            fields: FieldList::new(fields),
        }
    }
}

impl ValidateNode for Tab {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Some(ident) = &self.ident
            && let Err(e) = naming::validate_field_ident(ident)
        {
            errs.add(e);
        }

        errs.result()
    }
}

impl VisitableNode for Tab {
    fn route_key(&self) -> String {
        self.ident.clone().unwrap_or_default()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        self.fields.accept(v);
    }
}

///
/// RelationalField
///
/// Opaque-relational storage: arrays, nested block sets, relationships and
/// uploads persist in their own tables and are invisible to column checks.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RelationalField {
    pub ident: String,
    pub kind: RelationKind,
}

impl RelationalField {
    #[must_use]
    pub fn new(ident: impl Into<String>, kind: RelationKind) -> Self {
        Self {
            ident: ident.into(),
            kind,
        }
    }
}

impl ValidateNode for RelationalField {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = naming::validate_field_ident(&self.ident) {
            errs.add(e);
        }

        errs.result()
    }
}

///
/// UiField
/// Purely presentational; no stored representation.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UiField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ident: Option<String>,
}

impl ValidateNode for UiField {}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_list_get_finds_by_ident() {
        let list = FieldList::new(vec![
            Field::scalar("title", Scalar::Text),
            Field::relational("gallery", RelationKind::Upload),
        ]);

        assert!(matches!(list.get("gallery"), Some(Field::Relational(_))));
        assert!(list.get("missing").is_none());
    }

    #[test]
    fn tabs_carry_no_ident_of_their_own() {
        let field = Field::Tabs(TabsField::new(vec![Tab::named("meta", vec![])]));
        assert_eq!(field.ident(), None);
    }

    #[test]
    fn empty_tabs_fail_validation() {
        let field = TabsField::new(vec![]);
        assert!(field.validate().is_err());
    }
}
