mod block;
mod field;

pub use block::BlockShape;
pub use field::{
    Field, FieldList, GroupField, RelationalField, ScalarField, Tab, TabsField, UiField,
};
