//! Shape validation orchestration and shared helpers.

pub mod columns;
pub mod naming;

use crate::{
    error::ErrorTree,
    node::BlockShape,
    visit::{ValidateVisitor, VisitableNode},
};

/// Run full shape validation in a staged, deterministic order.
pub fn validate_shape(shape: &BlockShape) -> Result<(), ErrorTree> {
    // Phase 1: validate each node (structural + local invariants).
    let mut errors = validate_nodes(shape);

    // Phase 2: enforce shape-wide invariants.
    validate_global(shape, &mut errors);

    errors.result()
}

// Validate all nodes via a visitor to retain route-aware error aggregation.
fn validate_nodes(shape: &BlockShape) -> ErrorTree {
    let mut visitor = ValidateVisitor::new();
    shape.accept(&mut visitor);

    visitor.errors
}

// Run global validation passes that require the whole flattened shape.
fn validate_global(shape: &BlockShape, errors: &mut ErrorTree) {
    columns::validate_flat_columns(shape, errors);
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        node::{Field, GroupField, TabsField},
        types::Scalar,
    };

    #[test]
    fn valid_shape_passes_both_phases() {
        let shape = BlockShape {
            fields: vec![
                Field::scalar("title", Scalar::Text),
                Field::Group(GroupField::new(
                    "meta",
                    vec![Field::scalar("description", Scalar::Textarea)],
                )),
            ]
            .into(),
            ..BlockShape::new("hero")
        };

        assert!(validate_shape(&shape).is_ok());
    }

    #[test]
    fn node_errors_carry_their_route() {
        let shape = BlockShape {
            fields: vec![Field::Group(GroupField::new(
                "meta",
                vec![Field::scalar("", Scalar::Text)],
            ))]
            .into(),
            ..BlockShape::new("hero")
        };

        let tree = validate_shape(&shape).unwrap_err();
        assert_eq!(tree.to_string(), "hero.meta: field ident is empty");
    }

    #[test]
    fn both_phases_report_in_one_tree() {
        let shape = BlockShape {
            fields: vec![
                Field::Tabs(TabsField::new(vec![])),
                Field::scalar("title", Scalar::Text),
                Field::scalar("title", Scalar::Textarea),
            ]
            .into(),
            ..BlockShape::new("hero")
        };

        let tree = validate_shape(&shape).unwrap_err();
        assert_eq!(tree.len(), 2);
    }
}
