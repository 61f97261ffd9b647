//! Scenario tests for the ordering engine public API

use group_ordering::{
    AddOptions, ConflictOrigin, ConstraintViolation, GroupLabel, OrderingConfig, OrderingEngine,
    OrderingError,
};

#[test]
fn unconstrained_items_keep_insertion_order() {
    let mut engine = OrderingEngine::new();
    engine.add_one("A", AddOptions::new()).unwrap();
    engine.add_one("B", AddOptions::new()).unwrap();
    engine.add_one("C", AddOptions::new()).unwrap();

    assert_eq!(engine.nodes(), ["A", "B", "C"]);
}

#[test]
fn before_group_places_item_first() {
    let mut engine = OrderingEngine::new();
    engine.add_one("a", AddOptions::new().group("a")).unwrap();
    let nodes = engine
        .add_one("b", AddOptions::new().group("b").before("a"))
        .unwrap();

    assert_eq!(nodes, ["b", "a"]);
}

#[test]
fn mixed_before_and_after_constraints() {
    let mut engine = OrderingEngine::new();
    engine
        .add(["0", "a", "b", "c"], AddOptions::new().group("a"))
        .unwrap();
    engine.add_one("d", AddOptions::new().group("b")).unwrap();
    engine
        .add_one("e", AddOptions::new().group("c").before("b"))
        .unwrap();
    engine
        .add_one("f", AddOptions::new().group("d").after("a"))
        .unwrap();
    engine
        .add_one("g", AddOptions::new().group("e").before("a"))
        .unwrap();
    engine.add_one("h", AddOptions::new()).unwrap();

    assert_eq!(engine.nodes(), ["e", "d", "g", "0", "a", "b", "c", "f", "h"]);
}

#[test]
fn constraint_applies_to_members_added_later() {
    let mut engine = OrderingEngine::new();
    engine
        .add_one("first", AddOptions::new().group("early").after("late"))
        .unwrap();
    engine.add_one("x", AddOptions::new()).unwrap();
    let nodes = engine
        .add_one("second", AddOptions::new().group("late"))
        .unwrap();

    assert_eq!(nodes, ["x", "second", "first"]);
}

#[test]
fn list_targets_expand_to_every_group() {
    let mut engine = OrderingEngine::new();
    engine.add_one(1, AddOptions::new().group("a")).unwrap();
    engine.add_one(2, AddOptions::new().group("b")).unwrap();
    engine
        .add_one(3, AddOptions::new().group("c").before_all(["a", "b"]))
        .unwrap();
    engine
        .add_one(0, AddOptions::new().group("z").after_all(["a", "b", "c"]))
        .unwrap();

    assert_eq!(engine.nodes(), [3, 1, 2, 0]);
}

#[test]
fn mutual_before_raises_dependency_conflict() {
    let mut engine = OrderingEngine::new();
    engine
        .add_one("x", AddOptions::new().group("x").before("y"))
        .unwrap();

    let result = engine
        .add_one("y", AddOptions::new().group("y").before("x"))
        .map(|nodes| nodes.len());

    match result {
        Err(OrderingError::DependencyConflict { origin, .. }) => {
            assert_eq!(
                origin,
                ConflictOrigin::Add {
                    group: Some(GroupLabel::from("y"))
                }
            );
        }
        other => panic!("Expected DependencyConflict, got {other:?}"),
    }
    assert_eq!(engine.nodes(), ["x"]);
}

#[test]
fn unassociated_conflict_message_omits_group() {
    let mut engine = OrderingEngine::new();
    engine
        .add_one("x", AddOptions::new().group("x").after("y"))
        .unwrap();
    engine
        .add_one("y", AddOptions::new().group("y").after("z"))
        .unwrap();

    // Unassociated items may still be constrained, just not targeted
    let err = engine
        .add_one("free", AddOptions::new().before("y").after("x"))
        .unwrap_err();

    assert_eq!(err.to_string(), "item created a dependencies error");
    assert_eq!(engine.nodes(), ["y", "x"]);
}

#[test]
fn self_constraint_is_rejected() {
    let mut engine = OrderingEngine::new();

    let before = engine
        .add_one(1, AddOptions::new().group("x").before("x"))
        .unwrap_err();
    assert!(matches!(
        before,
        OrderingError::InvalidConstraint(ConstraintViolation::BeforeSelf { .. })
    ));
    assert_eq!(before.to_string(), "Item cannot come before itself: x");

    let after = engine
        .add_one(1, AddOptions::new().group("x").after("x"))
        .unwrap_err();
    assert_eq!(after.to_string(), "Item cannot come after itself: x");

    assert!(engine.is_empty());
}

#[test]
fn unassociated_target_is_rejected() {
    let mut engine = OrderingEngine::new();

    let before = engine
        .add_one(1, AddOptions::new().group("x").before("?"))
        .unwrap_err();
    assert_eq!(
        before.to_string(),
        "Item cannot come before unassociated items"
    );

    let after = engine
        .add_one(1, AddOptions::new().after("?").group("x"))
        .unwrap_err();
    assert_eq!(after.to_string(), "Item cannot come after unassociated items");

    assert!(engine.is_empty());
}

#[test]
fn merge_preserves_concatenation_order() {
    let mut first = OrderingEngine::new();
    first.add(["a1", "a2"], AddOptions::new()).unwrap();
    let mut second = OrderingEngine::new();
    second.add(["b1", "b2"], AddOptions::new()).unwrap();

    let mut engine: OrderingEngine<&str> = OrderingEngine::new();
    engine.merge([&first, &second]).unwrap();

    assert_eq!(engine.nodes(), ["a1", "a2", "b1", "b2"]);
}

#[test]
fn merge_orders_by_sort_weight() {
    let mut first = OrderingEngine::new();
    first.add_one(1, AddOptions::new().sort(5)).unwrap();
    let mut second = OrderingEngine::new();
    second.add_one(2, AddOptions::new().sort(1)).unwrap();

    let mut engine: OrderingEngine<i32> = OrderingEngine::new();
    let nodes = engine.merge([&first, &second]).unwrap();

    assert_eq!(nodes, [2, 1]);
}

#[test]
fn merge_applies_constraints_across_sources() {
    let mut first = OrderingEngine::new();
    first
        .add_one("0", AddOptions::new().group("a").sort(1))
        .unwrap();
    first
        .add_one("2", AddOptions::new().group("c").before("a").sort(2))
        .unwrap();

    let mut second = OrderingEngine::new();
    second
        .add_one("1", AddOptions::new().group("b").after("c").sort(0))
        .unwrap();

    let mut engine: OrderingEngine<&str> = OrderingEngine::new();
    let nodes = engine.merge([Some(&first), None, Some(&second)]).unwrap();

    assert_eq!(nodes, ["2", "1", "0"]);
    assert_eq!(first.nodes(), ["2", "0"]);
    assert_eq!(second.nodes(), ["1"]);
}

#[test]
fn merge_then_add_continues_numbering() {
    let mut source = OrderingEngine::new();
    source.add(["s1", "s2"], AddOptions::new()).unwrap();

    let mut engine = OrderingEngine::new();
    engine.add_one("e1", AddOptions::new()).unwrap();
    engine.merge(Some(&source)).unwrap();
    engine.add_one("e2", AddOptions::new()).unwrap();

    assert_eq!(engine.nodes(), ["e1", "s1", "s2", "e2"]);
}

#[test]
fn failed_merge_leaves_engine_untouched() {
    let mut engine = OrderingEngine::new();
    engine
        .add_one("x", AddOptions::new().group("x").before("y"))
        .unwrap();

    let mut other = OrderingEngine::new();
    other
        .add_one("y", AddOptions::new().group("y").before("x"))
        .unwrap();

    let err = engine.merge([&other]).unwrap_err();

    assert!(err.is_dependency_conflict());
    assert_eq!(engine.nodes(), ["x"]);

    // Still usable afterwards
    engine.add_one("z", AddOptions::new().group("y")).unwrap();
    assert_eq!(engine.nodes(), ["x", "z"]);
}

#[test]
fn options_load_from_json() {
    let declarations = r#"[
        {"group": "a"},
        {"group": "b", "before": "a"},
        {"group": "c", "after": ["a", "b"], "sort": 4}
    ]"#;
    let options: Vec<AddOptions> = serde_json::from_str(declarations).unwrap();

    let mut engine = OrderingEngine::new();
    for (name, opts) in ["a", "b", "c"].into_iter().zip(options) {
        engine.add_one(name, opts).unwrap();
    }

    assert_eq!(engine.nodes(), ["b", "a", "c"]);
}

#[test]
fn config_loads_from_json() {
    let config: OrderingConfig =
        serde_json::from_str(r#"{"max_entries": 1, "cycle_diagnostics": false}"#).unwrap();
    let mut engine = OrderingEngine::with_config(config);

    engine.add_one(1, AddOptions::new()).unwrap();
    let err = engine.add_one(2, AddOptions::new()).unwrap_err();

    assert!(matches!(err, OrderingError::TooManyEntries { count: 2, max: 1 }));
    assert!(!engine.config().cycle_diagnostics);
}
