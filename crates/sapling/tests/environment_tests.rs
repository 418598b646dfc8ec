//! Environment tests

use pretty_assertions::assert_eq;
use sapling::*;

// ═══════════════════════════════════════════════════════════════════════
// Basic Operations
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_environment_new_is_empty() {
    let env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.len(), 0);
    assert_eq!(env.get("x"), None);
    assert!(!env.contains("x"));
}

#[test]
fn test_environment_extend_and_get() {
    let env = Environment::new().extend("x", Value::int(42));

    assert_eq!(env.get("x"), Some(&Value::int(42)));
    assert_eq!(env.get("y"), None);
    assert!(env.contains("x"));
    assert!(!env.contains("y"));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_environment_extend_multiple() {
    let env = Environment::new()
        .extend("a", Value::int(1))
        .extend("b", Value::int(2))
        .extend("c", Value::int(3));

    assert_eq!(env.len(), 3);
    assert_eq!(env.get("a"), Some(&Value::int(1)));
    assert_eq!(env.get("b"), Some(&Value::int(2)));
    assert_eq!(env.get("c"), Some(&Value::int(3)));
}

#[test]
fn test_environment_contains_counts_unbound_slots() {
    let env = Environment::new().extend("x", Value::Unbound);
    assert!(env.contains("x"));
    assert_eq!(env.get("x"), Some(&Value::Unbound));
}

// ═══════════════════════════════════════════════════════════════════════
// Persistence
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_extend_leaves_original_untouched() {
    let base = Environment::new().extend("x", Value::int(1));
    let derived = base.extend("y", Value::int(2));

    assert_eq!(base.len(), 1);
    assert!(!base.contains("y"));
    assert_eq!(derived.len(), 2);
    assert_eq!(derived.get("x"), Some(&Value::int(1)));
}

#[test]
fn test_update_leaves_original_untouched() {
    let base = Environment::new().extend("x", Value::Unbound);
    let derived = base.update("x", Value::int(5));

    assert_eq!(base.get("x"), Some(&Value::Unbound));
    assert_eq!(derived.get("x"), Some(&Value::int(5)));
}

#[test]
fn test_remove_leaves_original_untouched() {
    let base = Environment::new()
        .extend("x", Value::int(1))
        .extend("y", Value::int(2));
    let derived = base.remove("x");

    assert_eq!(base.len(), 2);
    assert!(base.contains("x"));
    assert_eq!(derived.len(), 1);
    assert!(!derived.contains("x"));
    assert_eq!(derived.get("y"), Some(&Value::int(2)));
}

#[test]
fn test_many_independent_derivations() {
    let base = Environment::new().extend("x", Value::int(1));

    let a = base.extend("a", Value::int(10));
    let b = base.extend("b", Value::int(20));
    let c = base.remove("x");

    // Each derivation sees only its own change
    assert!(a.contains("a") && !a.contains("b") && a.contains("x"));
    assert!(b.contains("b") && !b.contains("a") && b.contains("x"));
    assert!(c.is_empty());
    assert_eq!(base.len(), 1);
}

// ═══════════════════════════════════════════════════════════════════════
// No-op Semantics
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_update_of_absent_name_is_a_silent_noop() {
    let env = Environment::new().extend("x", Value::int(1));
    let same = env.update("missing", Value::int(9));

    assert_eq!(same, env);
    assert!(!same.contains("missing"));
}

#[test]
fn test_remove_of_absent_name_is_a_noop_at_this_layer() {
    let env = Environment::new().extend("x", Value::int(1));
    let same = env.remove("missing");

    assert_eq!(same, env);
}

// ═══════════════════════════════════════════════════════════════════════
// Ordering and Rendering
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_iteration_order_is_insertion_order() {
    let env = Environment::new()
        .extend("first", Value::int(1))
        .extend("second", Value::int(2))
        .extend("third", Value::int(3));

    assert_eq!(env.names(), vec!["first", "second", "third"]);
}

#[test]
fn test_remove_preserves_relative_order() {
    let env = Environment::new()
        .extend("a", Value::int(1))
        .extend("b", Value::int(2))
        .extend("c", Value::int(3))
        .remove("b");

    assert_eq!(env.names(), vec!["a", "c"]);
}

#[test]
fn test_update_preserves_position() {
    let env = Environment::new()
        .extend("a", Value::Unbound)
        .extend("b", Value::int(2))
        .update("a", Value::int(1));

    assert_eq!(env.names(), vec!["a", "b"]);
    assert_eq!(env.get("a"), Some(&Value::int(1)));
}

#[test]
fn test_display_rendering() {
    let env = Environment::new()
        .extend("a", Value::int(5))
        .extend("b", Value::Unbound);

    assert_eq!(env.to_string(), "{a: 5, b: unbound}");
    assert_eq!(Environment::new().to_string(), "{}");
}

#[test]
fn test_iter_yields_pairs_in_order() {
    let env = Environment::new()
        .extend("a", Value::int(1))
        .extend("b", Value::int(2));

    let pairs: Vec<_> = env.iter().collect();
    assert_eq!(
        pairs,
        vec![("a", &Value::int(1)), ("b", &Value::int(2))]
    );
}
