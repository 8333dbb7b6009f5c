//! Property-based tests for Prism behavior.
//!
//! This module verifies the Prism contract:
//!
//! - **Absence propagation**: `preview` is `None` whenever the branch is absent.
//! - **PutPreview**: after a literal set, `preview` yields the set value.
//! - **Modify no-op**: a functional update over an absent branch returns the
//!   source unchanged, exactly.
//! - **Modify round-trip**: over a present branch, `preview` after `modify`
//!   equals the function applied to the old value.

use proptest::prelude::*;
use refract::{some, Prism};

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
enum Shape {
    Circle(i32),
    Rectangle(i32, i32),
}

#[derive(Clone, PartialEq, Debug)]
struct Config {
    theme: Option<String>,
    retries: u32,
}

fn circle_prism() -> Prism<Shape, i32> {
    refract::prism!(Shape, Circle)
}

fn theme_prism() -> Prism<Config, String> {
    Prism::new(
        |config: &Config| config.theme.clone(),
        |config: Config, theme: String| Config {
            theme: Some(theme),
            ..config
        },
    )
}

// =============================================================================
// Variant prisms
// =============================================================================

proptest! {
    /// preview on the matching variant yields the payload
    #[test]
    fn prop_preview_on_match(radius in any::<i32>()) {
        prop_assert_eq!(circle_prism().preview(&Shape::Circle(radius)), Some(radius));
    }

    /// preview on a non-matching variant yields None
    #[test]
    fn prop_preview_on_no_match(w in any::<i32>(), h in any::<i32>()) {
        prop_assert_eq!(circle_prism().preview(&Shape::Rectangle(w, h)), None);
    }

    /// PutPreview: a literal set always lands in the focused branch
    #[test]
    fn prop_put_then_preview(w in any::<i32>(), h in any::<i32>(), radius in any::<i32>()) {
        let prism = circle_prism();
        let built = prism.put(Shape::Rectangle(w, h), radius);
        prop_assert_eq!(prism.preview(&built), Some(radius));
    }

    /// Modify no-op: a functional update on a non-matching variant is exact identity
    #[test]
    fn prop_modify_no_op_on_no_match(w in any::<i32>(), h in any::<i32>(), delta in any::<i32>()) {
        let prism = circle_prism();
        let rect = Shape::Rectangle(w, h);
        let result = prism.modify(rect.clone(), move |r| r.wrapping_add(delta));
        prop_assert_eq!(result, rect);
    }

    /// Modify round-trip on the matching variant
    #[test]
    fn prop_modify_round_trip_on_match(radius in any::<i32>(), delta in any::<i32>()) {
        let prism = circle_prism();
        let modified = prism.modify(Shape::Circle(radius), move |r| r.wrapping_add(delta));
        prop_assert_eq!(prism.preview(&modified), Some(radius.wrapping_add(delta)));
    }
}

// =============================================================================
// Optional-field prisms
// =============================================================================

proptest! {
    /// Absence propagation on an optional field
    #[test]
    fn prop_absent_field_previews_none(retries in any::<u32>()) {
        let config = Config { theme: None, retries };
        prop_assert_eq!(theme_prism().preview(&config), None);
    }

    /// A literal set materializes the absent branch through the base setter
    #[test]
    fn prop_put_materializes_absent_field(retries in any::<u32>(), theme in ".*") {
        let prism = theme_prism();
        let config = Config { theme: None, retries };
        let updated = prism.put(config, theme.clone());
        prop_assert_eq!(updated.theme, Some(theme));
        prop_assert_eq!(updated.retries, retries);
    }

    /// A functional set over the absent branch is a no-op, exactly
    #[test]
    fn prop_modify_absent_field_is_no_op(retries in any::<u32>()) {
        let prism = theme_prism();
        let config = Config { theme: None, retries };
        let result = prism.modify(config.clone(), |theme| theme.to_uppercase());
        prop_assert_eq!(result, config);
    }

    /// Unrelated fields survive a literal set on a present branch
    #[test]
    fn prop_put_preserves_unrelated_fields(retries in any::<u32>(), old in ".*", new in ".*") {
        let prism = theme_prism();
        let config = Config { theme: Some(old), retries };
        let updated = prism.put(config, new.clone());
        prop_assert_eq!(updated.theme, Some(new));
        prop_assert_eq!(updated.retries, retries);
    }
}

// =============================================================================
// Standard Option prism
// =============================================================================

proptest! {
    /// some() round-trips through put and propagates absence
    #[test]
    fn prop_some_prism_contract(value in any::<i64>(), replacement in any::<i64>()) {
        let prism = some::<i64>();

        prop_assert_eq!(prism.preview(&Some(value)), Some(value));
        prop_assert_eq!(prism.preview(&None), None);
        prop_assert_eq!(prism.put(None, replacement), Some(replacement));
        prop_assert_eq!(prism.modify(None, |x| x + 1), None);
    }
}
