//! Integration tests for joining selectors with combinators.
//!
//! - All four combinators: descendant (space), `>`, `+`, `~`
//! - The join is always `"<left> <token> <right>"`
//! - Nested combinations render left-to-right
//! - The combined result starts a fresh chain

use cssel::{Combinator, SelectorBuilder};

fn element(name: &str) -> SelectorBuilder {
    SelectorBuilder::new().element(name).unwrap()
}

// ============================================================================
// BASIC COMBINATION
// ============================================================================

#[test]
fn test_combine_child() {
    let sel = element("ul").combine(Combinator::Child, &element("li"));
    assert_eq!(sel.to_string(), "ul > li");
}

#[test]
fn test_combine_adjacent_sibling() {
    let sel = element("h1").combine(Combinator::AdjacentSibling, &element("p"));
    assert_eq!(sel.to_string(), "h1 + p");
}

#[test]
fn test_combine_general_sibling() {
    let sel = element("h1").combine(Combinator::GeneralSibling, &element("p"));
    assert_eq!(sel.to_string(), "h1 ~ p");
}

#[test]
fn test_combine_descendant() {
    // The descendant token is itself a space, so the space-padded join
    // contains three spaces.
    let sel = element("div").combine(Combinator::Descendant, &element("span"));
    assert_eq!(sel.to_string(), "div   span");
}

#[test]
fn test_combine_matches_operand_renderings() {
    let left = SelectorBuilder::new()
        .element("a")
        .unwrap()
        .class("external")
        .unwrap();
    let right = SelectorBuilder::new()
        .id("footer")
        .unwrap()
        .pseudo_class("hover")
        .unwrap();

    for combinator in [
        Combinator::Descendant,
        Combinator::Child,
        Combinator::AdjacentSibling,
        Combinator::GeneralSibling,
    ] {
        let joined = left.combine(combinator, &right);
        assert_eq!(
            joined.to_string(),
            format!("{} {} {}", left, combinator.token(), right)
        );
    }
}

// ============================================================================
// NESTED COMBINATION
// ============================================================================

#[test]
fn test_nested_combination_left_to_right() {
    let inner = element("ul").combine(Combinator::Child, &element("li"));
    let sel = inner.combine(Combinator::Child, &element("a"));
    assert_eq!(sel.to_string(), "ul > li > a");
}

#[test]
fn test_nested_combination_right_operand() {
    let inner = element("li").combine(Combinator::AdjacentSibling, &element("li"));
    let sel = element("ul").combine(Combinator::Child, &inner);
    assert_eq!(sel.to_string(), "ul > li + li");
}

// ============================================================================
// CHAINS ON COMBINED RESULTS
// ============================================================================

#[test]
fn test_combined_result_starts_fresh_chain() {
    let combined = element("nav").combine(Combinator::Child, &element("a"));
    // The element part of the combined result is unset, so setting it
    // succeeds even though both operands already had one.
    let extended = combined.element("span").unwrap();
    assert_eq!(extended.to_string(), "nav > aspan");
}

#[test]
fn test_parts_render_after_combined_prefix() {
    let combined = element("div").combine(Combinator::Child, &element("p"));
    let extended = combined.pseudo_class("hover").unwrap();
    assert_eq!(extended.to_string(), "div > p:hover");
}

#[test]
fn test_combine_leaves_operands_unchanged() {
    let left = element("div");
    let right = element("span");
    let _ = left.combine(Combinator::Child, &right);
    assert_eq!(left.to_string(), "div");
    assert_eq!(right.to_string(), "span");
}
