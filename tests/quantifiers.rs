use json_lws::lws::kind::Kind;
use json_lws::lws::rule::Rule;
use json_lws::lws::schema::{Quantifier, SchemaKey, SchemaNode, SchemaTree, SchemaValue};
use json_lws::lws::validate;
use regex::Regex;
use serde_json::json;

fn ticker_schema(quantifier: Option<Quantifier>) -> SchemaTree {
    SchemaTree::wrap(vec![(
        SchemaKey::new("ticker", Kind::Text, Some(Rule::Regex(Regex::new("[A-Z]+").unwrap())), quantifier),
        SchemaNode::Leaf(SchemaValue::new("price", Kind::Num, None)),
    )])
}

#[test]
fn maybe_accepts_exactly_one_matching_key() {
    let schema = ticker_schema(Some(Quantifier::Maybe));
    let one = validate(&schema, &json!({"BAC": 1.0}));
    assert_eq!(one.schema_key_errors, 0);
}

#[test]
fn maybe_still_errors_on_zero_matches() {
    // `find_data_keys` in the original source records a key error whenever
    // the matched set is empty, independent of what the quantifier would
    // otherwise permit (`if not d_keys: ... error`); `?`'s "zero is fine"
    // reading never actually surfaces as a clean schema-driven walk.
    let schema = ticker_schema(Some(Quantifier::Maybe));
    let empty = validate(&schema, &json!({}));
    assert_eq!(empty.schema_key_errors, 1);
}

#[test]
fn maybe_rejects_two_matching_keys() {
    let schema = ticker_schema(Some(Quantifier::Maybe));
    let outcome = validate(&schema, &json!({"BAC": 1.0, "C": 2.0}));
    assert_eq!(outcome.schema_key_errors, 1);
}

#[test]
fn plus_rejects_a_single_matching_key() {
    let schema = ticker_schema(Some(Quantifier::Plus));
    let outcome = validate(&schema, &json!({"BAC": 1.0}));
    assert_eq!(outcome.schema_key_errors, 1);
}

#[test]
fn plus_accepts_two_or_more_matching_keys() {
    let schema = ticker_schema(Some(Quantifier::Plus));
    let outcome = validate(&schema, &json!({"BAC": 1.0, "C": 2.0}));
    assert_eq!(outcome.schema_key_errors, 0);
}

#[test]
fn star_accepts_one_or_more_matches_but_still_errors_on_zero() {
    let schema = ticker_schema(Some(Quantifier::Star));
    assert_eq!(validate(&schema, &json!({})).schema_key_errors, 1);
    assert_eq!(validate(&schema, &json!({"BAC": 1.0})).schema_key_errors, 0);
    assert_eq!(validate(&schema, &json!({"BAC": 1.0, "C": 2.0})).schema_key_errors, 0);
}

#[test]
fn no_quantifier_places_no_cardinality_constraint() {
    let schema = ticker_schema(None);
    assert_eq!(validate(&schema, &json!({"BAC": 1.0})).schema_key_errors, 0);
    assert_eq!(validate(&schema, &json!({"BAC": 1.0, "C": 2.0})).schema_key_errors, 0);
}

#[test]
fn no_quantifier_still_errors_when_nothing_matches() {
    let schema = ticker_schema(None);
    assert_eq!(validate(&schema, &json!({})).schema_key_errors, 1);
}
