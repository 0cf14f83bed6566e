use json_lws::lws::kind::Kind;
use json_lws::lws::rule::Rule;
use json_lws::lws::schema::{SchemaKey, SchemaNode, SchemaTree, SchemaValue};
use json_lws::lws::validate;
use regex::Regex;
use serde_json::json;

fn schema_with_nested_dict() -> SchemaTree {
    SchemaTree::wrap(vec![(
        SchemaKey::new("item", Kind::Text, Some(Rule::Regex(Regex::new("item_.+").unwrap())), None),
        SchemaNode::Interior(vec![(
            SchemaKey::new("name", Kind::Text, Some(Rule::Regex(Regex::new(".+").unwrap())), None),
            SchemaNode::Leaf(SchemaValue::new("value", Kind::Text, None)),
        )]),
    )])
}

#[test]
fn nested_dict_with_matching_shape_validates_cleanly() {
    let schema = schema_with_nested_dict();
    let data = json!({"item_1": {"name": "apples"}});
    let outcome = validate(&schema, &data);
    assert_eq!(outcome.schema_key_errors, 0);
    assert_eq!(outcome.schema_value_errors, 0);
    assert_eq!(outcome.data_key_errors, 0);
    assert_eq!(outcome.data_value_errors, 0);
}

#[test]
fn non_dict_value_under_an_interior_key_becomes_a_missing_child_key_error() {
    let schema = schema_with_nested_dict();
    let data = json!({"item_1": "not a dict"});
    let outcome = validate(&schema, &data);
    assert_eq!(outcome.schema_key_errors, 1, "child key `name` cannot be found inside a non-dict value");
}

#[test]
fn unknown_top_level_key_is_reported_only_on_the_data_driven_side() {
    let schema = schema_with_nested_dict();
    let data = json!({"item_1": {"name": "apples"}, "unrelated": 1});
    let outcome = validate(&schema, &data);
    assert_eq!(outcome.schema_key_errors, 0);
    assert_eq!(outcome.data_key_errors, 1);
}
