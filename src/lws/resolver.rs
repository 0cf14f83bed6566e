//! Key Resolver: given a schema-key descriptor and a data object, returns
//! the data keys that match, honoring the quantifier; and the symmetric
//! variant, given a data key, returns the schema-key descriptors that
//! admit it.

use serde_json::Map;
use serde_json::Value;

use crate::lws::kind::Kind;
use crate::lws::rule::match_text;
use crate::lws::schema::{Quantifier, SchemaKey};

/// Whether `count` matched keys satisfies `quantifier`:
/// - `None` or `Star`: always accept;
/// - `Plus`: accepts only when more than one key matches, not "one or more";
/// - `Maybe`: accept iff `count < 2`.
pub fn quantifier_allows(quantifier: Quantifier, count: usize) -> bool {
    match quantifier {
        Quantifier::None | Quantifier::Star => true,
        Quantifier::Plus => count > 1,
        Quantifier::Maybe => count < 2,
    }
}

/// A data key is a candidate for a schema-key descriptor iff the
/// descriptor classifies as text and the key's text matches the
/// descriptor's rule. Non-text key descriptors never match — JSON object
/// keys are always strings.
fn key_is_candidate(data_key: &str, descriptor: &SchemaKey) -> bool {
    descriptor.kind == Kind::Text && match_text(data_key, &descriptor.rule)
}

/// Return the data keys in `data` that match `schema_key`, or the empty
/// list if the matched set's cardinality violates the quantifier.
pub fn resolve_data_keys(data: &Map<String, Value>, schema_key: &SchemaKey) -> Vec<String> {
    let found: Vec<String> = data
        .keys()
        .filter(|k| key_is_candidate(k, schema_key))
        .cloned()
        .collect();

    if quantifier_allows(schema_key.quantifier, found.len()) {
        found
    } else {
        Vec::new()
    }
}

/// Return every schema-key descriptor in `schema` that admits `data_key`.
/// No quantifier check in this direction: the data-driven walk only asks
/// "is this data key permitted by *some* descriptor", not "how many data
/// keys does this descriptor require".
pub fn resolve_schema_keys<'a>(
    schema: &'a [(SchemaKey, crate::lws::schema::SchemaNode)],
    data_key: &str,
) -> Vec<&'a SchemaKey> {
    schema
        .iter()
        .map(|(key, _)| key)
        .filter(|key| key_is_candidate(data_key, key))
        .collect()
}
