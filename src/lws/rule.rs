//! Rule Matcher: per-kind predicates answering "does this value satisfy
//! this rule?" A rule is a regex pattern (text), a literal (num/bool/list),
//! a user-supplied predicate, or empty (accept-all).

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use crate::lws::kind::Kind;

/// A user-supplied predicate over a runtime JSON value.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A schema-declared matching rule.
#[derive(Clone)]
pub enum Rule {
    /// A compiled regex, used by text kinds.
    Regex(Regex),
    /// A literal JSON value, used by num/bool/list kinds.
    Literal(Value),
    /// A caller-supplied predicate.
    Predicate(Predicate),
    /// No rule given; accept anything (subject to the kind's own default
    /// contract, e.g. text still rejects empty values).
    None,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Regex(r) => write!(f, "Rule::Regex({})", r.as_str()),
            Rule::Literal(v) => write!(f, "Rule::Literal({v})"),
            Rule::Predicate(_) => write!(f, "Rule::Predicate(..)"),
            Rule::None => write!(f, "Rule::None"),
        }
    }
}

impl Rule {
    /// The default rule for a given kind when the schema document omits
    /// one: `.*` for text, empty otherwise.
    pub fn default_for(kind: Kind) -> Rule {
        match kind {
            Kind::Text => Rule::Regex(Regex::new(".*").expect("`.*` is always valid")),
            _ => Rule::None,
        }
    }
}

/// Full-match semantics for text: the regex must find a match that equals
/// the value verbatim. Empty values never match, even against a
/// trivially-accepting regex like `.*`.
pub fn match_text(value: &str, rule: &Rule) -> bool {
    if value.is_empty() {
        return false;
    }
    match rule {
        Rule::Predicate(f) => f(&Value::String(value.to_string())),
        Rule::Regex(re) => re.find(value).is_some_and(|m| m.as_str() == value),
        Rule::Literal(Value::String(s)) => s == value,
        Rule::Literal(_) | Rule::None => true,
    }
}

/// Numeric rule: predicate if callable, equality if a non-empty literal is
/// given, else accept. Integers and floats of equal magnitude compare
/// equal.
pub fn match_num(value: &Value, rule: &Rule) -> bool {
    match rule {
        Rule::Predicate(f) => f(value),
        Rule::Literal(lit) => numbers_equal(value, lit),
        Rule::Regex(_) | Rule::None => true,
    }
}

fn numbers_equal(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// List rule: predicate if callable, deep equality if a non-empty literal
/// is given, else accept.
pub fn match_list(value: &Value, rule: &Rule) -> bool {
    match rule {
        Rule::Predicate(f) => f(value),
        Rule::Literal(lit) => value == lit,
        Rule::Regex(_) | Rule::None => true,
    }
}

/// Boolean rule: empty rule accepts anything, otherwise strict identity
/// against the literal.
pub fn match_bool(value: &Value, rule: &Rule) -> bool {
    match rule {
        Rule::None => true,
        Rule::Predicate(f) => f(value),
        Rule::Literal(Value::Bool(b)) => value.as_bool() == Some(*b),
        Rule::Literal(_) => false,
        Rule::Regex(_) => true,
    }
}

/// Null always accepts.
pub fn match_null(_value: &Value, _rule: &Rule) -> bool {
    true
}

/// Dispatch on the runtime value's classified kind and call the matching
/// type-specific predicate. Values whose classified kind has no matcher
/// (there are none in this closed domain) never match.
pub fn matches(value: &Value, rule: &Rule) -> bool {
    match Kind::classify_value(value) {
        Kind::Text => match_text(value.as_str().unwrap_or_default(), rule),
        Kind::Num => match_num(value, rule),
        Kind::List => match_list(value, rule),
        Kind::Bool => match_bool(value, rule),
        Kind::Null => match_null(value, rule),
        Kind::Dict | Kind::Unknown => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_never_matches_even_dot_star() {
        let rule = Rule::default_for(Kind::Text);
        assert!(!match_text("", &rule));
    }

    #[test]
    fn text_requires_full_coverage() {
        let rule = Rule::Regex(Regex::new("[A-Z]+").unwrap());
        assert!(match_text("BAC", &rule));
        assert!(!match_text("BACx", &rule));
    }

    #[test]
    fn num_literal_equality_across_int_and_float() {
        let rule = Rule::Literal(Value::from(42));
        assert!(match_num(&Value::from(42.0), &rule));
        assert!(!match_num(&Value::from(41), &rule));
    }

    #[test]
    fn bool_empty_rule_accepts_anything() {
        assert!(match_bool(&Value::Bool(false), &Rule::None));
    }

    #[test]
    fn bool_literal_requires_identity() {
        let rule = Rule::Literal(Value::Bool(true));
        assert!(match_bool(&Value::Bool(true), &rule));
        assert!(!match_bool(&Value::Bool(false), &rule));
    }

    #[test]
    fn list_literal_is_deep_equality() {
        let rule = Rule::Literal(Value::from(vec![1, 2, 3]));
        assert!(match_list(&Value::from(vec![1, 2, 3]), &rule));
        assert!(!match_list(&Value::from(vec![1, 2]), &rule));
    }

    #[test]
    fn null_always_matches() {
        assert!(match_null(&Value::Null, &Rule::None));
    }
}
